use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table, presets::UTF8_FULL};
use console::style;
use serde::Serialize;
use typeset_trim::{LeadingTrimStyle, Platform};

use crate::{config::GestureEvent, editor::TrimParams, replay::Step};

const STATUS_WIDTH: usize = 12;

pub fn status(label: &str, message: impl AsRef<str>) {
    eprintln!(
        "{:>width$} {}",
        style(label).green().bold(),
        message.as_ref(),
        width = STATUS_WIDTH
    );
}

pub fn error(message: impl AsRef<str>) {
    eprintln!("{}: {}", style("error").red().bold(), message.as_ref());
}

/// Final state of a replay.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub family: String,
    pub platform: Platform,
    pub params: TrimParams,
    pub style: LeadingTrimStyle,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Step>,
}

pub fn render_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

pub fn render_table(report: &Report) -> String {
    let mut out = String::new();

    if !report.steps.is_empty() {
        let mut steps = new_table(&["#", "Slider", "Event", "Value", "Pressed"]);
        for (index, step) in report.steps.iter().enumerate() {
            steps.add_row(Row::from(vec![
                Cell::new(index + 1),
                Cell::new(step.slider),
                Cell::new(describe_event(step.event)),
                Cell::new(format_value(step.value)),
                Cell::new(if step.pressed { "yes" } else { "" }),
            ]));
        }
        out.push_str(&steps.to_string());
        out.push('\n');
    }

    let mut params = new_table(&["Parameter", "Value"]);
    params.add_row(Row::from(vec![
        Cell::new("font"),
        Cell::new(format!("{} ({})", report.family, report.platform)),
    ]));
    for (name, value) in [
        ("font_size", report.params.font_size),
        ("line_gap_scale", report.params.line_gap_scale),
        ("ascender_offset", report.params.ascender_offset),
        ("baseline_offset", report.params.baseline_offset),
    ] {
        params.add_row(Row::from(vec![Cell::new(name), Cell::new(format_value(value))]));
    }
    out.push_str(&params.to_string());
    out.push('\n');

    let mut trim = new_table(&["Style", "Value"]);
    let style = report.style;
    for (name, value) in [
        ("font_size", style.font_size),
        ("line_height", style.line_height),
        ("padding_top", style.padding_top),
        ("margin_top", style.margin_top),
        ("margin_bottom", style.margin_bottom),
    ] {
        trim.add_row(Row::from(vec![
            Cell::new(name),
            Cell::new(format!("{} px", format_value(value))),
        ]));
    }
    trim.add_row(Row::from(vec![
        Cell::new("include_font_padding"),
        Cell::new(style.include_font_padding),
    ]));
    out.push_str(&trim.to_string());
    out
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(Row::from(
            header
                .iter()
                .map(|title| Cell::new(title).fg(Color::Cyan))
                .collect::<Vec<_>>(),
        ));
    table
}

fn describe_event(event: GestureEvent) -> String {
    match event {
        GestureEvent::Down { x, touches: 1 } => format!("down @ {}", format_value(x)),
        GestureEvent::Down { x, touches } => {
            format!("down @ {} ({touches} touches)", format_value(x))
        }
        GestureEvent::Move { x } => format!("move @ {}", format_value(x)),
        GestureEvent::Up => "up".to_string(),
        GestureEvent::Cancel => "cancel".to_string(),
        GestureEvent::Layout {
            track_width,
            thumb_width,
        } => {
            let width = |w: Option<f32>| w.map_or_else(|| "-".to_string(), format_value);
            format!("layout {} / {}", width(track_width), width(thumb_width))
        }
    }
}

fn format_value(value: f32) -> String {
    let formatted = format!("{value:.3}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
