use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use typeset_trim::Platform;

mod config;
mod editor;
mod logging;
mod output;
mod replay;

use editor::LeadingTrimEditor;
use output::Report;
use replay::Replayer;

#[derive(Parser)]
#[command(name = "typeset-editor")]
#[command(version, about = "Replay slider gestures against a leading-trim editor", long_about = None)]
struct Cli {
    /// Session file (TOML) describing the editor and the gestures to replay
    session: PathBuf,
    /// Override the platform to compensate for (ios, android or other)
    #[arg(short, long)]
    platform: Option<Platform>,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Include every replayed event in the report
    #[arg(short, long)]
    trace: bool,
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let session = config::load_session(&cli.session)?;
    let platform = cli
        .platform
        .or(session.editor.platform)
        .unwrap_or_else(Platform::current);
    let font = session.editor.resolve_font(platform)?;
    output::status(
        "Loaded",
        format!(
            "{} ({} gestures, {} on {platform})",
            cli.session.display(),
            session.gestures.len(),
            font.family
        ),
    );

    let mut editor = LeadingTrimEditor::new(&font, session.editor.font_size, platform)?;
    editor.layout(session.editor.track_width, session.editor.thumb_width);
    let mut replayer = Replayer::new(editor, session.editor.track_origin);
    replayer.run(&session);
    output::status(
        "Replayed",
        format!(
            "{} events, font size {}",
            replayer.steps().len(),
            replayer.editor().params().font_size
        ),
    );

    let (editor, steps) = replayer.into_parts();
    let report = Report {
        family: editor.family().to_string(),
        platform: editor.platform(),
        params: editor.params(),
        style: editor.style(),
        steps: if cli.trace { steps } else { Vec::new() },
    };

    match cli.format {
        OutputFormat::Table => println!("{}", output::render_table(&report)),
        OutputFormat::Json => println!("{}", output::render_json(&report)?),
    }
    Ok(())
}
