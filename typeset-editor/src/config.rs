use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use typeset_trim::{LeadingTrimFont, Platform};

use crate::editor::{INITIAL_FONT_SIZE, Param};

/// A replay session: how to set up the editor and which gestures to feed it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Session {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default, rename = "gesture")]
    pub gestures: Vec<Gesture>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Platform to compensate for. Defaults to the host platform.
    pub platform: Option<Platform>,
    /// Name of a font preset. Mutually exclusive with `metrics`.
    pub font: Option<String>,
    /// Inline font metrics.
    pub metrics: Option<FontMetrics>,
    pub font_size: f32,
    pub track_width: f32,
    pub thumb_width: f32,
    /// Screen x of the slider track's left edge.
    pub track_origin: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            platform: None,
            font: None,
            metrics: None,
            font_size: INITIAL_FONT_SIZE,
            track_width: 300.0,
            thumb_width: 30.0,
            track_origin: 16.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontMetrics {
    #[serde(default = "custom_family")]
    pub family: String,
    /// Falls back to `baseline_offset` when absent.
    pub ascender_offset: Option<f32>,
    pub baseline_offset: f32,
    #[serde(default = "default_line_gap_scale")]
    pub line_gap_scale: f32,
}

fn custom_family() -> String {
    "custom".to_string()
}

fn default_line_gap_scale() -> f32 {
    1.25
}

impl EditorConfig {
    /// The configured font, or the system font for `platform`.
    pub fn resolve_font(&self, platform: Platform) -> Result<LeadingTrimFont> {
        match (&self.font, &self.metrics) {
            (Some(_), Some(_)) => bail!("`font` and `metrics` cannot both be set"),
            (Some(name), None) => match LeadingTrimFont::preset_named(name) {
                Some(font) => Ok(font),
                None => bail!("unknown font preset `{name}`"),
            },
            (None, Some(metrics)) => Ok(LeadingTrimFont {
                family: metrics.family.clone().into(),
                ascender_offset: metrics.ascender_offset.unwrap_or(metrics.baseline_offset),
                baseline_offset: metrics.baseline_offset,
                line_gap_scale: metrics.line_gap_scale,
            }),
            (None, None) => Ok(LeadingTrimFont::system(platform)),
        }
    }

    fn validate(&self) -> Result<()> {
        for (name, width) in [
            ("track_width", self.track_width),
            ("thumb_width", self.thumb_width),
        ] {
            if !width.is_finite() || width < 0.0 {
                bail!("`{name}` must be a finite, non-negative width (got {width})");
            }
        }
        if !self.font_size.is_finite() {
            bail!("`font_size` must be finite (got {})", self.font_size);
        }
        Ok(())
    }
}

/// Events fed to one slider, in order.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Gesture {
    pub slider: Param,
    #[serde(default)]
    pub events: Vec<GestureEvent>,
}

/// One scripted input. Coordinates are relative to the slider track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GestureEvent {
    Down {
        x: f32,
        #[serde(default = "single_touch")]
        touches: usize,
    },
    Move {
        x: f32,
    },
    Up,
    Cancel,
    Layout {
        track_width: Option<f32>,
        thumb_width: Option<f32>,
    },
}

fn single_touch() -> usize {
    1
}

pub fn parse_session(contents: &str) -> Result<Session> {
    let session: Session = toml::from_str(contents)?;
    session.editor.validate()?;
    Ok(session)
}

pub fn load_session(path: &Path) -> Result<Session> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    parse_session(&contents).with_context(|| format!("Failed to parse {}", path.display()))
}
