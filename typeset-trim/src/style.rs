//! Builds the text style that trims the space above cap height and below
//! the baseline.

use tracing::debug;

use crate::{centering::centering_for, font::LeadingTrimFont, platform::Platform};

/// Reference size the font metrics were measured at.
const REFERENCE_SIZE: f32 = 50.0;
/// Ratio between the reference size and the metric unit.
const METRIC_DIVISOR: f32 = 2.625;

/// Style properties a text view needs to render trimmed text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeadingTrimStyle {
    /// Font size in pixels.
    pub font_size: f32,
    /// Line height in pixels.
    pub line_height: f32,
    /// Padding above the glyphs.
    pub padding_top: f32,
    /// Margin above the text box; usually negative.
    pub margin_top: f32,
    /// Margin below the text box; usually negative.
    pub margin_bottom: f32,
    /// Whether the engine should add its own font padding. Always `false`.
    pub include_font_padding: bool,
}

/// Computes the trimmed style for one font at one size.
///
/// `ascender_offset` falls back to `baseline_offset` when absent. Any field
/// that comes out non-finite is replaced with `0`.
pub fn build_leading_trim_style(
    font_size: f32,
    line_gap_scale: f32,
    baseline_offset: f32,
    ascender_offset: Option<f32>,
    platform: Platform,
) -> LeadingTrimStyle {
    let baseline_multiplier = REFERENCE_SIZE / METRIC_DIVISOR / baseline_offset;
    let ascender = ascender_offset.unwrap_or(baseline_offset) * (font_size / REFERENCE_SIZE);
    let line_gap = (line_gap_scale - 1.0) * font_size;
    let baseline = font_size - font_size / baseline_multiplier;

    let centering = centering_for(platform)(font_size, baseline, line_gap, baseline_multiplier);
    let line_height = centering.line_height;
    let padding_top = centering.padding_top;
    let margin_bottom = centering.margin_bottom - (-(baseline / 2.0) - baseline + line_height / 2.0);
    let margin_top =
        centering.margin_top + (-line_height + font_size - margin_bottom) - ascender;

    let style = LeadingTrimStyle {
        font_size: finite_or_zero("font_size", font_size),
        line_height: finite_or_zero("line_height", line_height),
        padding_top: finite_or_zero("padding_top", padding_top),
        margin_top: finite_or_zero("margin_top", margin_top),
        margin_bottom: finite_or_zero("margin_bottom", margin_bottom),
        include_font_padding: false,
    };
    debug!(%platform, ?style, "built leading-trim style");
    style
}

fn finite_or_zero(field: &'static str, value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        debug!(field, value, "non-finite leading-trim field replaced with 0");
        0.0
    }
}

/// A run of text and the metrics used to trim it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrimmedText {
    /// Font size in pixels.
    pub font_size: f32,
    /// Font metrics.
    pub font: LeadingTrimFont,
    /// Skip trimming and render with the engine's default leading.
    pub no_leading_trim: bool,
    /// Platform whose text engine is compensated for.
    pub platform: Platform,
}

impl TrimmedText {
    /// Trimmed text in `font` at `font_size`, for the current platform.
    pub fn new(font_size: f32, font: LeadingTrimFont) -> Self {
        Self {
            font_size,
            font,
            no_leading_trim: false,
            platform: Platform::current(),
        }
    }

    /// Targets `platform` instead of the current one.
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Disables trimming.
    pub fn without_leading_trim(mut self) -> Self {
        self.no_leading_trim = true;
        self
    }

    /// The trimmed style, or `None` when trimming is disabled.
    pub fn style(&self) -> Option<LeadingTrimStyle> {
        if self.no_leading_trim {
            return None;
        }
        Some(build_leading_trim_style(
            self.font_size,
            self.font.line_gap_scale,
            self.font.baseline_offset,
            Some(self.font.ascender_offset),
            self.platform,
        ))
    }
}
