//! Per-platform compensation for how each text engine centers glyphs inside
//! the line box.
//!
//! Every variant starts from the line height `font_size - baseline +
//! line_gap` (floored at a hair above zero) and returns the padding and
//! margins that cancel the engine's own centering. The constants were tuned
//! by eye against a 50px font and scale linearly with the font size.

use crate::platform::Platform;

/// Offsets produced by a centering variant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CenteringOffsets {
    /// Padding above the text.
    pub padding_top: f32,
    /// Margin above the text box.
    pub margin_top: f32,
    /// Margin below the text box.
    pub margin_bottom: f32,
    /// Line height to request from the text engine.
    pub line_height: f32,
}

/// Signature shared by all centering variants:
/// `(font_size, baseline, line_gap, baseline_multiplier)`.
pub type CenteringFn = fn(f32, f32, f32, f32) -> CenteringOffsets;

const MIN_LINE_HEIGHT: f32 = 0.0001;

const CENTERING_TABLE: [(Platform, CenteringFn); 3] = [
    (Platform::Ios, center_ios),
    (Platform::Android, center_android),
    (Platform::Other, center_other),
];

/// Looks up the centering variant for `platform`.
pub fn centering_for(platform: Platform) -> CenteringFn {
    CENTERING_TABLE
        .iter()
        .find(|(candidate, _)| *candidate == platform)
        .map_or(center_other as CenteringFn, |(_, centering)| *centering)
}

fn line_height(font_size: f32, baseline: f32, line_gap: f32) -> f32 {
    (font_size - baseline + line_gap).max(MIN_LINE_HEIGHT)
}

/// iOS: a constant nudge of `font_size / 18`, plus a baseline correction
/// for tight line gaps.
pub fn center_ios(
    font_size: f32,
    baseline: f32,
    line_gap: f32,
    baseline_multiplier: f32,
) -> CenteringOffsets {
    let line_height = line_height(font_size, baseline, line_gap);
    let gap_scale = line_gap / font_size;
    let nudge = font_size / 18.0;
    let mut offsets = CenteringOffsets {
        padding_top: nudge,
        margin_top: -nudge,
        margin_bottom: -nudge,
        line_height,
    };

    if gap_scale < 0.45 {
        let offset = -(line_height - (font_size + (baseline / 2.0 + baseline_multiplier)));
        offsets.padding_top += offset;
        offsets.margin_bottom += -offset / 2.0;
        offsets.margin_top += -offset;
    }
    offsets
}

/// Android: reverses the engine's custom line-height span in stages keyed on
/// the gap scale. Below `-0.5` the text would be clipped, so the offsets are
/// replaced wholesale.
pub fn center_android(
    font_size: f32,
    baseline: f32,
    line_gap: f32,
    baseline_multiplier: f32,
) -> CenteringOffsets {
    let line_height = line_height(font_size, baseline, line_gap);
    let gap_scale = line_gap / font_size;
    let mut offsets = CenteringOffsets {
        line_height,
        ..CenteringOffsets::default()
    };

    let a = font_size / 50.0;
    let b = 2.0 * font_size / 50.0;
    let c = 3.0 * font_size / 50.0;
    let overflow = line_height - font_size;

    if gap_scale < 0.64 {
        offsets.padding_top += (baseline / 2.0 + a) - overflow + a;

        if gap_scale < 0.607 {
            let shifted = baseline * baseline_multiplier;
            offsets.margin_top += baseline / 2.0 - (-overflow + shifted - c);
            offsets.margin_bottom -= (-overflow + shifted) / 2.0 - b;

            if gap_scale < -0.5 {
                offsets.margin_top = -baseline * baseline_multiplier * 2.0;
                offsets.margin_bottom = -baseline * 2.0 * gap_scale;
                offsets.padding_top = baseline * baseline_multiplier * 2.0;
                offsets.margin_bottom -= baseline * baseline_multiplier * 2.0 + b;

                if gap_scale < -0.75 {
                    let scaled = font_size / baseline_multiplier;
                    offsets.margin_top = -scaled - b;
                    offsets.margin_bottom = scaled * -0.5 - b;
                    offsets.padding_top = scaled + b;
                }
            }
        }
    }
    offsets
}

/// Every other platform: half the baseline, with a small proportional
/// correction on both margins.
pub fn center_other(
    font_size: f32,
    baseline: f32,
    line_gap: f32,
    _baseline_multiplier: f32,
) -> CenteringOffsets {
    let offset = baseline / 2.0;
    let correction = 3.0 / 200.0 * font_size;
    CenteringOffsets {
        padding_top: offset,
        margin_top: -offset - correction,
        margin_bottom: -offset - correction * 2.0,
        line_height: line_height(font_size, baseline, line_gap),
    }
}
