//! Font metric presets.
//!
//! Offsets are measured in pixels at a 50px font size; the style builder
//! scales them to the requested size.

use std::borrow::Cow;

use crate::platform::Platform;

/// Metrics the leading-trim builder needs for one font face.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeadingTrimFont {
    /// Font family name as the text engine knows it.
    pub family: Cow<'static, str>,
    /// Distance from the top of the em box to the cap height, at 50px.
    pub ascender_offset: f32,
    /// Distance from the baseline to the bottom of the em box, at 50px.
    pub baseline_offset: f32,
    /// Line height as a multiple of the font size.
    pub line_gap_scale: f32,
}

impl LeadingTrimFont {
    /// System font on Apple platforms.
    pub const HELVETICA_NEUE: Self = Self::preset("Helvetica Neue", 13.96, 12.5);
    /// System font on Android.
    pub const ROBOTO: Self = Self::preset("Roboto", 11.94, 13.86);
    /// Fallback used when the platform font is unknown.
    pub const DEFAULT: Self = Self::preset("normal", 10.0, 10.0);

    /// Fonts bundled with the demo app, keyed by family name.
    pub const BUNDLED: [Self; 6] = [
        Self::preset("Nunito-Black", 18.31, 16.62),
        Self::preset("Nunito-Light", 19.01, 16.83),
        Self::preset("Roboto-Regular", 12.25, 13.95),
        Self::preset("Roboto-Thin", 12.25, 13.95),
        Self::preset("Roboto-Black", 12.25, 13.95),
        Self::preset("Tangerine-Regular", 11.169, 15.93),
    ];

    const fn preset(family: &'static str, ascender_offset: f32, baseline_offset: f32) -> Self {
        Self {
            family: Cow::Borrowed(family),
            ascender_offset,
            baseline_offset,
            line_gap_scale: 1.25,
        }
    }

    /// The system font for `platform`.
    pub fn system(platform: Platform) -> Self {
        match platform {
            Platform::Ios => Self::HELVETICA_NEUE,
            Platform::Android => Self::ROBOTO,
            Platform::Other => Self::DEFAULT,
        }
    }

    /// Looks up a system or bundled preset by family name, ignoring case.
    pub fn preset_named(name: &str) -> Option<Self> {
        [Self::HELVETICA_NEUE, Self::ROBOTO, Self::DEFAULT]
            .into_iter()
            .chain(Self::BUNDLED)
            .find(|font| font.family.eq_ignore_ascii_case(name))
    }
}

impl Default for LeadingTrimFont {
    fn default() -> Self {
        Self::system(Platform::current())
    }
}
