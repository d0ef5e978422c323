//! Leading-trim arithmetic for the typeset tuning tools.
//!
//! Text engines reserve space above the cap height and below the baseline,
//! and each platform centers glyphs in the line box differently. This crate
//! computes the line height, padding and margins that cancel both, so a text
//! box hugs its glyphs.
//!
//! ```
//! use typeset_trim::{LeadingTrimFont, Platform, TrimmedText};
//!
//! let text = TrimmedText::new(50.0, LeadingTrimFont::HELVETICA_NEUE).with_platform(Platform::Other);
//! let style = text.style().unwrap();
//! assert!((style.line_height - 45.3125).abs() < 1e-3);
//! assert!(style.margin_top < 0.0);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod centering;
pub mod font;
pub mod platform;
pub mod style;

pub use centering::{CenteringFn, CenteringOffsets, centering_for};
pub use font::LeadingTrimFont;
pub use platform::{Platform, UnknownPlatform};
pub use style::{LeadingTrimStyle, TrimmedText, build_leading_trim_style};
