//! Four sliders wired to one font's leading-trim parameters.

use std::{fmt, sync::Arc};

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use typeset_slider::{SliderArgs, SliderController, TouchEvent};
use typeset_trim::{LeadingTrimFont, LeadingTrimStyle, Platform, build_leading_trim_style};

/// Font size the editor starts at.
pub const INITIAL_FONT_SIZE: f32 = 20.0;

/// A tunable trim parameter, one per slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    /// Font size in pixels.
    Size,
    /// Line height as a multiple of the font size.
    LineGapScale,
    /// Cap-height offset at 50px.
    AscenderOffset,
    /// Baseline offset at 50px.
    BaselineOffset,
}

impl Param {
    pub const ALL: [Param; 4] = [
        Param::Size,
        Param::LineGapScale,
        Param::AscenderOffset,
        Param::BaselineOffset,
    ];

    /// `(min, max, step)` of the slider editing this parameter.
    pub fn bounds(self) -> (f32, f32, f32) {
        match self {
            Param::Size => (0.0, 100.0, 1.0),
            Param::LineGapScale => (0.0, 2.0, 0.001),
            Param::AscenderOffset | Param::BaselineOffset => (0.0, 30.0, 0.01),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Param::Size => "size",
            Param::LineGapScale => "line_gap_scale",
            Param::AscenderOffset => "ascender_offset",
            Param::BaselineOffset => "baseline_offset",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current values of the four parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrimParams {
    pub font_size: f32,
    pub line_gap_scale: f32,
    pub ascender_offset: f32,
    pub baseline_offset: f32,
}

impl TrimParams {
    pub fn from_font(font: &LeadingTrimFont, font_size: f32) -> Self {
        Self {
            font_size,
            line_gap_scale: font.line_gap_scale,
            ascender_offset: font.ascender_offset,
            baseline_offset: font.baseline_offset,
        }
    }

    pub fn get(&self, param: Param) -> f32 {
        match param {
            Param::Size => self.font_size,
            Param::LineGapScale => self.line_gap_scale,
            Param::AscenderOffset => self.ascender_offset,
            Param::BaselineOffset => self.baseline_offset,
        }
    }

    pub fn set(&mut self, param: Param, value: f32) {
        match param {
            Param::Size => self.font_size = value,
            Param::LineGapScale => self.line_gap_scale = value,
            Param::AscenderOffset => self.ascender_offset = value,
            Param::BaselineOffset => self.baseline_offset = value,
        }
    }
}

struct ParamSlider {
    param: Param,
    args: SliderArgs,
    controller: SliderController,
}

/// Headless leading-trim editor.
///
/// Each slider writes into a shared parameter cell from its change handler.
/// After every input the editor hands each slider its parameter back as the
/// controlled value, the way a host re-renders a controlled component.
pub struct LeadingTrimEditor {
    family: String,
    platform: Platform,
    params: Arc<Mutex<TrimParams>>,
    sliders: Vec<ParamSlider>,
}

impl LeadingTrimEditor {
    /// Builds the editor for `font` at `font_size`.
    ///
    /// Starting values outside a slider's bounds are clamped into them.
    pub fn new(font: &LeadingTrimFont, font_size: f32, platform: Platform) -> Result<Self> {
        let params = Arc::new(Mutex::new(TrimParams::from_font(font, font_size)));
        let mut sliders = Vec::with_capacity(Param::ALL.len());
        for param in Param::ALL {
            let (min, max, step) = param.bounds();
            let cell = Arc::clone(&params);
            let args = SliderArgs::default()
                .min(min)
                .max(max)
                .step(step)
                .show_label(true)
                .on_change(move |value| cell.lock().set(param, value));
            args.validate()
                .with_context(|| format!("invalid `{param}` slider"))?;

            let initial = params.lock().get(param);
            let controller = SliderController::new(args.clone().value(initial));
            params.lock().set(param, controller.low());
            sliders.push(ParamSlider {
                param,
                args,
                controller,
            });
        }

        debug!(family = %font.family, %platform, "editor created");
        Ok(Self {
            family: font.family.to_string(),
            platform,
            params,
            sliders,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn params(&self) -> TrimParams {
        *self.params.lock()
    }

    pub fn slider(&self, param: Param) -> Option<&SliderController> {
        self.sliders
            .iter()
            .find(|slider| slider.param == param)
            .map(|slider| &slider.controller)
    }

    /// Lays out every slider on a track of `track_width` with thumbs of
    /// `thumb_width`.
    pub fn layout(&mut self, track_width: f32, thumb_width: f32) {
        for param in Param::ALL {
            self.layout_slider(param, Some(track_width), Some(thumb_width));
        }
    }

    /// Re-measures one slider. `None` leaves that measurement unchanged.
    pub fn layout_slider(
        &mut self,
        param: Param,
        track_width: Option<f32>,
        thumb_width: Option<f32>,
    ) {
        if let Some(slider) = self.slider_mut(param) {
            if let Some(width) = track_width {
                slider.controller.on_container_layout(width);
            }
            if let Some(width) = thumb_width {
                slider.controller.on_thumb_layout(width);
            }
        }
        self.echo();
    }

    /// Feeds a pointer event to one slider.
    pub fn touch(&mut self, param: Param, event: TouchEvent) {
        if let Some(slider) = self.slider_mut(param) {
            slider.controller.handle_touch(event);
        }
        self.echo();
    }

    /// Force-ends the gesture on one slider.
    pub fn cancel(&mut self, param: Param) {
        if let Some(slider) = self.slider_mut(param) {
            slider.controller.cancel();
        }
        self.echo();
    }

    /// The trim style for the current parameters.
    pub fn style(&self) -> LeadingTrimStyle {
        let params = self.params();
        build_leading_trim_style(
            params.font_size,
            params.line_gap_scale,
            params.baseline_offset,
            Some(params.ascender_offset),
            self.platform,
        )
    }

    fn slider_mut(&mut self, param: Param) -> Option<&mut ParamSlider> {
        self.sliders.iter_mut().find(|slider| slider.param == param)
    }

    fn echo(&mut self) {
        let params = self.params();
        for slider in &mut self.sliders {
            let value = params.get(slider.param);
            slider
                .controller
                .update_args(slider.args.clone().value(value));
        }
    }
}
