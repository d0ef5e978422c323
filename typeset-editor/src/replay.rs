use serde::Serialize;
use tracing::{debug, info};
use typeset_slider::TouchEvent;

use crate::{
    config::{GestureEvent, Session},
    editor::{LeadingTrimEditor, Param},
};

/// What one replayed event did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Step {
    pub slider: Param,
    pub event: GestureEvent,
    /// The slider's value after the event.
    pub value: f32,
    pub pressed: bool,
}

/// Feeds scripted gestures to an editor, translating track-relative
/// coordinates into screen coordinates.
pub struct Replayer {
    editor: LeadingTrimEditor,
    track_origin: f32,
    steps: Vec<Step>,
}

impl Replayer {
    pub fn new(editor: LeadingTrimEditor, track_origin: f32) -> Self {
        Self {
            editor,
            track_origin,
            steps: Vec::new(),
        }
    }

    pub fn editor(&self) -> &LeadingTrimEditor {
        &self.editor
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_parts(self) -> (LeadingTrimEditor, Vec<Step>) {
        (self.editor, self.steps)
    }

    pub fn run(&mut self, session: &Session) {
        for (index, gesture) in session.gestures.iter().enumerate() {
            debug!(index, slider = %gesture.slider, events = gesture.events.len(), "replaying gesture");
            for event in &gesture.events {
                self.apply(gesture.slider, *event);
            }
        }
        info!(
            gestures = session.gestures.len(),
            events = self.steps.len(),
            "replay finished"
        );
    }

    pub fn apply(&mut self, slider: Param, event: GestureEvent) {
        match event {
            GestureEvent::Down { x, touches } => self.editor.touch(
                slider,
                TouchEvent::Down {
                    location_x: x,
                    page_x: self.track_origin + x,
                    active_touches: touches,
                },
            ),
            GestureEvent::Move { x } => self.editor.touch(
                slider,
                TouchEvent::Move {
                    page_x: self.track_origin + x,
                },
            ),
            GestureEvent::Up => self.editor.touch(slider, TouchEvent::Release),
            GestureEvent::Cancel => self.editor.cancel(slider),
            GestureEvent::Layout {
                track_width,
                thumb_width,
            } => self
                .editor
                .layout_slider(slider, track_width, thumb_width),
        }

        let controller = self.editor.slider(slider);
        self.steps.push(Step {
            slider,
            event,
            value: self.editor.params().get(slider),
            pressed: controller.is_some_and(|controller| controller.is_pressed()),
        });
    }
}
