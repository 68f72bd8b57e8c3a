//! Distills raw egui pointer/wheel input over the canvas into a small event
//! stream the gesture controller consumes. Positions are canvas-local
//! (relative to the canvas rect's top-left corner).

use egui::{Context, PointerButton, Pos2, Rect, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    PointerDown { pos: Pos2, button: PointerButton },
    PointerMove { pos: Pos2 },
    PointerUp { button: PointerButton },
    PointerLeave,
    Wheel { pos: Pos2, delta_y: f32 },
}

const BUTTONS: [PointerButton; 3] = [
    PointerButton::Primary,
    PointerButton::Secondary,
    PointerButton::Middle,
];

/// Converts egui input into [`CanvasEvent`]s, tracking the last pointer
/// position so leaving the canvas is observable as an event.
#[derive(Debug, Default)]
pub struct CanvasInput {
    last_pos: Option<Pos2>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gathers this frame's events for a canvas occupying `rect`.
    pub fn collect(&mut self, ctx: &Context, rect: Rect) -> Vec<CanvasEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let hover = input.pointer.hover_pos().filter(|pos| rect.contains(*pos));

            match (hover, self.last_pos) {
                (Some(pos), last) => {
                    let local = (pos - rect.min).to_pos2();
                    if last != Some(local) {
                        events.push(CanvasEvent::PointerMove { pos: local });
                    }
                    self.last_pos = Some(local);
                }
                (None, Some(_)) => {
                    events.push(CanvasEvent::PointerLeave);
                    self.last_pos = None;
                }
                (None, None) => {}
            }

            if let Some(pos) = hover {
                let local = (pos - rect.min).to_pos2();
                for button in BUTTONS {
                    if input.pointer.button_pressed(button) {
                        events.push(CanvasEvent::PointerDown { pos: local, button });
                    }
                }
                let scroll: Vec2 = input.raw_scroll_delta;
                if scroll.y != 0.0 {
                    events.push(CanvasEvent::Wheel {
                        pos: local,
                        delta_y: scroll.y,
                    });
                }
            }

            // Releases are reported even when the pointer has drifted off
            // the canvas, so gestures cannot get stuck held.
            for button in BUTTONS {
                if input.pointer.button_released(button) {
                    events.push(CanvasEvent::PointerUp { button });
                }
            }
        });

        events
    }
}
