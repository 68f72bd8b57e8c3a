//! Gesture state machine: translates canvas events into paint, erase, pan,
//! and zoom operations. At most one gesture is active at a time; each event
//! does O(1) work plus at most one tile resolution.

use egui::{PointerButton, Pos2};

use crate::biome::BIOMES;
use crate::input::CanvasEvent;
use crate::store::GridStore;
use crate::tools::Tool;
use crate::viewport::{Viewport, ZOOM_OUT_STEP, ZOOM_STEP};

/// The gesture currently in flight, tagged with the button that started it
/// so only that button's release ends it.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Gesture {
    Paint,
    Erase(PointerButton),
    Pan(PointerButton),
}

pub struct CanvasController {
    pub tool: Tool,
    /// Index into [`BIOMES`]; painting requires a selected biome.
    pub selected_biome: Option<usize>,
    gesture: Option<Gesture>,
    last_pointer: Option<Pos2>,
}

impl Default for CanvasController {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasController {
    pub fn new() -> Self {
        Self {
            tool: Tool::default(),
            selected_biome: Some(0),
            gesture: None,
            last_pointer: None,
        }
    }

    pub fn cursor(&self) -> egui::CursorIcon {
        match self.gesture {
            Some(Gesture::Pan(_)) => egui::CursorIcon::Grabbing,
            _ => self.tool.cursor(),
        }
    }

    pub fn handle_events(
        &mut self,
        events: &[CanvasEvent],
        store: &mut GridStore,
        viewport: &mut Viewport,
    ) {
        for event in events {
            self.handle_event(*event, store, viewport);
        }
    }

    fn handle_event(&mut self, event: CanvasEvent, store: &mut GridStore, viewport: &mut Viewport) {
        match event {
            CanvasEvent::PointerDown { pos, button } => {
                self.last_pointer = Some(pos);
                if self.gesture.is_some() {
                    return;
                }
                match button {
                    PointerButton::Primary => match self.tool {
                        Tool::Paint if self.selected_biome.is_some() => {
                            self.gesture = Some(Gesture::Paint);
                            self.apply_brush(pos, store, viewport);
                        }
                        Tool::Erase => {
                            self.gesture = Some(Gesture::Erase(button));
                            self.apply_brush(pos, store, viewport);
                        }
                        Tool::Pan => {
                            self.gesture = Some(Gesture::Pan(button));
                        }
                        _ => {}
                    },
                    // Right button erases regardless of tool; the default
                    // context menu is not wired up for the canvas.
                    PointerButton::Secondary => {
                        self.gesture = Some(Gesture::Erase(button));
                        self.apply_brush(pos, store, viewport);
                    }
                    PointerButton::Middle => {
                        self.gesture = Some(Gesture::Pan(button));
                    }
                    _ => {}
                }
            }
            CanvasEvent::PointerMove { pos } => {
                match self.gesture {
                    Some(Gesture::Paint) | Some(Gesture::Erase(_)) => {
                        self.apply_brush(pos, store, viewport);
                    }
                    Some(Gesture::Pan(_)) => {
                        if let Some(last) = self.last_pointer {
                            viewport.pan_by(pos - last);
                        }
                    }
                    None => {}
                }
                self.last_pointer = Some(pos);
            }
            CanvasEvent::PointerUp { button } => {
                let ended = match self.gesture {
                    Some(Gesture::Paint) => button == PointerButton::Primary,
                    Some(Gesture::Erase(b)) | Some(Gesture::Pan(b)) => button == b,
                    None => false,
                };
                if ended {
                    self.gesture = None;
                }
            }
            CanvasEvent::PointerLeave => {
                self.gesture = None;
                self.last_pointer = None;
            }
            CanvasEvent::Wheel { pos, delta_y } => {
                let factor = if delta_y > 0.0 {
                    ZOOM_STEP
                } else {
                    ZOOM_OUT_STEP
                };
                viewport.zoom_at(pos, factor);
            }
        }
    }

    /// Resolves the tile under the pointer and paints or erases it. A miss
    /// (no tile under pointer) is a silent no-op.
    fn apply_brush(&self, pos: Pos2, store: &mut GridStore, viewport: &Viewport) {
        let layout = store.config().layout();
        let scale = layout.dimensions().scale;
        let Some(coord) = layout.tile_at(pos, scale, viewport) else {
            return;
        };
        let color = match self.gesture {
            Some(Gesture::Paint) => self.selected_biome.map(|i| BIOMES[i].color),
            Some(Gesture::Erase(_)) => None,
            _ => return,
        };
        store.set_tile(coord.col, coord.row, color);
    }
}
