use egui::{Pos2, Vec2};

pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 5.0;

/// Multiplicative steps used by wheel ticks and the zoom buttons. The two
/// directions are deliberately not exact reciprocals: one tick in is x1.1,
/// one tick out is x0.9.
pub const ZOOM_STEP: f32 = 1.1;
pub const ZOOM_OUT_STEP: f32 = 0.9;

/// Pan offset and zoom level applied on top of the native grid layout
/// before drawing. Owned by the interaction layer; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Vec2,
    pub zoom: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Returns to identity: zero offset, zoom 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn pan_by(&mut self, delta: Vec2) {
        self.pan += delta;
    }

    /// Multiplies the zoom level by `factor`, clamped to the allowed range,
    /// keeping the point under `cursor` fixed on screen.
    pub fn zoom_at(&mut self, cursor: Pos2, factor: f32) {
        let new_zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let ratio = new_zoom / self.zoom;
        self.pan = cursor.to_vec2() - (cursor.to_vec2() - self.pan) * ratio;
        self.zoom = new_zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_steps_match_their_constants() {
        let mut vp = Viewport::default();
        vp.zoom_at(Pos2::ZERO, ZOOM_STEP);
        assert!((vp.zoom - 1.1).abs() < 1e-6);

        vp.reset();
        vp.zoom_at(Pos2::ZERO, ZOOM_OUT_STEP);
        assert!((vp.zoom - 0.9).abs() < 1e-6);
    }

    #[test]
    fn zoom_is_pinned_at_bounds() {
        let mut vp = Viewport::default();
        for _ in 0..100 {
            vp.zoom_at(Pos2::ZERO, ZOOM_OUT_STEP);
        }
        assert_eq!(vp.zoom, MIN_ZOOM);
        for _ in 0..200 {
            vp.zoom_at(Pos2::ZERO, ZOOM_STEP);
        }
        assert_eq!(vp.zoom, MAX_ZOOM);
    }

    #[test]
    fn reset_restores_identity() {
        let mut vp = Viewport {
            pan: Vec2::new(123.0, -45.0),
            zoom: 3.7,
        };
        vp.reset();
        assert_eq!(vp.pan, Vec2::ZERO);
        assert_eq!(vp.zoom, 1.0);
    }

    #[test]
    fn zoom_keeps_cursor_point_fixed() {
        let mut vp = Viewport {
            pan: Vec2::new(20.0, -10.0),
            zoom: 1.5,
        };
        let cursor = Pos2::new(200.0, 120.0);
        // Layout-space point currently under the cursor.
        let layout_point = (cursor.to_vec2() - vp.pan) / vp.zoom;

        vp.zoom_at(cursor, ZOOM_STEP);

        let screen_after = layout_point * vp.zoom + vp.pan;
        assert!((screen_after - cursor.to_vec2()).length() < 1e-3);
    }
}
