//! Pure grid layout math: forward tile placement, the untransformed pixel
//! footprint of a full grid, and the inverse mapping from a pointer position
//! back to a discrete tile.
//!
//! Canonical hex constants, for circumradius `r = tile_size / 2`:
//! `d = 2r` (corner-to-corner), `s = sqrt(3) * r` (edge-to-edge), and
//! `t = sqrt(r^2 - (s/2)^2) = r/2`, which makes the packed column spacing
//! `d - t = 1.5 * r`.

use egui::{Pos2, Vec2};

use crate::grid::{GridKind, HexOrientation, TileCoord};
use crate::viewport::Viewport;

/// Hard cap on the native drawing-surface extent. Grids whose raw footprint
/// exceeds this are drawn through a downscale-only factor, never upscaled.
pub const MAX_CANVAS_SIZE: f32 = 4096.0;

/// Geometry inputs for one grid: everything layout math needs, decoded once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub kind: GridKind,
    pub cols: usize,
    pub rows: usize,
    pub tile_size: f32,
    pub border_width: f32,
}

/// The untransformed pixel footprint of a full grid, plus the auto-downscale
/// factor bounding the actual surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridDimensions {
    pub raw_width: f32,
    pub raw_height: f32,
    pub scale: f32,
    pub canvas_width: f32,
    pub canvas_height: f32,
}

/// Spacing constants for one hex layout, derived from the circumradius.
#[derive(Debug, Clone, Copy)]
pub struct HexMetrics {
    pub r: f32,
    pub s: f32,
    pub col_spacing: f32,
    pub row_spacing: f32,
    pub x_offset: f32,
    pub y_offset: f32,
}

impl HexMetrics {
    pub fn new(orientation: HexOrientation, tile_size: f32, border_width: f32) -> Self {
        let r = tile_size / 2.0;
        let d = 2.0 * r;
        let s = 3.0_f32.sqrt() * r;
        let t = r / 2.0;
        match orientation {
            HexOrientation::Flat => Self {
                r,
                s,
                col_spacing: d - t,
                row_spacing: s,
                x_offset: border_width + r,
                y_offset: border_width + s / 2.0,
            },
            HexOrientation::Pointy => Self {
                r,
                s,
                col_spacing: s,
                row_spacing: d - t,
                x_offset: border_width + s / 2.0,
                y_offset: border_width + r,
            },
        }
    }
}

impl Layout {
    /// Center-to-center spacing of square tiles. Tiles are inset by the
    /// border width on every side, so the spacing includes it; at zero
    /// border this reduces to the plain tile size.
    fn square_spacing(&self) -> f32 {
        self.tile_size + self.border_width
    }

    /// Computes the untransformed pixel footprint of the full grid and the
    /// downscale factor keeping the surface under [`MAX_CANVAS_SIZE`].
    pub fn dimensions(&self) -> GridDimensions {
        let b = self.border_width;
        let (cols, rows) = (self.cols as f32, self.rows as f32);
        let (raw_width, raw_height) = match self.kind {
            GridKind::Square => {
                let sp = self.square_spacing();
                (cols * sp + b, rows * sp + b)
            }
            GridKind::Hex { orientation, .. } => {
                let r = self.tile_size / 2.0;
                let d = 2.0 * r;
                let s = 3.0_f32.sqrt() * r;
                let t = r / 2.0;
                match orientation {
                    HexOrientation::Flat => (
                        2.0 * b + (d - t) * cols - t + d / 2.0,
                        2.0 * b + s * rows + s / 2.0,
                    ),
                    HexOrientation::Pointy => (
                        2.0 * b + s * cols + s / 2.0,
                        2.0 * b + (d - t) * rows - t + d / 2.0,
                    ),
                }
            }
        };
        let scale = (MAX_CANVAS_SIZE / raw_width.max(raw_height)).min(1.0);
        GridDimensions {
            raw_width,
            raw_height,
            scale,
            canvas_width: (raw_width * scale).round(),
            canvas_height: (raw_height * scale).round(),
        }
    }

    /// Center of a tile in layout space (unscaled, before any viewport
    /// transform). Callers are expected to pass in-bounds coordinates.
    pub fn tile_center(&self, col: usize, row: usize) -> Pos2 {
        match self.kind {
            GridKind::Square => {
                let sp = self.square_spacing();
                let half = self.tile_size / 2.0;
                Pos2::new(
                    self.border_width + col as f32 * sp + half,
                    self.border_width + row as f32 * sp + half,
                )
            }
            GridKind::Hex {
                orientation,
                parity,
            } => {
                let m = HexMetrics::new(orientation, self.tile_size, self.border_width);
                let mut cx = m.x_offset + col as f32 * m.col_spacing;
                let mut cy = m.y_offset + row as f32 * m.row_spacing;
                match orientation {
                    HexOrientation::Flat => {
                        if parity.shifts(col) {
                            cy += m.s / 2.0;
                        }
                    }
                    HexOrientation::Pointy => {
                        if parity.shifts(row) {
                            cx += m.s / 2.0;
                        }
                    }
                }
                Pos2::new(cx, cy)
            }
        }
    }

    /// Inverse of the forward layout math, composed with the inverse
    /// viewport transform: undo pan and zoom, undo the auto-downscale, undo
    /// the border offset, then resolve the discrete tile. Returns `None`
    /// when no tile lies under the position; callers must treat that as
    /// "no tile under pointer" and mutate nothing.
    pub fn tile_at(&self, pos: Pos2, scale: f32, viewport: &Viewport) -> Option<TileCoord> {
        let p = ((pos.to_vec2() - viewport.pan) / viewport.zoom / scale).to_pos2();
        match self.kind {
            GridKind::Square => {
                let sp = self.square_spacing();
                let x = p.x - self.border_width;
                let y = p.y - self.border_width;
                self.check_bounds((x / sp).floor(), (y / sp).floor())
            }
            GridKind::Hex {
                orientation,
                parity,
            } => {
                let m = HexMetrics::new(orientation, self.tile_size, self.border_width);
                // Column and row positions are mutually offsetting, so one
                // axis is resolved first and the other re-derived against
                // that axis' alternating half-shift.
                match orientation {
                    HexOrientation::Flat => {
                        let col = ((p.x - m.x_offset) / m.col_spacing).round();
                        let shift = if col >= 0.0 && parity.shifts(col as usize) {
                            m.s / 2.0
                        } else {
                            0.0
                        };
                        let row = ((p.y - m.y_offset - shift) / m.row_spacing).round();
                        self.check_bounds(col, row)
                    }
                    HexOrientation::Pointy => {
                        let row = ((p.y - m.y_offset) / m.row_spacing).round();
                        let shift = if row >= 0.0 && parity.shifts(row as usize) {
                            m.s / 2.0
                        } else {
                            0.0
                        };
                        let col = ((p.x - m.x_offset - shift) / m.col_spacing).round();
                        self.check_bounds(col, row)
                    }
                }
            }
        }
    }

    fn check_bounds(&self, col: f32, row: f32) -> Option<TileCoord> {
        if col < 0.0 || row < 0.0 || col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some(TileCoord {
            col: col as usize,
            row: row as usize,
        })
    }

    /// Maps a layout-space point to screen space under the full composed
    /// transform (downscale, then zoom, then pan).
    pub fn to_screen(p: Pos2, scale: f32, viewport: &Viewport) -> Pos2 {
        (p.to_vec2() * scale * viewport.zoom + viewport.pan).to_pos2()
    }
}

/// Unit hexagon vertices for a given orientation, before radius scaling.
/// Flat-top hexes start at angle 0; pointy-top are rotated by 30 degrees.
pub fn hex_unit_vertices(orientation: HexOrientation) -> [Vec2; 6] {
    let start = match orientation {
        HexOrientation::Flat => 0.0_f32,
        HexOrientation::Pointy => std::f32::consts::FRAC_PI_6,
    };
    std::array::from_fn(|i| {
        let angle = std::f32::consts::FRAC_PI_3 * i as f32 + start;
        Vec2::new(angle.cos(), angle.sin())
    })
}
