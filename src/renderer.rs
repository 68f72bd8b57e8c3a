use std::collections::HashMap;

use egui::{Painter, Pos2, Rect, Shape, Stroke, Vec2};

use crate::config::GridConfig;
use crate::geometry::{hex_unit_vertices, Layout};
use crate::grid::{GridKind, HexOrientation, TileMatrix};
use crate::viewport::Viewport;

/// Cache key for memoized hexagon vertices. Radius is keyed by its bit
/// pattern; every tile of a homogeneous grid shares one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct HexKey {
    radius_bits: u32,
    flat: bool,
}

/// Draws the tile grid into an egui painter. Holds only a vertex cache;
/// all drawn state is borrowed per frame, so rendering never mutates the
/// grid. The cache is pure memoization and can be cleared at any time.
pub struct GridRenderer {
    hex_vertices: HashMap<HexKey, [Vec2; 6]>,
}

impl Default for GridRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GridRenderer {
    pub fn new() -> Self {
        Self {
            hex_vertices: HashMap::new(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.hex_vertices.clear();
    }

    /// Draws the full grid into `painter`, with `origin` as the screen
    /// position of the layout-space origin. The composed transform is
    /// auto-downscale, then zoom, then pan.
    pub fn render(
        &mut self,
        painter: &Painter,
        origin: Pos2,
        config: &GridConfig,
        tiles: &TileMatrix,
        viewport: &Viewport,
    ) {
        let layout = config.layout();
        let dims = layout.dimensions();
        let k = dims.scale * viewport.zoom;
        let to_screen = move |p: Pos2| -> Pos2 { origin + viewport.pan + p.to_vec2() * k };
        let clip = painter.clip_rect();

        // Border variant: one background fill under the tiles instead of a
        // stroke per tile.
        if config.border_width > 0.0 {
            let bg = Rect::from_min_max(
                to_screen(Pos2::ZERO),
                to_screen(Pos2::new(dims.raw_width, dims.raw_height)),
            );
            if bg.intersects(clip) {
                painter.rect_filled(bg, 0.0, config.border_color);
            }
        }

        match config.kind {
            GridKind::Square => self.render_squares(painter, &layout, tiles, k, &to_screen),
            GridKind::Hex { orientation, .. } => {
                self.render_hexes(painter, &layout, tiles, orientation, k, &to_screen)
            }
        }
    }

    fn render_squares(
        &mut self,
        painter: &Painter,
        layout: &Layout,
        tiles: &TileMatrix,
        k: f32,
        to_screen: &dyn Fn(Pos2) -> Pos2,
    ) {
        let clip = painter.clip_rect();
        let spacing = layout.tile_size + layout.border_width;
        let side = layout.tile_size * k;
        for (coord, color) in tiles.painted() {
            let min = to_screen(Pos2::new(
                layout.border_width + coord.col as f32 * spacing,
                layout.border_width + coord.row as f32 * spacing,
            ));
            let rect = Rect::from_min_size(min, Vec2::splat(side));
            if rect.intersects(clip) {
                painter.rect_filled(rect, 0.0, color);
            }
        }
    }

    fn render_hexes(
        &mut self,
        painter: &Painter,
        layout: &Layout,
        tiles: &TileMatrix,
        orientation: HexOrientation,
        k: f32,
        to_screen: &dyn Fn(Pos2) -> Pos2,
    ) {
        let clip = painter.clip_rect();
        // Hexagons are inset by half the border width so the background
        // shows through as the border.
        let radius = layout.tile_size / 2.0 - layout.border_width / 2.0;
        let vertices = *self.vertices_for(radius, orientation);
        let screen_radius = (layout.tile_size / 2.0) * k;
        for (coord, color) in tiles.painted() {
            let center = to_screen(layout.tile_center(coord.col, coord.row));
            let bound = Rect::from_center_size(center, Vec2::splat(screen_radius * 2.0));
            if !bound.intersects(clip) {
                continue;
            }
            let points: Vec<Pos2> = vertices.iter().map(|v| center + *v * k).collect();
            painter.add(Shape::convex_polygon(points, color, Stroke::NONE));
        }
    }

    /// Radius-scaled hexagon vertices, memoized by (radius, orientation).
    fn vertices_for(&mut self, radius: f32, orientation: HexOrientation) -> &[Vec2; 6] {
        let key = HexKey {
            radius_bits: radius.to_bits(),
            flat: orientation == HexOrientation::Flat,
        };
        self.hex_vertices
            .entry(key)
            .or_insert_with(|| hex_unit_vertices(orientation).map(|v| v * radius))
    }
}
