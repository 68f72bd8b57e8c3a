//! Minimal CPU rasterizer backing full-resolution export. Draws axis-aligned
//! rectangles and convex polygons into an RGBA buffer; no anti-aliasing, no
//! blending. This is enough for the grid's solid tile fills.

use egui::Color32;
use image::{Rgba, RgbaImage};

pub struct Raster {
    img: RgbaImage,
}

fn to_rgba(color: Color32) -> Rgba<u8> {
    Rgba([color.r(), color.g(), color.b(), color.a()])
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Color32) -> Self {
        let mut img = RgbaImage::new(width, height);
        let px = to_rgba(background);
        for p in img.pixels_mut() {
            *p = px;
        }
        Self { img }
    }

    pub fn into_image(self) -> RgbaImage {
        self.img
    }

    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color32) {
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        let px = to_rgba(color);
        let x0 = x.max(0.0) as u32;
        let y0 = y.max(0.0) as u32;
        let x1 = ((x + w).ceil().max(0.0) as u32).min(self.img.width());
        let y1 = ((y + h).ceil().max(0.0) as u32).min(self.img.height());
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.img.put_pixel(xx, yy, px);
            }
        }
    }

    /// Scanline fill of a convex polygon: each pixel row is filled between
    /// the leftmost and rightmost edge crossings at that row's center.
    pub fn fill_convex_polygon(&mut self, points: &[(f32, f32)], color: Color32) {
        if points.len() < 3 {
            return;
        }
        let px = to_rgba(color);
        let y_min = points.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let y_max = points.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let row_start = y_min.floor().max(0.0) as u32;
        let row_end = (y_max.ceil().max(0.0) as u32).min(self.img.height());

        for row in row_start..row_end {
            let scan_y = row as f32 + 0.5;
            let mut left = f32::INFINITY;
            let mut right = f32::NEG_INFINITY;
            for i in 0..points.len() {
                let (x0, y0) = points[i];
                let (x1, y1) = points[(i + 1) % points.len()];
                if (y0 <= scan_y) == (y1 <= scan_y) {
                    continue; // edge does not cross this scanline
                }
                let x = x0 + (scan_y - y0) / (y1 - y0) * (x1 - x0);
                left = left.min(x);
                right = right.max(x);
            }
            if left > right {
                continue;
            }
            let x_start = left.round().max(0.0) as u32;
            let x_end = (right.round().max(0.0) as u32).min(self.img.width());
            for col in x_start..x_end {
                self.img.put_pixel(col, row, px);
            }
        }
    }
}
