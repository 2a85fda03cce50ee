//! Rasterizer for paint commands onto an RGBA canvas

use std::path::Path;

use image::{ImageFormat, ImageResult, Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point;
use imageproc::rect::Rect;
use sha2::{Digest, Sha256};

use crate::rendering::paint::{Bounds, Color, PaintCommand, TRANSPARENT};

/// Mutable RGBA pixel buffer that paint commands are drawn onto.
///
/// Drawing replaces pixels rather than blending them, so a translucent fill
/// lands on the canvas with its exact alpha.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(TRANSPARENT.to_array())),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image.get_pixel_checked(x, y).map(|p| Color::from(p.0))
    }

    /// All pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Color> + '_ {
        self.image.pixels().map(|p| Color::from(p.0))
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn paint(&mut self, cmd: &PaintCommand) {
        match *cmd {
            PaintCommand::Ellipse { bounds, fill } => self.fill_ellipse(bounds, fill),
            PaintCommand::Line {
                from,
                to,
                width,
                color,
            } => self.draw_line(from, to, width, color),
        }
    }

    /// Fill the ellipse inscribed in `bounds`. Odd-sized boxes are centered
    /// exactly; even-sized ones lose their last row or column.
    pub fn fill_ellipse(&mut self, bounds: Bounds, color: Color) {
        if bounds.is_empty() {
            return;
        }
        let center = (
            (bounds.x0 + bounds.x1).div_euclid(2),
            (bounds.y0 + bounds.y1).div_euclid(2),
        );
        let rx = (bounds.x1 - bounds.x0) / 2;
        let ry = (bounds.y1 - bounds.y0) / 2;
        draw_filled_ellipse_mut(&mut self.image, center, rx, ry, Rgba(color.to_array()));
    }

    /// Stroke a line between two inclusive endpoints.
    ///
    /// Axis-aligned strokes are filled rects exactly `width` pixels across,
    /// spanning `width / 2` pixels before the center line.
    pub fn draw_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Color) {
        let width = width.max(1);
        let px = Rgba(color.to_array());
        let half = (width / 2) as i32;
        let (left, right) = (from.0.min(to.0), from.0.max(to.0));
        let (top, bottom) = (from.1.min(to.1), from.1.max(to.1));

        if from.0 == to.0 {
            let rect = Rect::at(from.0 - half, top).of_size(width, (bottom - top + 1) as u32);
            draw_filled_rect_mut(&mut self.image, rect, px);
        } else if from.1 == to.1 {
            let rect = Rect::at(left, from.1 - half).of_size((right - left + 1) as u32, width);
            draw_filled_rect_mut(&mut self.image, rect, px);
        } else if width == 1 {
            draw_line_segment_mut(
                &mut self.image,
                (from.0 as f32, from.1 as f32),
                (to.0 as f32, to.1 as f32),
                px,
            );
        } else {
            let (dx, dy) = ((to.0 - from.0) as f32, (to.1 - from.1) as f32);
            let len = dx.hypot(dy);
            let (ox, oy) = (-dy / len * width as f32 / 2.0, dx / len * width as f32 / 2.0);
            let corner = |x: i32, y: i32, s: f32| {
                Point::new(
                    (x as f32 + s * ox).round() as i32,
                    (y as f32 + s * oy).round() as i32,
                )
            };
            let quad = [
                corner(from.0, from.1, 1.0),
                corner(to.0, to.1, 1.0),
                corner(to.0, to.1, -1.0),
                corner(from.0, from.1, -1.0),
            ];
            draw_polygon_mut(&mut self.image, &quad, px);
        }
    }

    /// SHA-256 over the dimensions and raw pixel bytes, hex-encoded
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_le_bytes());
        hasher.update(self.height().to_le_bytes());
        hasher.update(self.image.as_raw());
        hex::encode(hasher.finalize())
    }

    /// Encode as PNG, replacing any existing file at `path`
    pub fn save_png(&self, path: &Path) -> ImageResult<()> {
        self.image.save_with_format(path, ImageFormat::Png)
    }
}

/// Paint a display list onto a fresh transparent `width × height` canvas
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> Canvas {
    let mut canvas = Canvas::new(width, height);
    for cmd in commands {
        canvas.paint(cmd);
    }
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::paint::{CRIMSON, PURPLE, WHITE};

    fn count(canvas: &Canvas, color: Color) -> usize {
        canvas.pixels().filter(|p| *p == color).count()
    }

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(8, 4);
        assert_eq!(c.width(), 8);
        assert_eq!(c.height(), 4);
        assert!(c.pixels().all(|p| p == TRANSPARENT));
    }

    #[test]
    fn ellipse_covers_center_and_stays_in_bounds() {
        let mut c = Canvas::new(9, 9);
        c.fill_ellipse(Bounds::new(2, 1, 6, 7), WHITE);
        assert_eq!(c.pixel(4, 4), Some(WHITE));
        for y in 0..9 {
            for x in 0..9 {
                if c.pixel(x, y) == Some(WHITE) {
                    assert!((2..=6).contains(&x) && (1..=7).contains(&y), "stray ({x},{y})");
                }
            }
        }
    }

    #[test]
    fn ellipse_skips_corners() {
        let mut c = Canvas::new(5, 5);
        c.fill_ellipse(Bounds::new(0, 0, 4, 4), CRIMSON);
        assert_eq!(c.pixel(2, 2), Some(CRIMSON));
        assert_eq!(c.pixel(0, 2), Some(CRIMSON));
        assert_eq!(c.pixel(0, 0), Some(TRANSPARENT));
        assert_eq!(c.pixel(4, 4), Some(TRANSPARENT));
    }

    #[test]
    fn ellipse_is_clipped_to_canvas() {
        let mut c = Canvas::new(4, 4);
        c.fill_ellipse(Bounds::new(-10, -10, 20, 20), CRIMSON);
        assert_eq!(count(&c, CRIMSON), 16);
        c.fill_ellipse(Bounds::around(100, 100, 3), WHITE);
        assert_eq!(count(&c, WHITE), 0);
    }

    #[test]
    fn inverted_ellipse_draws_nothing() {
        let mut c = Canvas::new(4, 4);
        c.fill_ellipse(Bounds::new(3, 0, 1, 3), WHITE);
        assert_eq!(count(&c, WHITE), 0);
    }

    #[test]
    fn vertical_line_covers_width_columns() {
        let mut c = Canvas::new(20, 20);
        c.draw_line((10, 2), (10, 12), 4, PURPLE);
        let row: Vec<u32> = (0..20).filter(|&x| c.pixel(x, 5) == Some(PURPLE)).collect();
        assert_eq!(row, vec![8, 9, 10, 11]);
        let col: Vec<u32> = (0..20).filter(|&y| c.pixel(10, y) == Some(PURPLE)).collect();
        assert_eq!(col, (2..=12).collect::<Vec<_>>());
    }

    #[test]
    fn thin_line_is_one_pixel_wide() {
        let mut c = Canvas::new(10, 10);
        c.draw_line((3, 0), (3, 9), 1, PURPLE);
        assert_eq!(count(&c, PURPLE), 10);
        assert!((0..10).all(|y| c.pixel(3, y) == Some(PURPLE)));
    }

    #[test]
    fn zero_width_line_draws_at_least_one_pixel() {
        let mut c = Canvas::new(6, 6);
        c.draw_line((2, 1), (2, 4), 0, PURPLE);
        assert_eq!(count(&c, PURPLE), 4);
    }

    #[test]
    fn line_past_the_edge_is_clipped() {
        let mut c = Canvas::new(8, 8);
        c.draw_line((1, 4), (1, 40), 2, PURPLE);
        assert_eq!(count(&c, PURPLE), 8);
    }

    #[test]
    fn diagonal_lines_reach_both_ends() {
        let mut c = Canvas::new(10, 10);
        c.draw_line((1, 1), (8, 8), 1, PURPLE);
        assert_eq!(c.pixel(1, 1), Some(PURPLE));
        assert_eq!(c.pixel(8, 8), Some(PURPLE));
        let mut thick = Canvas::new(10, 10);
        thick.draw_line((1, 1), (8, 8), 3, PURPLE);
        assert_eq!(thick.pixel(5, 5), Some(PURPLE));
        assert!(count(&thick, PURPLE) > count(&c, PURPLE));
    }

    #[test]
    fn translucent_fill_replaces_pixels() {
        let ink = PURPLE.with_alpha(128);
        let mut c = Canvas::new(5, 5);
        c.fill_ellipse(Bounds::new(0, 0, 4, 4), CRIMSON);
        c.fill_ellipse(Bounds::around(2, 2, 1), ink);
        assert_eq!(c.pixel(2, 2), Some(ink));
    }

    #[test]
    fn rasterize_applies_commands_in_order() {
        let cmds = vec![
            PaintCommand::ellipse(Bounds::new(0, 0, 7, 7), CRIMSON),
            PaintCommand::line((4, 0), (4, 7), 1, PURPLE),
        ];
        let c = rasterize(8, 8, &cmds);
        assert_eq!(c.pixel(4, 4), Some(PURPLE));
        assert_eq!(c.pixel(2, 4), Some(CRIMSON));
    }

    #[test]
    fn fingerprint_tracks_content() {
        let a = Canvas::new(4, 4);
        let mut b = Canvas::new(4, 4);
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 64);
        b.fill_ellipse(Bounds::around(1, 1, 1), WHITE);
        assert_ne!(a.fingerprint(), b.fingerprint());
        assert_ne!(Canvas::new(2, 8).fingerprint(), Canvas::new(8, 2).fingerprint());
    }
}
