use crate::math::Point2;

use super::Color;

/// An owned RGBA8 pixel surface.
///
/// Alpha tracks whether a pixel has been painted: [`Surface::fill`]
/// produces opaque pixels, [`Surface::clear`] fully transparent ones, and
/// [`Surface::blit`] copies only painted pixels. A frame overlay can
/// therefore be composited onto accumulated ink without erasing it.
#[derive(Debug, Clone)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Creates a fully transparent surface.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Returns the width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA bytes, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    /// Paints every pixel opaque `color`.
    pub fn fill(&mut self, color: Color) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Resets every pixel to fully transparent.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Writes an opaque pixel, ignoring out-of-bounds coordinates.
    fn set_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = self.index(x as u32, y as u32);
        self.data[idx..idx + 4].copy_from_slice(&[color.r, color.g, color.b, 0xff]);
    }

    /// Blends `color` over the pixel at the given coverage, ignoring
    /// out-of-bounds coordinates. The result is always opaque.
    fn blend_pixel(&mut self, x: i64, y: i64, color: Color, coverage: f64) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let idx = self.index(x as u32, y as u32);
        let blend = |src: u8, dst: u8| -> u8 {
            let out = f64::from(src) * coverage + f64::from(dst) * (1.0 - coverage);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                out.round().clamp(0.0, 255.0) as u8
            }
        };
        self.data[idx] = blend(color.r, self.data[idx]);
        self.data[idx + 1] = blend(color.g, self.data[idx + 1]);
        self.data[idx + 2] = blend(color.b, self.data[idx + 2]);
        self.data[idx + 3] = 0xff;
    }

    /// Copies every painted (non-transparent) pixel of `src` onto `self`
    /// at `offset`. Pixels falling outside the target are dropped.
    pub fn blit(&mut self, src: &Surface, offset: (i32, i32)) {
        for sy in 0..src.height {
            for sx in 0..src.width {
                let si = src.index(sx, sy);
                if src.data[si + 3] == 0 {
                    continue;
                }
                let dx = i64::from(sx) + i64::from(offset.0);
                let dy = i64::from(sy) + i64::from(offset.1);
                self.set_pixel(
                    dx,
                    dy,
                    Color::new(src.data[si], src.data[si + 1], src.data[si + 2]),
                );
            }
        }
    }

    /// Draws a 1-pixel anti-aliased segment.
    pub fn draw_line_aa(&mut self, p0: Point2, p1: Point2, color: Color) {
        self.stroke_segment(p0, p1, 1.0, color, true);
    }

    /// Draws a plain segment of the given width.
    pub fn draw_line(&mut self, p0: Point2, p1: Point2, color: Color, width: u32) {
        self.stroke_segment(p0, p1, f64::from(width), color, false);
    }

    /// Distance-field segment stroke over the segment's bounding box.
    #[allow(clippy::cast_possible_truncation)]
    fn stroke_segment(&mut self, p0: Point2, p1: Point2, thickness: f64, color: Color, aa: bool) {
        let margin = thickness.ceil() as i64 + 1;
        let min_x = p0.x.min(p1.x).floor() as i64 - margin;
        let max_x = p0.x.max(p1.x).ceil() as i64 + margin;
        let min_y = p0.y.min(p1.y).floor() as i64 - margin;
        let max_y = p0.y.max(p1.y).ceil() as i64 + margin;
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let len_sq = dx * dx + dy * dy;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                #[allow(clippy::cast_precision_loss)]
                let (px, py) = (x as f64 - p0.x, y as f64 - p0.y);
                // Distance to the closest point on the segment; a
                // zero-length segment collapses to the distance to p0.
                let t = if len_sq > f64::EPSILON {
                    ((px * dx + py * dy) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let ex = px - t * dx;
                let ey = py - t * dy;
                let dist = (ex * ex + ey * ey).sqrt();
                if aa {
                    let coverage = (1.0 - (dist - thickness / 2.0).clamp(0.0, 1.0)).clamp(0.0, 1.0);
                    if coverage > 0.01 {
                        self.blend_pixel(x, y, color, coverage);
                    }
                } else if dist <= thickness / 2.0 + 0.5 {
                    self.set_pixel(x, y, color);
                }
            }
        }
    }

    /// Draws a circle outline; the stroke band grows inward from
    /// `radius`, anti-aliased at both edges.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_ring(&mut self, center: Point2, radius: f64, width: u32, color: Color) {
        let inner = radius - f64::from(width);
        let reach = radius.ceil() as i64 + 1;
        let cx = center.x.round() as i64;
        let cy = center.y.round() as i64;

        for y in (cy - reach)..=(cy + reach) {
            for x in (cx - reach)..=(cx + reach) {
                #[allow(clippy::cast_precision_loss)]
                let (ex, ey) = (x as f64 - center.x, y as f64 - center.y);
                let dist = (ex * ex + ey * ey).sqrt();
                if dist > radius + 1.0 || dist < inner - 1.0 {
                    continue;
                }
                let coverage = if dist > radius {
                    1.0 - (dist - radius).min(1.0)
                } else if dist < inner {
                    1.0 - (inner - dist).min(1.0)
                } else {
                    1.0
                };
                if coverage > 0.01 {
                    self.blend_pixel(x, y, color, coverage);
                }
            }
        }
    }

    /// Paints every pixel strictly farther than `radius` from `center`
    /// opaque `color`, masking everything outside the disc.
    pub fn fill_outside(&mut self, center: Point2, radius: f64, color: Color) {
        let r_sq = radius * radius;
        for y in 0..self.height {
            for x in 0..self.width {
                let ex = f64::from(x) - center.x;
                let ey = f64::from(y) - center.y;
                if ex * ex + ey * ey > r_sq {
                    self.set_pixel(i64::from(x), i64::from(y), color);
                }
            }
        }
    }
}
