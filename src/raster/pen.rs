use crate::error::{DrawError, Result};
use crate::math::Point2;

use super::{Color, Surface};

/// Style applied to every segment of a stroke.
#[derive(Debug, Clone, Copy)]
pub struct SegmentStyle {
    color: Color,
    line_width: u32,
}

impl SegmentStyle {
    /// Creates a new segment style.
    ///
    /// # Errors
    ///
    /// Returns an error if `line_width` is zero.
    pub fn new(color: Color, line_width: u32) -> Result<Self> {
        if line_width == 0 {
            return Err(DrawError::InvalidStyle("line width must be at least 1".to_owned()).into());
        }
        Ok(Self { color, line_width })
    }

    /// Returns the stroke color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the stroke color, keeping the width.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns the stroke width in pixels.
    #[must_use]
    pub fn line_width(&self) -> u32 {
        self.line_width
    }
}

/// Streams curve vertices onto a surface as straight segments, tracking
/// how many segments were drawn and their total length since the last
/// reset.
#[derive(Debug, Default)]
pub struct CurvePen {
    segment_counter: u32,
    tracked_length: f64,
}

impl CurvePen {
    /// Creates a pen with zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of segments drawn since the last reset.
    #[must_use]
    pub fn segment_count(&self) -> u32 {
        self.segment_counter
    }

    /// Returns the total Euclidean length drawn since the last reset.
    #[must_use]
    pub fn tracked_length(&self) -> f64 {
        self.tracked_length
    }

    /// Draws one straight segment.
    ///
    /// Width 1 takes the anti-aliased raster path; wider strokes take the
    /// plain one.
    pub fn draw_segment(
        &mut self,
        p0: Point2,
        p1: Point2,
        style: &SegmentStyle,
        surface: &mut Surface,
    ) {
        self.segment_counter += 1;
        self.tracked_length += (p1 - p0).norm();
        if style.line_width() == 1 {
            surface.draw_line_aa(p0, p1, style.color());
        } else {
            surface.draw_line(p0, p1, style.color(), style.line_width());
        }
    }

    /// Draws a polyline in one call.
    ///
    /// Stops one pair short, leaving the final segment undrawn. The
    /// driver streams curves segment-by-segment and does not go
    /// through this path.
    pub fn draw_curve(&mut self, points: &[Point2], style: &SegmentStyle, surface: &mut Surface) {
        for pair in points.windows(2).take(points.len().saturating_sub(2)) {
            self.draw_segment(pair[0], pair[1], style, surface);
        }
    }

    /// Zeroes both counters.
    pub fn reset(&mut self) {
        self.segment_counter = 0;
        self.tracked_length = 0.0;
    }
}
