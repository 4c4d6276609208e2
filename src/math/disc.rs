use crate::error::{GeometryError, Result};

use super::{point_at, Point2, TOLERANCE};

/// The fixed containment circle that curves are confined to.
///
/// Center and radius never change after construction; the whole run of a
/// driver measures containment against the same disc.
#[derive(Debug, Clone, Copy)]
pub struct Disc {
    center: Point2,
    radius: f64,
}

impl Disc {
    /// Creates a new disc.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("disc radius must be positive".into()).into());
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the disc.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// Returns the radius of the disc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns whether `p` lies strictly inside the disc.
    ///
    /// Boundary points count as outside.
    #[must_use]
    pub fn contains(&self, p: Point2) -> bool {
        let dx = self.center.x - p.x;
        let dy = self.center.y - p.y;
        dx * dx + dy * dy < self.radius * self.radius
    }

    /// Returns the rim point at heading `angle_deg`.
    #[must_use]
    pub fn point_on_rim(&self, angle_deg: f64) -> Point2 {
        point_at(self.center, self.radius, angle_deg)
    }
}
