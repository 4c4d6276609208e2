use super::Point2;

/// Places a point at distance `radius` from `origin` along heading
/// `angle_deg`.
///
/// Computes `origin + (r·cos(−a), r·sin(−a))` with the angle in degrees.
/// The negation maps math-convention angles onto the inverted screen
/// y-axis; identical seeds reproduce identical curves only while this
/// orientation is kept bit-for-bit.
///
/// Headings accumulate without normalization, so `angle_deg` may be
/// arbitrarily large or negative.
#[must_use]
pub fn point_at(origin: Point2, radius: f64, angle_deg: f64) -> Point2 {
    let angle = (-angle_deg).to_radians();
    Point2::new(
        origin.x + radius * angle.cos(),
        origin.y + radius * angle.sin(),
    )
}
