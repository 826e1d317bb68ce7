use serde::{Deserialize, Serialize};

/// Logical canvas edge length in user units.
pub const CANVAS_SIZE: f64 = 1080.0;

/// Fraction of the canvas edge used as the unscaled disk radius.
pub const DISK_FRACTION: f64 = 0.43;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Circular drawing region every decorative layer lives in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub center: Point,
    pub radius: f64,
}

impl Disk {
    /// Disk centered on a square canvas, shrunk by the length-derived scale.
    pub fn for_canvas(size: f64, radius_scale: f64) -> Self {
        Self {
            center: Point::new(size / 2.0, size / 2.0),
            radius: size * DISK_FRACTION * radius_scale,
        }
    }

    pub fn polar(&self, radius: f64, angle: f64) -> Point {
        polar_to_xy(self.center, radius, angle)
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, point: Point) -> bool {
        self.center.distance(point) <= self.radius
    }
}

pub fn polar_to_xy(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// `max(lo, min(hi, value))`.
///
/// Unlike [`Ord::clamp`] this never panics; with inverted bounds the lower
/// bound wins.
pub fn clamp<T: PartialOrd>(value: T, lo: T, hi: T) -> T {
    let upper = if value < hi { value } else { hi };
    if lo > upper {
        lo
    } else {
        upper
    }
}

/// Normalized positions `i / (steps - 1)` for `steps` evenly spaced samples.
pub fn sample_positions(steps: usize) -> impl Iterator<Item = f64> {
    let last = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(move |i| i as f64 / last)
}

pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + t * (end - start)
}
