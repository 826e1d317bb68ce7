//! Background star field.

use crate::geometry::Disk;
use crate::rng::Stream;
use crate::scene::Primitive;

pub const MIN_SIZE: f64 = 0.6;
/// Size range multiplier, scaled by the variance factor.
pub const SIZE_SPREAD: f64 = 1.7;

/// Scatter `count` glowing points uniformly over `disk`.
///
/// Each star consumes three draws: angle, radius, size.
pub fn scatter(disk: &Disk, count: usize, variance: f64, rng: &mut Stream) -> Vec<Primitive> {
    (0..count)
        .map(|_| {
            let angle = rng.next_angle();
            let radius = rng.next_disk_radius(disk.radius);
            let center = disk.polar(radius, angle);
            let size = MIN_SIZE + variance * rng.next_f64() * SIZE_SPREAD;
            Primitive::Point {
                center,
                radius: size,
                glow: true,
            }
        })
        .collect()
}
