// droplet.rs - A single fountain droplet
//
// Plain record; the pool in `Fountain` decides what happens to it.

use crate::color::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Droplet {
    // Position
    pub position_x: f32,
    pub position_y: f32,

    // Velocity (per frame)
    pub velocity_x: f32,
    pub velocity_y: f32,

    // Appearance
    pub size: f32,         // circle diameter
    pub transparency: u8,  // fill alpha
    pub color: Color,

    /// Frames lived, including the random head start given at spawn
    pub age: u32,
}

impl Droplet {
    /// Droplet at rest at (x, y); velocity, color and transparency stay zeroed.
    pub fn new(x: f32, y: f32, size: f32, age: u32) -> Self {
        Self {
            position_x: x,
            position_y: y,
            size,
            age,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sets_position_size_and_age_only() {
        let d = Droplet::new(3.0, 4.0, 10.0, 10);
        assert_eq!((d.position_x, d.position_y), (3.0, 4.0));
        assert_eq!(d.size, 10.0);
        assert_eq!(d.age, 10);
        assert_eq!((d.velocity_x, d.velocity_y), (0.0, 0.0));
        assert_eq!(d.transparency, 0);
        assert_eq!(d.color, Color::default());
    }
}
