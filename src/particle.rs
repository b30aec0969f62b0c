// Simple particle struct to keep track of individual position, velocity,
// size and opacity

use crate::config::{lerp_range, FieldConfig};
use rand::Rng;
use vecmath::{vec2_add, Vector2};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    pub radius: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            opacity,
        }
    }

    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = lerp_range(config.radius_range, rng.gen::<f64>());
        let vel_x = lerp_range(config.speed_range, rng.gen::<f64>());
        let vel_y = lerp_range(config.speed_range, rng.gen::<f64>());
        let opacity = lerp_range(config.opacity_range, rng.gen::<f64>());
        Particle::new([pos_x, pos_y], [vel_x, vel_y], radius, opacity)
    }

    /// One frame of motion: step by the velocity, then flip each velocity
    /// component whose coordinate left `[0, bound]`. The position is left
    /// where it landed, so the particle comes back on the next frame.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vec2_add(self.pos, self.vel);
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }
    }
}
