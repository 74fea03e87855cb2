//! Cloth particles with implicit Verlet velocity.

use crate::vec::{TexCoord, Vec3};

/// A single cloth vertex.
///
/// Velocity is never stored: it is `pos - prev_pos`.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec3,
    pub prev_pos: Vec3,
    pub acceleration: Vec3,
    pinned: bool,
    tex_coord: TexCoord,
}

impl Particle {
    /// A particle at rest at `pos`.
    pub fn new(pos: Vec3, tex_coord: TexCoord) -> Self {
        Particle {
            pos,
            prev_pos: pos,
            acceleration: Vec3::ZERO,
            pinned: false,
            tex_coord,
        }
    }

    /// Texture coordinate fixed at grid creation.
    pub fn tex_coord(&self) -> TexCoord {
        self.tex_coord
    }

    /// Replace the accumulated acceleration. No effect on pinned particles.
    pub fn set_acceleration(&mut self, accel: Vec3) {
        if !self.pinned {
            self.acceleration = accel;
        }
    }

    /// Verlet step: `pos + (pos - prev_pos) * damping + a * dt^2`.
    pub fn integrate(&mut self, dt: f32, damping: f32) {
        if self.pinned {
            return;
        }
        let velocity = self.velocity_raw() * damping;
        let new_pos = self.pos + velocity + self.acceleration * (dt * dt);
        self.prev_pos = self.pos;
        self.pos = new_pos;
    }

    /// Displacement over the last step.
    pub fn velocity_raw(&self) -> Vec3 {
        self.pos - self.prev_pos
    }

    /// Anchor the particle where it currently is. Pinning is permanent.
    ///
    /// Only the flag changes: a pinned particle never integrates, so its
    /// position holds without touching `prev_pos` or `acceleration`.
    pub fn pin(&mut self) {
        self.pinned = true;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_particle_ignores_acceleration() {
        let mut p = Particle::new(Vec3::new(5.0, 5.0, 5.0), TexCoord::default());
        p.pin();
        p.set_acceleration(Vec3::new(1000.0, 1000.0, 1000.0));
        p.integrate(1.0 / 60.0, 1.0);
        assert_eq!(p.pos, Vec3::new(5.0, 5.0, 5.0));
        assert_eq!(p.acceleration, Vec3::ZERO);
    }

    #[test]
    fn pinning_mid_flight_keeps_motion_state() {
        let mut p = Particle::new(Vec3::ZERO, TexCoord::default());
        p.prev_pos = Vec3::new(-2.0, 0.0, 0.0);
        p.set_acceleration(Vec3::new(0.0, -10.0, 0.0));
        p.pin();
        assert!(p.is_pinned());
        assert_eq!(p.velocity_raw(), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(p.acceleration, Vec3::new(0.0, -10.0, 0.0));

        p.integrate(0.016, 1.0);
        assert_eq!(p.pos, Vec3::ZERO);
        assert_eq!(p.prev_pos, Vec3::new(-2.0, 0.0, 0.0));
    }

    #[test]
    fn integrate_keeps_previous_position() {
        let mut p = Particle::new(Vec3::ZERO, TexCoord::default());
        p.set_acceleration(Vec3::new(0.0, -10.0, 0.0));
        p.integrate(0.1, 1.0);
        assert_eq!(p.prev_pos, Vec3::ZERO);
        assert!((p.pos.y + 0.1).abs() < 1e-6);
    }

    #[test]
    fn damping_scales_carried_velocity() {
        let mut p = Particle::new(Vec3::ZERO, TexCoord::default());
        p.prev_pos = Vec3::new(-1.0, 0.0, 0.0);
        p.integrate(0.016, 0.5);
        assert!((p.pos.x - 0.5).abs() < 1e-6);
    }
}
