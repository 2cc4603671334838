//! The particle entity: position, base drift, and oscillator state.

use crate::color::Rgba;
use crate::config::FieldConfig;
use crate::prng::SplitMix64;
use glam::DVec2;
use std::f64::consts::TAU;

/// A single animated point. Position and phase mutate every frame; velocity,
/// radius, and color are fixed at creation.
///
/// The oscillator (`phase`, `phase_speed`) layers a sinusoidal perturbation
/// on top of the linear velocity, turning straight-line drift into organic
/// motion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    pub radius: f64,
    pub color: Rgba,
    pub phase: f64,
    pub phase_speed: f64,
}

impl Particle {
    /// Creates a particle from independent uniform draws: position over the
    /// full `width` x `height` surface, velocity components over
    /// `[-max_speed, max_speed)`, radius, color, phase over `[0, 2pi)`, and
    /// phase speed, all per `config` ranges.
    pub fn random(rng: &mut SplitMix64, width: f64, height: f64, config: &FieldConfig) -> Particle {
        Particle {
            position: DVec2::new(rng.next_range(0.0, width), rng.next_range(0.0, height)),
            velocity: DVec2::new(
                rng.next_range(-config.max_speed, config.max_speed),
                rng.next_range(-config.max_speed, config.max_speed),
            ),
            radius: rng.next_range(config.min_radius, config.max_radius),
            color: config.palette.pick(rng),
            phase: rng.next_range(0.0, TAU),
            phase_speed: rng.next_range(config.min_phase_speed, config.max_phase_speed),
        }
    }

    /// Advances the oscillator and moves the particle one frame: linear
    /// drift plus independent sinusoidal sway per axis. No wrapping; the
    /// field applies the boundary policy afterwards.
    pub fn advance(&mut self, sway_x: f64, sway_y: f64) {
        self.phase += self.phase_speed;
        self.position.x += self.velocity.x + self.phase.sin() * sway_x;
        self.position.y += self.velocity.y + self.phase.cos() * sway_y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FieldConfig {
        FieldConfig::default()
    }

    #[test]
    fn random_particle_starts_on_the_surface() {
        let config = config();
        let mut rng = SplitMix64::new(42);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            assert!((0.0..800.0).contains(&p.position.x), "x = {}", p.position.x);
            assert!((0.0..600.0).contains(&p.position.y), "y = {}", p.position.y);
        }
    }

    #[test]
    fn random_particle_draws_within_config_ranges() {
        let config = config();
        let mut rng = SplitMix64::new(1);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 1024.0, 768.0, &config);
            assert!(p.velocity.x.abs() <= config.max_speed);
            assert!(p.velocity.y.abs() <= config.max_speed);
            assert!((config.min_radius..config.max_radius).contains(&p.radius));
            assert!((0.0..TAU).contains(&p.phase));
            assert!(
                (config.min_phase_speed..config.max_phase_speed).contains(&p.phase_speed)
            );
            assert!(config.palette.stops().contains(&p.color));
        }
    }

    #[test]
    fn same_seed_produces_identical_particles() {
        let config = config();
        let mut rng_a = SplitMix64::new(99);
        let mut rng_b = SplitMix64::new(99);
        for _ in 0..50 {
            let a = Particle::random(&mut rng_a, 640.0, 480.0, &config);
            let b = Particle::random(&mut rng_b, 640.0, 480.0, &config);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn advance_adds_phase_speed_to_phase() {
        let mut p = Particle {
            position: DVec2::new(100.0, 100.0),
            velocity: DVec2::ZERO,
            radius: 1.0,
            color: Rgba::opaque(255, 255, 255),
            phase: 0.5,
            phase_speed: 0.01,
        };
        p.advance(0.15, 0.10);
        assert!((p.phase - 0.51).abs() < 1e-12);
    }

    #[test]
    fn advance_with_zero_oscillator_is_pure_linear_drift() {
        // phase = pi kills the x sway (sin = 0); the y sway is -sway_y.
        let mut p = Particle {
            position: DVec2::new(-5.0, 400.0),
            velocity: DVec2::new(-0.2, 0.0),
            radius: 1.0,
            color: Rgba::opaque(255, 255, 255),
            phase: std::f64::consts::PI,
            phase_speed: 0.0,
        };
        p.advance(0.15, 0.10);
        assert!((p.position.x - -5.2).abs() < 1e-9, "x = {}", p.position.x);
        assert!((p.position.y - 399.9).abs() < 1e-9, "y = {}", p.position.y);
    }

    #[test]
    fn advance_applies_sway_amplitudes() {
        // phase = pi/2 after advance: sin = 1 (full x sway), cos = 0.
        let mut p = Particle {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            radius: 1.0,
            color: Rgba::opaque(0, 0, 0),
            phase: std::f64::consts::FRAC_PI_2,
            phase_speed: 0.0,
        };
        p.advance(0.15, 0.10);
        assert!((p.position.x - 0.15).abs() < 1e-12);
        assert!(p.position.y.abs() < 1e-12);
    }
}
