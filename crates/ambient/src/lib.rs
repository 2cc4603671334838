#![deny(unsafe_code)]
//! Ambient drift engine: a fixed pool of particles with organic motion,
//! toroidal wraparound, and an optional proximity-link pass.
//!
//! A [`ParticleField`] is created once from viewport dimensions, a seed, and
//! a [`FieldConfig`]; the particle count and device tier are decided at that
//! moment and never change. Each frame, [`step`](ParticleField::step)
//! advances every particle and applies the wraparound boundary, and
//! [`draw`](ParticleField::draw) renders discs plus (at the `Full` tier)
//! links between close pairs.
//!
//! The cancellable frame loop that drives a field lives in [`runner`].

pub mod runner;

use drift_field_core::{DeviceTier, FieldConfig, FieldError, Particle, Scene, SplitMix64, Surface};

/// A proximity link between two particles, identified by their stable
/// indices with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// Alpha of a link at the given pair distance: `base_alpha` at distance 0,
/// falling off linearly to 0 at `max_distance`, and 0 at or beyond it.
pub fn link_alpha(distance: f64, max_distance: f64, base_alpha: f64) -> f64 {
    if distance >= max_distance {
        0.0
    } else {
        base_alpha * (1.0 - distance / max_distance)
    }
}

/// The particle field: an ordered, fixed-size pool of particles plus the
/// dimensions they wrap against.
///
/// Particle identity (index) is stable for the lifetime of the field; the
/// link pass relies on this to visit each unordered pair exactly once.
pub struct ParticleField {
    width: f64,
    height: f64,
    tier: DeviceTier,
    config: FieldConfig,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Creates a field for the given viewport.
    ///
    /// The device tier (and with it the particle count and link mode) is
    /// derived from `viewport_width` against the config breakpoint, once.
    /// All particles are created eagerly from independent draws on a PRNG
    /// seeded with `seed`.
    ///
    /// Returns `FieldError::InvalidViewport` for non-finite or non-positive
    /// dimensions, or `FieldError::InvalidConfig` for a broken config.
    pub fn new(
        viewport_width: f64,
        viewport_height: f64,
        seed: u64,
        config: FieldConfig,
    ) -> Result<Self, FieldError> {
        if !(viewport_width.is_finite() && viewport_width > 0.0)
            || !(viewport_height.is_finite() && viewport_height > 0.0)
        {
            return Err(FieldError::InvalidViewport);
        }
        config.validate()?;

        let tier = DeviceTier::from_viewport_width(viewport_width, config.breakpoint);
        let count = config.count_for(tier);
        let mut rng = SplitMix64::new(seed);
        let particles = (0..count)
            .map(|_| Particle::random(&mut rng, viewport_width, viewport_height, &config))
            .collect();

        Ok(Self {
            width: viewport_width,
            height: viewport_height,
            tier,
            config,
            particles,
        })
    }

    /// Creates a field from a JSON config object, falling back to defaults
    /// for missing keys.
    pub fn from_json(
        viewport_width: f64,
        viewport_height: f64,
        seed: u64,
        params: &serde_json::Value,
    ) -> Result<Self, FieldError> {
        let config: FieldConfig = serde_json::from_value(params.clone())
            .map_err(|e| FieldError::InvalidConfig(e.to_string()))?;
        Self::new(viewport_width, viewport_height, seed, config)
    }

    /// Creates a field from a validated [`Scene`] recipe.
    pub fn from_scene(scene: &Scene) -> Result<Self, FieldError> {
        scene.validate()?;
        Self::new(scene.width, scene.height, scene.seed, scene.config.clone())
    }

    /// Current field width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Current field height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The tier decided at creation. Never changes.
    pub fn tier(&self) -> DeviceTier {
        self.tier
    }

    /// The configuration this field was built with.
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Read-only access to the particle pool, in stable index order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advances the simulation by one frame: per particle, advance the
    /// oscillator, apply drift plus sway, then wrap each axis into
    /// `[-margin, dimension + margin]`.
    pub fn step(&mut self) {
        let (sway_x, sway_y) = (self.config.sway_x, self.config.sway_y);
        let margin = self.config.wrap_margin;
        for p in &mut self.particles {
            p.advance(sway_x, sway_y);
            p.position.x = wrap_axis(p.position.x, self.width, margin);
            p.position.y = wrap_axis(p.position.y, self.height, margin);
        }
    }

    /// Updates the field dimensions after a viewport resize.
    ///
    /// Particles are not recreated, reseeded, or repositioned, and the tier
    /// is not re-evaluated; a particle outside the new bounds is pulled back
    /// in by the wrap on the next `step`. Callers resize their
    /// [`Surface`] separately via [`Surface::set_size`].
    pub fn resize(&mut self, new_width: f64, new_height: f64) {
        self.width = new_width;
        self.height = new_height;
    }

    /// All proximity links for the current positions: unordered pairs
    /// `(a, b)` with `a < b` whose Euclidean distance is strictly below the
    /// configured link distance.
    ///
    /// This is the O(n^2) pass; at the default cap of 120 particles that is
    /// at most 7140 distance checks per frame, which stays well under a
    /// frame budget without a spatial index.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max = self.config.link_distance;
        self.particles.iter().enumerate().flat_map(move |(i, p)| {
            self.particles[i + 1..]
                .iter()
                .enumerate()
                .filter_map(move |(offset, q)| {
                    let distance = p.position.distance(q.position);
                    (distance < max).then_some(Link {
                        a: i,
                        b: i + 1 + offset,
                        distance,
                    })
                })
        })
    }

    /// Renders the current frame: clears the surface, fills one disc per
    /// particle, and at the `Full` tier strokes every proximity link with
    /// a distance-faded alpha.
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.position, p.radius, p.color);
        }
        if self.tier.draws_links() {
            for link in self.links() {
                let alpha = link_alpha(
                    link.distance,
                    self.config.link_distance,
                    self.config.link_base_alpha,
                );
                surface.stroke_line(
                    self.particles[link.a].position,
                    self.particles[link.b].position,
                    self.config.link_width,
                    self.config.link_color.with_alpha(alpha),
                );
            }
        }
    }
}

/// Wraps one coordinate into `[-margin, dimension + margin]`: a value past
/// the far edge reappears at the near edge and vice versa.
fn wrap_axis(value: f64, dimension: f64, margin: f64) -> f64 {
    if value < -margin {
        dimension + margin
    } else if value > dimension + margin {
        -margin
    } else {
        value
    }
}
