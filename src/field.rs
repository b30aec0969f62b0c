// The background particle field: a fixed population of drifting points,
// joined by lines whenever two of them come close enough.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use crate::utils::Timer;
use rand::Rng;
use vecmath::{vec2_len, vec2_sub, Vector2};

/// A line between two nearby particles.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Link {
    pub from: Vector2<f64>,
    pub to: Vector2<f64>,
    pub opacity: f64,
}

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f64, height: f64) -> ParticleField {
        ParticleField {
            config,
            width,
            height,
            particles: Vec::with_capacity(config.particle_count),
        }
    }

    /// Drops the current population and scatters `count` fresh particles
    /// over `[0, width] x [0, height]`.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R, count: usize, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::random(rng, width, height, &self.config);
            self.particles.push(p);
        }
    }

    /// Viewport changed: no position continuity, the whole population is
    /// recreated at the configured size.
    pub fn on_resize<R: Rng + ?Sized>(&mut self, rng: &mut R, width: f64, height: f64) {
        let count = self.config.particle_count;
        self.initialize(rng, count, width, height);
    }

    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }

    /// Linear falloff: `max_link_opacity` at distance zero, zero at
    /// `link_distance` and beyond.
    pub fn link_opacity(&self, distance: f64) -> f64 {
        let threshold = self.config.link_distance;
        if distance >= threshold {
            return 0.0;
        }
        (threshold - distance) / threshold * self.config.max_link_opacity
    }

    /// Every unordered pair closer than `link_distance`, each pair once.
    /// All pairs are checked, which is fine for the low hundreds of
    /// particles this field is meant for.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = &self.particles;
        let threshold = self.config.link_distance;
        particles.iter().enumerate().flat_map(move |(i, a)| {
            particles[i + 1..].iter().filter_map(move |b| {
                let distance = vec2_len(vec2_sub(a.pos, b.pos));
                if distance < threshold {
                    Some(Link {
                        from: a.pos,
                        to: b.pos,
                        opacity: self.link_opacity(distance),
                    })
                } else {
                    None
                }
            })
        })
    }

    pub fn render<S: Surface>(&self, surface: &mut S) -> Result<(), S::Error> {
        let _timer = Timer::new("ParticleField::render");
        surface.clear(self.width, self.height)?;
        let color = self.config.color;
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, color.with_opacity(p.opacity))?;
        }
        for link in self.links() {
            surface.stroke_line(
                link.from,
                link.to,
                self.config.link_width,
                color.with_opacity(link.opacity),
            )?;
        }
        Ok(())
    }

    /// One animation frame: move everything, then redraw.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        {
            let _timer = Timer::new("ParticleField::advance");
            self.advance();
        }
        self.render(surface)
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut Vec<Particle> {
        &mut self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DisplayList, DrawCommand};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field_with(points: &[[f64; 2]]) -> ParticleField {
        let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
        for &pos in points {
            field
                .particles_mut()
                .push(Particle::new(pos, [0.0, 0.0], 1.0, 0.5));
        }
        field
    }

    #[test]
    fn initialize_fills_viewport() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::new(FieldConfig::default(), 0.0, 0.0);
        field.initialize(&mut rng, 100, 800.0, 600.0);
        assert_eq!(field.particles().len(), 100);
        for p in field.particles() {
            assert!(p.pos[0] >= 0.0 && p.pos[0] <= 800.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] <= 600.0);
        }
        assert_eq!((field.width(), field.height()), (800.0, 600.0));
    }

    #[test]
    fn initialize_discards_previous_population() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
        field.initialize(&mut rng, 100, 800.0, 600.0);
        field.initialize(&mut rng, 10, 800.0, 600.0);
        assert_eq!(field.particles().len(), 10);
    }

    #[test]
    fn resize_replaces_everything() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = FieldConfig::default().with_count(40);
        let mut field = ParticleField::new(config, 800.0, 600.0);
        field.initialize(&mut rng, 7, 800.0, 600.0);
        let before = field.particles().to_vec();

        field.on_resize(&mut rng, 320.0, 240.0);
        assert_eq!(field.particles().len(), 40);
        assert_eq!((field.width(), field.height()), (320.0, 240.0));
        for p in field.particles() {
            assert!(!before.contains(p));
            assert!(p.pos[0] <= 320.0 && p.pos[1] <= 240.0);
        }
    }

    #[test]
    fn particles_stay_near_viewport() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut field = ParticleField::new(FieldConfig::default(), 0.0, 0.0);
        field.initialize(&mut rng, 100, 200.0, 100.0);
        for _ in 0..5_000 {
            field.advance();
        }
        // at most one step outside before reflecting
        for p in field.particles() {
            assert!(p.pos[0] >= -0.25 && p.pos[0] <= 200.25);
            assert!(p.pos[1] >= -0.25 && p.pos[1] <= 100.25);
        }
    }

    #[test]
    fn link_opacity_falls_off_linearly() {
        let field = field_with(&[]);
        assert_eq!(field.link_opacity(0.0), 0.3);
        assert!((field.link_opacity(50.0) - 0.15).abs() < 1e-12);
        assert_eq!(field.link_opacity(100.0), 0.0);
        assert_eq!(field.link_opacity(150.0), 0.0);

        let mut last = f64::INFINITY;
        for d in 0..=100 {
            let opacity = field.link_opacity(d as f64);
            assert!(opacity <= last);
            last = opacity;
        }
    }

    #[test]
    fn links_each_close_pair_once() {
        let field = field_with(&[[0.0, 0.0], [30.0, 40.0], [500.0, 500.0]]);
        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].from, [0.0, 0.0]);
        assert_eq!(links[0].to, [30.0, 40.0]);
        assert!((links[0].opacity - 0.15).abs() < 1e-12);
    }

    #[test]
    fn no_link_at_or_beyond_threshold() {
        let at = field_with(&[[0.0, 0.0], [60.0, 80.0]]);
        assert_eq!(at.links().count(), 0);
        let beyond = field_with(&[[0.0, 0.0], [100.0, 1.0]]);
        assert_eq!(beyond.links().count(), 0);
    }

    #[test]
    fn coincident_particles_link_at_full_opacity() {
        let field = field_with(&[[10.0, 10.0], [10.0, 10.0]]);
        let links: Vec<Link> = field.links().collect();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].opacity, 0.3);
    }

    #[test]
    fn link_count_is_pairwise() {
        // five particles clustered together: 5 choose 2 links
        let field = field_with(&[[1.0, 1.0], [2.0, 2.0], [3.0, 3.0], [4.0, 4.0], [5.0, 5.0]]);
        assert_eq!(field.links().count(), 10);
    }

    #[test]
    fn render_draws_circles_then_lines() {
        let field = field_with(&[[0.0, 0.0], [30.0, 40.0]]);
        let mut surface = DisplayList::new();
        field.render(&mut surface).unwrap();

        let commands = surface.commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(
            commands[0],
            DrawCommand::Clear {
                width: 800.0,
                height: 600.0
            }
        );
        match commands[1] {
            DrawCommand::Circle { center, radius, color } => {
                assert_eq!(center, [0.0, 0.0]);
                assert_eq!(radius, 1.0);
                assert_eq!((color.r, color.g, color.b), (213, 0, 249));
                assert_eq!(color.opacity(), 0.5);
            }
            ref other => panic!("expected circle, got {:?}", other),
        }
        assert_eq!(surface.circles().count(), 2);
        assert_eq!(surface.lines().count(), 1);
        match commands[3] {
            DrawCommand::Line { width, color, .. } => {
                assert_eq!(width, 1.0);
                assert_eq!(color.opacity(), field.link_opacity(50.0));
                assert_eq!(
                    color.to_css(),
                    format!("rgba(213, 0, 249, {})", field.link_opacity(50.0))
                );
            }
            ref other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn drawn_opacities_are_not_quantized() {
        let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
        for _ in 0..2 {
            field
                .particles_mut()
                .push(Particle::new([10.0, 10.0], [0.0, 0.0], 1.0, 0.45));
        }
        let mut surface = DisplayList::new();
        field.render(&mut surface).unwrap();

        for circle in surface.circles() {
            match *circle {
                DrawCommand::Circle { color, .. } => {
                    assert_eq!(color.opacity(), 0.45);
                    assert_eq!(color.to_css(), "rgba(213, 0, 249, 0.45)");
                }
                ref other => panic!("expected circle, got {:?}", other),
            }
        }
        let lines: Vec<&DrawCommand> = surface.lines().collect();
        assert_eq!(lines.len(), 1);
        match *lines[0] {
            DrawCommand::Line { color, .. } => {
                assert_eq!(color.opacity(), field.config().max_link_opacity);
                assert_eq!(color.to_css(), "rgba(213, 0, 249, 0.3)");
            }
            ref other => panic!("expected line, got {:?}", other),
        }
    }

    #[test]
    fn render_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut field = ParticleField::new(FieldConfig::default(), 0.0, 0.0);
        field.initialize(&mut rng, 100, 400.0, 300.0);

        let mut first = DisplayList::new();
        let mut second = DisplayList::new();
        field.render(&mut first).unwrap();
        field.render(&mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn tick_moves_then_draws() {
        let mut field = ParticleField::new(FieldConfig::default(), 800.0, 600.0);
        field
            .particles_mut()
            .push(Particle::new([100.0, 100.0], [0.25, -0.25], 1.0, 0.5));
        let mut surface = DisplayList::new();
        field.tick(&mut surface).unwrap();

        assert_eq!(field.particles()[0].pos, [100.25, 99.75]);
        match surface.commands()[1] {
            DrawCommand::Circle { center, .. } => assert_eq!(center, [100.25, 99.75]),
            ref other => panic!("expected circle, got {:?}", other),
        }
    }
}
