use crate::color::Color;

/// Tunables for the background particle field.
///
/// Ranges are `(low, high)` pairs; a value is drawn as
/// `low + r * (high - low)` with `r` uniform in `[0, 1)`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    pub speed_range: (f64, f64),
    pub radius_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub color: Color,
    /// Pairs closer than this are joined by a line.
    pub link_distance: f64,
    /// Line opacity for two particles at distance zero.
    pub max_link_opacity: f64,
    pub link_width: f64,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 100;
    pub const LINK_DISTANCE: f64 = 100.0;
    pub const MAX_LINK_OPACITY: f64 = 0.3;
    pub const COLOR: u32 = 0xd500f9ff;

    pub fn with_count(self, particle_count: usize) -> Self {
        FieldConfig {
            particle_count,
            ..self
        }
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            speed_range: (-0.25, 0.25),
            radius_range: (0.5, 2.5),
            opacity_range: (0.2, 0.7),
            color: Color::from_u32(FieldConfig::COLOR),
            link_distance: FieldConfig::LINK_DISTANCE,
            max_link_opacity: FieldConfig::MAX_LINK_OPACITY,
            link_width: 1.0,
        }
    }
}

// Maps a unit sample in [0, 1) onto the range
pub(crate) fn lerp_range(range: (f64, f64), unit: f64) -> f64 {
    range.0 + unit * (range.1 - range.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.link_distance, 100.0);
        assert_eq!(config.max_link_opacity, 0.3);
        assert_eq!(config.color.to_css(), "rgba(213, 0, 249, 1)");
    }

    #[test]
    fn speed_range_is_symmetric() {
        let (low, high) = FieldConfig::default().speed_range;
        assert_eq!(low, -high);
    }

    #[test]
    fn lerp_range_endpoints() {
        assert_eq!(lerp_range((0.5, 2.5), 0.0), 0.5);
        assert_eq!(lerp_range((0.5, 2.5), 0.5), 1.5);
        assert_eq!(lerp_range((-0.25, 0.25), 0.5), 0.0);
    }
}
