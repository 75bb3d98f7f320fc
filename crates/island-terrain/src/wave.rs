//! Sea surface: a sum of sinusoids along the world axes.

use std::f32::consts::PI;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Horizontal axis a wave component travels along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WaveAxis {
    X,
    Z,
}

/// `amplitude * sin(wavenumber * s + angular_frequency * t + phase)` where
/// `s` is the coordinate along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveComponent {
    pub amplitude: f32,
    pub wavenumber: f32,
    /// Zero for a standing ripple.
    pub angular_frequency: f32,
    pub phase: f32,
    pub axis: WaveAxis,
}

impl WaveComponent {
    fn argument(&self, x: f32, z: f32, t: f32) -> f32 {
        let s = match self.axis {
            WaveAxis::X => x,
            WaveAxis::Z => z,
        };
        self.wavenumber * s + self.angular_frequency * t + self.phase
    }

    fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.amplitude * self.argument(x, z, t).sin()
    }

    /// Derivative along this component's axis.
    fn gradient(&self, x: f32, z: f32, t: f32) -> f32 {
        self.amplitude * self.wavenumber * self.argument(x, z, t).cos()
    }
}

/// Height and unit surface normal at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSample {
    pub height: f32,
    pub normal: Vec3,
}

/// Stateless sea-surface model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveField {
    pub components: Vec<WaveComponent>,
}

impl Default for WaveField {
    fn default() -> Self {
        Self {
            components: vec![
                WaveComponent {
                    amplitude: 0.6,
                    wavenumber: 0.15 * PI,
                    angular_frequency: 0.8 * PI,
                    phase: 0.0,
                    axis: WaveAxis::X,
                },
                WaveComponent {
                    amplitude: 0.6,
                    wavenumber: 0.1 * PI,
                    angular_frequency: 0.0,
                    phase: 0.2 * PI,
                    axis: WaveAxis::X,
                },
                WaveComponent {
                    amplitude: 0.2,
                    wavenumber: 0.2 * PI,
                    angular_frequency: PI,
                    phase: 0.5 * PI,
                    axis: WaveAxis::Z,
                },
                WaveComponent {
                    amplitude: 0.2,
                    wavenumber: 0.15 * PI,
                    angular_frequency: 0.0,
                    phase: 0.0,
                    axis: WaveAxis::Z,
                },
            ],
        }
    }
}

impl WaveField {
    /// A flat, motionless sea.
    pub fn calm() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    /// Surface elevation at `(x, z)` and simulated time `t`.
    pub fn height(&self, x: f32, z: f32, t: f32) -> f32 {
        self.components.iter().map(|c| c.height(x, z, t)).sum()
    }

    /// Elevation plus unit normal.
    pub fn sample(&self, x: f32, z: f32, t: f32) -> WaveSample {
        let mut dx = 0.0;
        let mut dz = 0.0;
        for c in &self.components {
            match c.axis {
                WaveAxis::X => dx += c.gradient(x, z, t),
                WaveAxis::Z => dz += c.gradient(x, z, t),
            }
        }
        WaveSample {
            height: self.height(x, z, t),
            normal: Vec3::new(-dx, 1.0, -dz).normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_closed_form() {
        let sea = WaveField::default();
        let (x, z, t) = (1.3_f32, -2.7_f32, 0.9_f32);
        let expected = 0.6 * (0.15 * PI * x + 0.8 * PI * t).sin()
            + 0.6 * (0.1 * PI * x + 0.2 * PI).sin()
            + 0.2 * (0.2 * PI * z + PI * t + 0.5 * PI).sin()
            + 0.2 * (0.15 * PI * z).sin();
        assert!((sea.height(x, z, t) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_height_is_bounded_by_amplitudes() {
        let sea = WaveField::default();
        let bound: f32 = sea.components.iter().map(|c| c.amplitude).sum();
        for i in 0..50 {
            let f = i as f32;
            let h = sea.height(f * 1.7 - 40.0, 30.0 - f * 1.1, f * 0.13);
            assert!(h.abs() <= bound + 1e-5, "height {h} exceeds {bound}");
        }
    }

    #[test]
    fn test_normal_is_unit_and_upward() {
        let sea = WaveField::default();
        for i in 0..20 {
            let f = i as f32;
            let s = sea.sample(f - 10.0, 3.0 * f, 0.25 * f);
            assert!((s.normal.length() - 1.0).abs() < 1e-5);
            assert!(s.normal.y > 0.0);
        }
    }

    #[test]
    fn test_normal_opposes_slope() {
        // Single ripple along x: where the surface rises with x the normal leans to -x.
        let sea = WaveField {
            components: vec![WaveComponent {
                amplitude: 1.0,
                wavenumber: 1.0,
                angular_frequency: 0.0,
                phase: 0.0,
                axis: WaveAxis::X,
            }],
        };
        let s = sea.sample(0.0, 0.0, 0.0);
        assert!(s.normal.x < 0.0);
        assert!(s.normal.z.abs() < 1e-6);
    }

    #[test]
    fn test_calm_sea() {
        let sea = WaveField::calm();
        assert_eq!(sea.height(4.0, -3.0, 12.0), 0.0);
        assert_eq!(sea.sample(4.0, -3.0, 12.0).normal, Vec3::Y);
    }

    #[test]
    fn test_standing_components_ignore_time() {
        let sea = WaveField {
            components: vec![WaveField::default().components[1]],
        };
        assert_eq!(sea.height(2.0, 0.0, 0.0), sea.height(2.0, 0.0, 100.0));
    }
}
