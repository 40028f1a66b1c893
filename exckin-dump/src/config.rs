use std::f64::consts::PI;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use exckin_core::linkage::LinkageGeometry;

/// Range of one actuator, cylinder extension or slew angle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Stroke {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Stroke {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Actuator ranges used for sampling and sweeping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StrokeRanges {
    /// Boom cylinder stroke.
    pub boom: Stroke,
    /// Arm cylinder stroke.
    pub arm: Stroke,
    /// Attachment cylinder stroke.
    pub attachment: Stroke,
    /// Slew angle range in radians.
    pub slew: Stroke,
}

impl Default for StrokeRanges {
    fn default() -> Self {
        Self {
            boom: Stroke::new(0.0, 10.0),
            arm: Stroke::new(0.0, 8.0),
            attachment: Stroke::new(0.0, 6.0),
            slew: Stroke::new(-PI, PI),
        }
    }
}

/// Axis and view hints passed through to the plotting collaborator.
///
/// None of these affect the computed geometry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    /// X axis limits.
    pub xlim: [f64; 2],
    /// Y axis limits.
    pub ylim: [f64; 2],
    /// Z axis limits.
    pub zlim: [f64; 2],
    /// Azimuth view angle in degrees.
    pub azimuth: f64,
    /// Elevation view angle in degrees.
    pub elevation: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            xlim: [0.0, 80.0],
            ylim: [0.0, 80.0],
            zlim: [0.0, 50.0],
            azimuth: -137.0,
            elevation: 35.0,
        }
    }
}

/// Dump tool configuration.
///
/// Scalar fields precede the tables so the document serializes back to
/// valid TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DumpConfig {
    /// Number of point cloud samples.
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Linkage dimension table.
    #[serde(default = "crate::linkage::test_bed")]
    pub linkage: LinkageGeometry,
    /// Actuator ranges.
    #[serde(default)]
    pub stroke: StrokeRanges,
    /// Plotting hints.
    #[serde(default)]
    pub viewport: Viewport,
}

fn default_samples() -> usize {
    1_000
}

impl Default for DumpConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            linkage: crate::linkage::test_bed(),
            stroke: StrokeRanges::default(),
            viewport: Viewport::default(),
        }
    }
}

impl DumpConfig {
    /// Read configuration from the first candidate path that exists.
    ///
    /// Falls back to the built-in test bed configuration when none of
    /// the candidates is present.
    pub fn try_from_file<T: AsRef<str>>(paths: Vec<T>) -> anyhow::Result<Self> {
        for path in &paths {
            if Path::new(path.as_ref()).exists() {
                let contents = std::fs::read_to_string(path.as_ref())?;

                return Ok(toml::from_str(&contents)?);
            }
        }

        Ok(Self::default())
    }
}
