use serde::{Deserialize, Serialize};

/// Excavator linkage dimension table.
///
/// Lengths are in centimeters, fixed angles in radians. The field names
/// follow the pivot labeling of the linkage drawings: `O1`, `O2` and
/// `O3` are the boom, arm and attachment pivots, `A` through `H` the
/// cylinder and coupler pins, and `x1` the frame reference axis. A
/// prefix of `r_` denotes a pin-to-pin distance, `a_` a fixed angle
/// between rigid sub-triangles.
///
/// The table is immutable machine data; every solver call borrows it
/// read-only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkageGeometry {
    /// Slew axis to boom pivot offset.
    pub a1: f64,
    /// Boom length, pivot to pivot.
    pub a2: f64,
    /// Arm length, pivot to pivot.
    pub a3: f64,
    /// Attachment length, pivot to edge.
    pub a4: f64,
    /// Vertical distance from the ground to the slew frame pivot.
    pub gnd_offset: f64,

    /// Boom cylinder length at full retraction.
    pub r_cyl1: f64,
    /// Boom pivot to cylinder base pin.
    pub r_o1a: f64,
    /// Boom pivot to cylinder rod pin.
    pub r_o1b: f64,
    /// Fixed angle between the rod pin and the boom line.
    pub a_b12: f64,
    /// Fixed angle between the base pin and the frame axis.
    pub a_a1x1: f64,

    /// Arm cylinder length at full retraction.
    pub r_cyl2: f64,
    /// Arm pivot to cylinder base pin.
    pub r_o2c: f64,
    /// Arm pivot to cylinder rod pin.
    pub r_o2d: f64,
    /// Fixed angle between the boom line and the cylinder base pin.
    pub a_12c: f64,
    /// Fixed angle between the cylinder rod pin and the arm line.
    pub a_d23: f64,

    /// Attachment cylinder length at full retraction.
    pub r_cyl3: f64,
    /// Coupler pin E to coupler pin F.
    pub r_ef: f64,
    /// Coupler pin F to coupler pin H.
    pub r_fh: f64,
    /// Attachment pivot to coupler pin F.
    pub r_o3f: f64,
    /// Attachment pivot to coupler pin G.
    pub r_o3g: f64,
    /// Coupler pin G to coupler pin H.
    pub r_gh: f64,
    /// Fixed angle of the DFE coupler plate.
    pub a_dfe: f64,
    /// Fixed angle between coupler pin G and the attachment line.
    pub a_g34: f64,
    /// Fixed angle between the arm line and the cylinder base pin.
    pub a_23d: f64,
}

/// Instantaneous actuator configuration.
///
/// Cylinder extensions are measured from full retraction, in the same
/// unit as the linkage table. The slew angle is in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActuatorState {
    /// Boom cylinder extension.
    pub boom: f64,
    /// Arm cylinder extension.
    pub arm: f64,
    /// Attachment cylinder extension.
    pub attachment: f64,
    /// Slew angle about the vertical axis.
    pub slew: f64,
}

impl ActuatorState {
    pub fn new(boom: f64, arm: f64, attachment: f64, slew: f64) -> Self {
        Self {
            boom,
            arm,
            attachment,
            slew,
        }
    }
}

impl From<(f64, f64, f64, f64)> for ActuatorState {
    fn from(value: (f64, f64, f64, f64)) -> Self {
        Self::new(value.0, value.1, value.2, value.3)
    }
}

impl std::fmt::Display for ActuatorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Boom: {:.2} Arm: {:.2} Attachment: {:.2} Slew: {:.2}rad",
            self.boom, self.arm, self.attachment, self.slew
        )
    }
}
