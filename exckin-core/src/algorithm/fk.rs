use std::f64::consts::PI;

use nalgebra::{Point3, Rotation3};

use crate::geometry::{law_of_cosines, law_of_cosines_side, EulerAngles};
use crate::linkage::{ActuatorState, LinkageGeometry};
use crate::Result;

/// Joint angles recovered from an actuator state.
///
/// Each revolute angle is measured against the previous link's frame;
/// the slew angle rotates the whole planar chain about the vertical
/// axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    /// Slew angle about the vertical axis.
    pub slew: f64,
    /// Boom pitch relative to the frame.
    pub boom: f64,
    /// Arm pitch relative to the boom.
    pub arm: f64,
    /// Attachment pitch relative to the arm.
    pub attachment: f64,
}

/// World positions of the linkage joints, in chain order.
///
/// Every point depends on the cumulative sum of the joint angles
/// preceding it, so the chain must be read in order: undercarriage,
/// frame, boom pivot, arm pivot, attachment pivot, effector edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkagePose {
    /// Ground origin.
    pub undercarriage: Point3<f64>,
    /// Slew frame pivot.
    pub frame: Point3<f64>,
    /// Boom pivot.
    pub boom: Point3<f64>,
    /// Boom tip, arm pivot.
    pub arm: Point3<f64>,
    /// Arm tip, attachment pivot.
    pub attachment: Point3<f64>,
    /// Attachment tip.
    pub effector: Point3<f64>,
}

impl LinkagePose {
    /// Joint positions in chain order.
    pub fn points(&self) -> [Point3<f64>; 6] {
        [
            self.undercarriage,
            self.frame,
            self.boom,
            self.arm,
            self.attachment,
            self.effector,
        ]
    }

    /// Line segments connecting consecutive joints.
    pub fn segments(&self) -> [(Point3<f64>, Point3<f64>); 5] {
        [
            (self.undercarriage, self.frame),
            (self.frame, self.boom),
            (self.boom, self.arm),
            (self.arm, self.attachment),
            (self.attachment, self.effector),
        ]
    }
}

impl std::fmt::Display for LinkagePose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{:.2}, {:.2}, {:.2}]",
            self.effector.x, self.effector.y, self.effector.z
        )
    }
}

pub struct ForwardKinematics {
    geometry: LinkageGeometry,
}

impl ForwardKinematics {
    pub fn new(geometry: LinkageGeometry) -> Self {
        Self { geometry }
    }

    #[inline]
    pub fn geometry(&self) -> &LinkageGeometry {
        &self.geometry
    }

    /// Recover the joint angles from an actuator state.
    ///
    /// Each cylinder extension plus its retracted length forms the
    /// variable side of a triangle around the joint pivot; the enclosed
    /// angle follows from the law of cosines and is combined with the
    /// fixed plate offsets into the physical joint angle. The first
    /// out-of-domain cosine aborts the computation so no corrupted
    /// angle propagates down the chain.
    pub fn joint_angles(&self, state: &ActuatorState) -> Result<JointAngles> {
        let geometry = &self.geometry;

        // Boom circuit: cylinder AB closes the triangle around pivot O1.
        let r_c1 = state.boom + geometry.r_cyl1;
        let a_a1b = law_of_cosines(geometry.r_o1b, geometry.r_o1a, r_c1)?;
        let boom = a_a1b - geometry.a_b12 - geometry.a_a1x1;

        // Arm circuit: cylinder CD closes the triangle around pivot O2.
        let r_c2 = state.arm + geometry.r_cyl2;
        let a_c2d = law_of_cosines(geometry.r_o2c, geometry.r_o2d, r_c2)?;
        let arm = 3.0 * PI - geometry.a_12c - a_c2d - geometry.a_d23;

        // Attachment circuit: cylinder EF drives the FGH coupler, so the
        // pivot angle decomposes over the auxiliary diagonal O3H.
        let r_c3 = state.attachment + geometry.r_cyl3;
        let a_efh = law_of_cosines(geometry.r_ef, geometry.r_fh, r_c3)?;
        let a_hf3 = PI - geometry.a_dfe - a_efh;
        let r_o3h = law_of_cosines_side(geometry.r_o3f, geometry.r_fh, a_hf3);
        let a_f3h = law_of_cosines(r_o3h, geometry.r_o3f, geometry.r_fh)?;
        let a_h3g = law_of_cosines(r_o3h, geometry.r_o3g, geometry.r_gh)?;
        let attachment = 3.0 * PI - a_f3h - a_h3g - geometry.a_g34 - geometry.a_23d;

        Ok(JointAngles {
            slew: state.slew,
            boom,
            arm,
            attachment,
        })
    }

    /// Chain the joint angles into world positions.
    ///
    /// The planar reach accumulates the cosine of the cumulative pitch
    /// per link, the height the sine; the planar chain is then slewed
    /// about the vertical axis. The boom pivot offset `a1` contributes
    /// at zero pitch.
    pub fn pose(&self, angles: &JointAngles) -> LinkagePose {
        let geometry = &self.geometry;

        let boom_pitch = angles.boom;
        let arm_pitch = angles.boom + angles.arm;
        let attachment_pitch = angles.boom + angles.arm + angles.attachment;

        let slew = Rotation3::from_yaw(angles.slew);

        let undercarriage = Point3::origin();
        let frame = Point3::new(0.0, 0.0, geometry.gnd_offset);
        let boom = slew * Point3::new(geometry.a1, 0.0, geometry.gnd_offset);

        let reach = geometry.a2 * boom_pitch.cos() + geometry.a1;
        let height = geometry.a2 * boom_pitch.sin() + geometry.gnd_offset;
        let arm = slew * Point3::new(reach, 0.0, height);

        let reach = reach + geometry.a3 * arm_pitch.cos();
        let height = height + geometry.a3 * arm_pitch.sin();
        let attachment = slew * Point3::new(reach, 0.0, height);

        let reach = reach + geometry.a4 * attachment_pitch.cos();
        let height = height + geometry.a4 * attachment_pitch.sin();
        let effector = slew * Point3::new(reach, 0.0, height);

        LinkagePose {
            undercarriage,
            frame,
            boom,
            arm,
            attachment,
            effector,
        }
    }

    /// Solve the full forward kinematics for an actuator state.
    pub fn solve(&self, state: &ActuatorState) -> Result<LinkagePose> {
        let angles = self.joint_angles(state)?;

        Ok(self.pose(&angles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Linkage table of the laboratory test bed, in centimeters.
    fn test_bed() -> LinkageGeometry {
        LinkageGeometry {
            a1: 12.0,
            a2: 33.0,
            a3: 16.0,
            a4: 9.6,
            gnd_offset: 17.1,
            r_cyl1: 22.5,
            r_o1a: 7.0,
            r_o1b: 27.0,
            a_b12: 0.74,
            a_a1x1: 0.223,
            r_cyl2: 21.9,
            r_o2c: 23.5,
            r_o2d: 7.5,
            a_12c: 1.6,
            a_d23: 1.242,
            r_cyl3: 12.0,
            r_ef: 6.5,
            r_fh: 14.0,
            a_dfe: 0.85,
            r_o3f: 4.5,
            r_o3g: 7.0,
            r_gh: 7.5,
            a_g34: 0.85,
            a_23d: 0.29,
        }
    }

    #[test]
    fn test_neutral_angles() {
        let fk = ForwardKinematics::new(test_bed());

        let angles = fk
            .joint_angles(&ActuatorState::new(0.0, 0.0, 0.0, 0.0))
            .unwrap();

        let tolerance = 1e-9;
        assert_eq!(angles.slew, 0.0);
        assert!((angles.boom - -0.19444429325331805).abs() < tolerance);
        assert!((angles.arm - 5.3863077481495889).abs() < tolerance);
        assert!((angles.attachment - 6.320423935216442).abs() < tolerance);
    }

    #[test]
    fn test_neutral_pose() {
        let fk = ForwardKinematics::new(test_bed());

        let pose = fk.solve(&ActuatorState::new(0.0, 0.0, 0.0, 0.0)).unwrap();

        let tolerance = 1e-9;
        assert_eq!(pose.undercarriage, Point3::origin());
        assert_eq!(pose.frame, Point3::new(0.0, 0.0, 17.1));
        assert!(nalgebra::distance(&pose.boom, &Point3::new(12.0, 0.0, 17.1)) < tolerance);
        assert!(
            nalgebra::distance(
                &pose.arm,
                &Point3::new(44.378121449392594, 0.0, 10.723696101315195)
            ) < tolerance
        );
        assert!(
            nalgebra::distance(
                &pose.attachment,
                &Point3::new(51.759129023096897, 0.0, -3.472103530861915)
            ) < tolerance
        );
        assert!(
            nalgebra::distance(
                &pose.effector,
                &Point3::new(56.501769275207202, 0.0, -11.818801287403906)
            ) < tolerance
        );
    }

    #[test]
    fn test_reference_pose() {
        let fk = ForwardKinematics::new(test_bed());

        let state = ActuatorState::new(5.0, 4.0, 3.0, 0.7);
        let angles = fk.joint_angles(&state).unwrap();

        let tolerance = 1e-9;
        assert!((angles.boom - 0.55022484631638868).abs() < tolerance);
        assert!((angles.arm - 4.8342819427850188).abs() < tolerance);
        assert!((angles.attachment - 5.5200733157128203).abs() < tolerance);

        let pose = fk.pose(&angles);
        assert!(
            nalgebra::distance(
                &pose.effector,
                &Point3::new(37.645076830121837, 31.708010795651514, 12.274643619386712)
            ) < tolerance
        );
    }

    #[test]
    fn test_chain_segment_lengths() {
        let geometry = test_bed();
        let fk = ForwardKinematics::new(geometry);

        for state in [
            ActuatorState::new(0.0, 0.0, 0.0, 0.0),
            ActuatorState::new(5.0, 4.0, 3.0, 0.7),
            ActuatorState::new(10.0, 8.0, 6.0, -1.2),
            ActuatorState::new(2.5, 3.0, 1.5, 3.1),
        ] {
            let pose = fk.solve(&state).unwrap();

            let expected = [
                geometry.gnd_offset,
                geometry.a1,
                geometry.a2,
                geometry.a3,
                geometry.a4,
            ];

            let tolerance = 1e-9;
            for ((from, to), length) in pose.segments().iter().zip(expected) {
                assert!((nalgebra::distance(from, to) - length).abs() < tolerance);
            }
        }
    }

    #[test]
    fn test_slew_rigidity() {
        let fk = ForwardKinematics::new(test_bed());

        let state = ActuatorState::new(5.0, 4.0, 3.0, 0.3);
        let delta = 1.1;
        let slewed = ActuatorState {
            slew: state.slew + delta,
            ..state
        };

        let pose = fk.solve(&state).unwrap();
        let pose_slewed = fk.solve(&slewed).unwrap();

        let rotation = Rotation3::from_yaw(delta);

        let tolerance = 1e-9;
        for (point, point_slewed) in pose.points().iter().zip(pose_slewed.points()) {
            assert!((point.z - point_slewed.z).abs() < tolerance);
            assert!(nalgebra::distance(&(rotation * point), &point_slewed) < tolerance);
        }
    }

    #[test]
    fn test_out_of_reach() {
        let fk = ForwardKinematics::new(test_bed());

        // A boom cylinder extended past the stroke envelope cannot
        // close its pivot triangle.
        assert!(fk
            .solve(&ActuatorState::new(50.0, 0.0, 0.0, 0.0))
            .is_err());
        assert!(fk
            .solve(&ActuatorState::new(0.0, -20.0, 0.0, 0.0))
            .is_err());
    }

    #[test]
    fn test_solve_deterministic() {
        let fk = ForwardKinematics::new(test_bed());

        let state = ActuatorState::new(7.3, 2.1, 4.4, -0.6);

        assert_eq!(fk.solve(&state).unwrap(), fk.solve(&state).unwrap());
    }
}
