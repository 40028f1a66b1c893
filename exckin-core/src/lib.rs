//! The `exckin-core` library implements the closed-form kinematics of a
//! cylinder-actuated excavator linkage.
//!
//! Each linear cylinder closes a triangle around its joint pivot, so the
//! joint angle follows from the law of cosines applied to the cylinder
//! length. The recovered joint angles chain into a planar arm which is
//! slewed about the vertical axis to produce world positions for every
//! joint from the undercarriage up to the effector.
//!
//! The solver is pure: a [`linkage::LinkageGeometry`] table is shared
//! read-only and every solve is an independent, side-effect-free
//! computation. An actuator state outside the reachable envelope is
//! reported as [`Error::CosineDomain`] and never produces a NaN pose.

pub mod algorithm;
pub mod geometry;
pub mod linkage;

mod error;

pub use self::error::Error;

pub use nalgebra;

pub type Result<T = ()> = std::result::Result<T, Error>;
