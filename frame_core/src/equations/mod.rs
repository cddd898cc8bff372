//! # Structural Mechanics Equations
//!
//! All closed-form formulas used by the solvers live here so they can be
//! checked against references in one place. The solvers in
//! [`crate::calculations`] only decide *which* formula applies and accumulate
//! the results.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam formulas (reactions, curves, deflection)
//! - [`frame`] - Four-corner load distribution and frame self-weight
//! - [`section`] - Cross-section properties (A, I, S)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)

pub mod beam;
pub mod frame;
pub mod section;

pub use beam::{
    frame_headline_deflection,
    point_load_deflection,
    point_load_reactions,
    total_load_deflection,
    uniform_load_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    uniform_load_moment,
    uniform_load_shear,
};

pub use frame::{corner_shares, frame_perimeter, frame_self_weight, CornerReactions};

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    flanged_area,
    flanged_moment_of_inertia,
    rectangular_area,
    rectangular_moment_of_inertia,
    section_modulus,
};
