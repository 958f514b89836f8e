// ABOUTME: Running performance algorithms used to derive training paces
// ABOUTME: Currently the Daniels VDOT model with velocity inversion for pace bands

//! Algorithm Module
//!
//! Pace derivation goes through VDOT: a race result is converted to a VDOT
//! value, then each training intensity is expressed as a share of VDOT and
//! inverted back to a running velocity.
//!
//! # Example
//!
//! ```rust,no_run
//! use stride_intelligence::algorithms::VdotAlgorithm;
//!
//! let vdot = VdotAlgorithm::Daniels.calculate_vdot(5_000.0, 1_200.0)?;
//! # Ok::<(), stride_core::errors::AppError>(())
//! ```

pub mod vdot;

pub use vdot::VdotAlgorithm;
