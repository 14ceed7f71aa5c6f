//! Borehole heat exchanger physics shared by the sizing models.
//!
//! # Overview
//!
//! Sizing a borehole couples two steady/transient building blocks:
//!
//! - [`resistance`]: steady-state conduction and convection resistances from
//!   the borehole wall to the circulating fluid, per unit borehole length,
//!   for single-U, double-U, and coaxial pipe layouts (multipole approximation).
//! - [`g_function`]: the dimensionless step response of the ground to a
//!   constant heat rate, blended from the cylindrical-source and line-source
//!   asymptotes, with a [`GFunctionTable`] for repeated lookups.
//!
//! The property records in this module carry the raw inputs both need.
//!
//! # Failure policy
//!
//! Everything here is evaluated deep inside sizing loops. Out-of-domain inputs
//! yield a zero resistance or zero response instead of an error; validation
//! belongs to the models that see the full configuration.
//!
//! [`GFunctionTable`]: g_function::GFunctionTable

pub mod g_function;
mod properties;
pub mod resistance;

pub use properties::{FluidProperties, GroundProperties, PipeProperties};
