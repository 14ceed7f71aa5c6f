//! Supporting utilities used by models.
//!
//! These modules are public because they're useful on their own, but their
//! APIs are not stable.
//!
//! - [`borehole`]: Borehole thermal resistances and ground response functions.
//! - [`constraint`]: Type-level numeric constraints for validated inputs.
//! - [`units`]: Extensions to [`uom`] for quantities borehole models need.

pub mod borehole;
pub mod constraint;
pub mod units;
