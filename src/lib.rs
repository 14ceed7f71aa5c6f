//! # Twine Geothermal
//!
//! Borehole heat exchanger sizing models for
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The crate sizes vertical ground-source heat pump loops for a single borehole
//! or a small group of thermally independent boreholes. Given ground, pipe,
//! grout, fluid, and load data it finds the required borehole depth and the
//! circulating-fluid temperatures that go with it.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code in this crate follows a natural progression as needs emerge:
//!
//! 1. **Model-specific**: Starts in a model's internal `core` module
//! 2. **Domain-specific**: If useful across models in a domain (e.g., `geothermal`),
//!    it moves to a domain-level support module
//! 3. **Crate-level**: If useful across multiple domains or potentially useful
//!    outside this crate, it moves to [`support`]
//!
//! Borehole resistances and ground response functions live in
//! [`support::borehole`] because both sizing models, and any future field-level
//! model, evaluate them.

pub mod models;
pub mod support;
