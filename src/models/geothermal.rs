//! Geothermal system models.
//!
//! This module contains models for ground-coupled systems, currently the
//! sizing of vertical borehole heat exchangers.

pub mod bhe;
