//! Type-level numeric constraints checked once at construction.
//!
//! Sizing inputs arrive as plain quantities. Before a model iterates on them,
//! each value that the physics requires to be in a particular range is passed
//! through a [`Constrained`] wrapper so a violation surfaces as a
//! [`ConstraintError`] at the boundary rather than as a `NaN` deep inside a
//! loop.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero (conductivities, diameters, flow)
//! - [`NonNegative`]: Zero or greater (annual energies, peak powers, weights)
//! - [`GreaterThanOne`]: Greater than one (heat pump COP and EER)
//!
//! # Extending
//!
//! Custom invariants can be defined by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod greater_than_one;
mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use greater_than_one::GreaterThanOne;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value must be greater than one")]
    NotAboveOne,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use twine_geothermal::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::ThermalConductivity, thermal_conductivity::watt_per_meter_kelvin};
///
/// let lambda = ThermalConductivity::new::<watt_per_meter_kelvin>(2.1);
/// let lambda = Constrained::<_, StrictlyPositive>::new(lambda).unwrap();
/// assert_eq!(lambda.into_inner().get::<watt_per_meter_kelvin>(), 2.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
