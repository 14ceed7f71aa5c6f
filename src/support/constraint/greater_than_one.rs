use std::cmp::Ordering;

use num_traits::One;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly greater than one.
///
/// A heat pump delivers more thermal energy than it draws electrically, so a
/// coefficient of performance at or below one is physically invalid.
///
/// # Examples
///
/// ```
/// use twine_geothermal::support::constraint::GreaterThanOne;
///
/// assert!(GreaterThanOne::new(4.0).is_ok());
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(0.8).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs a [`Constrained<T, GreaterThanOne>`] if the value exceeds one.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is at or below one, or not a number (`NaN`).
    pub fn new<T: PartialOrd + One>(
        value: T,
    ) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: PartialOrd + One> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal | Ordering::Less) => Err(ConstraintError::NotAboveOne),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
