use crate::{Error, Result};

/// How many items to remove when shrinking a [`Generator`][crate::Generator].
///
/// Usually you do not name this type directly: [`Generator::delete()`][1] accepts anything
/// that converts into it.
///
/// * A `usize` is an absolute number of items.
/// * An `f64` of `1.0` or more is an absolute number of items (the fractional part is
///   discarded).
/// * An `f64` strictly between `0.0` and `1.0` is a fraction of the items currently stored.
/// * Any other `f64` (zero, negative, NaN) removes nothing.
///
/// # Example
///
/// ```rust
/// use recycle_pool::{DeleteAmount, Fraction};
///
/// assert_eq!(DeleteAmount::from(3_usize).resolve(10), 3);
/// assert_eq!(DeleteAmount::from(0.2).resolve(10), 2);
/// assert_eq!(DeleteAmount::from(-1.0).resolve(10), 0);
///
/// let half = Fraction::new(0.5).unwrap();
/// assert_eq!(DeleteAmount::from(half).resolve(9), 5);
/// ```
///
/// [1]: crate::Generator::delete
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum DeleteAmount {
    /// Remove this many items, or all of them if fewer are stored.
    Count(usize),

    /// Remove this share of the currently stored items, rounded to the nearest whole item.
    Fraction(Fraction),
}

impl DeleteAmount {
    /// Resolves the amount into a concrete number of items to remove from a container
    /// that currently stores `current` items. The result never exceeds `current`.
    #[must_use]
    pub fn resolve(self, current: usize) -> usize {
        match self {
            Self::Count(n) => n.min(current),
            Self::Fraction(fraction) => fraction.of(current),
        }
    }
}

impl From<usize> for DeleteAmount {
    fn from(value: usize) -> Self {
        Self::Count(value)
    }
}

impl From<Fraction> for DeleteAmount {
    fn from(value: Fraction) -> Self {
        Self::Fraction(value)
    }
}

impl From<f64> for DeleteAmount {
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is known to be at least 1.0; saturating float-to-int conversion is intended"
    )]
    fn from(value: f64) -> Self {
        if value >= 1.0 {
            Self::Count(value as usize)
        } else {
            Fraction::new(value).map_or(Self::Count(0), Self::Fraction)
        }
    }
}

/// A share of a collection, strictly between zero and one.
///
/// # Example
///
/// ```rust
/// use recycle_pool::Fraction;
///
/// let fifth = Fraction::new(0.2).unwrap();
/// assert_eq!(fifth.of(10), 2);
///
/// assert!(Fraction::new(1.0).is_err());
/// assert!(Fraction::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Fraction(f64);

impl Fraction {
    /// Creates a new fraction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFraction`] if `value` is not strictly between `0.0` and `1.0`
    /// (this includes NaN).
    pub fn new(value: f64) -> Result<Self> {
        if value > 0.0 && value < 1.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidFraction { value })
        }
    }

    /// The fraction as a floating point value.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }

    /// The number of items this fraction represents out of `total`, rounded to the nearest
    /// whole item. Never exceeds `total`.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "pool sizes are far below the range where f64 loses integer precision"
    )]
    pub fn of(self, total: usize) -> usize {
        let share = (self.0 * total as f64).round() as usize;
        share.min(total)
    }
}
