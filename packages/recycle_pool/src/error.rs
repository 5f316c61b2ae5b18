use thiserror::Error;

/// Errors that can occur when validating pool configuration values.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The caller tried to create a [`Fraction`][crate::Fraction] from a value that is not
    /// strictly between zero and one.
    #[error("invalid fraction: {value} is not strictly between 0 and 1")]
    InvalidFraction {
        /// The value that was rejected.
        value: f64,
    },
}

/// A specialized `Result` type for pool operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn invalid_fraction_mentions_value() {
        let error = Error::InvalidFraction { value: 1.5 };

        assert!(error.to_string().contains("1.5"));
    }
}
