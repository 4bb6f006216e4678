use thiserror::Error;

pub type Result<T> = std::result::Result<T, SamplingError>;

/// Broad classification of a [`SamplingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplingError {
    #[error("upper bound for a uniform integer must be positive")]
    ZeroBound,
    #[error("number of samples must be positive")]
    NonPositiveDrawCount,
    #[error("weight array must be non-empty")]
    EmptyWeights,
    #[error("weight {weight} at index {index} is not a non-negative number")]
    InvalidWeight { index: usize, weight: f64 },
    #[error("sum of weights must be positive, got {total}")]
    NonPositiveTotal { total: f64 },
    #[error("sum of weights overflowed to {total}")]
    NonFiniteTotal { total: f64 },
}

impl SamplingError {
    pub fn kind(&self) -> ErrorKind {
        // Every failure is a violated precondition; there is no I/O and nothing transient.
        ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_is_an_invalid_argument() {
        let errors = [
            SamplingError::ZeroBound,
            SamplingError::NonPositiveDrawCount,
            SamplingError::EmptyWeights,
            SamplingError::InvalidWeight {
                index: 3,
                weight: -1.0,
            },
            SamplingError::NonPositiveTotal { total: 0.0 },
            SamplingError::NonFiniteTotal {
                total: f64::INFINITY,
            },
        ];

        for error in errors {
            assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn messages_name_the_offending_weight() {
        let error = SamplingError::InvalidWeight {
            index: 1,
            weight: -2.5,
        };
        assert_eq!(
            error.to_string(),
            "weight -2.5 at index 1 is not a non-negative number"
        );
    }
}
