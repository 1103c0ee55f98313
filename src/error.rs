/// Failures reported by the curve functions.
///
/// All of these are precondition violations: nothing is computed when
/// one is returned.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// The curve order was zero or not a power of two.
    InvalidOrder(u32),

    /// A coordinate or index was not below its limit.
    OutOfRange { value: u64, limit: u64 },

    /// A sample buffer didn't hold exactly `side * side` samples.
    SizeMismatch { expected: usize, actual: usize },
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match *self {
            Error::InvalidOrder(order) => write!(
                f,
                "invalid curve order {}: must be a non-zero power of two",
                order
            ),
            Error::OutOfRange { value, limit } => {
                write!(f, "value {} out of range: must be less than {}", value, limit)
            }
            Error::SizeMismatch { expected, actual } => write!(
                f,
                "sample buffer holds {} samples, expected {}",
                actual, expected
            ),
        }
    }
}
