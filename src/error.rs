use core::fmt;

/// Reasons a string could not be read as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input contained no digits.
    Empty,
    /// A character that is not a digit of the expected radix.
    InvalidDigit {
        /// Byte offset of the offending character in the original input.
        position: usize,
        /// The offending character.
        found: char,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            ParseError::Empty => write!(f, "The input contains no digits."),
            ParseError::InvalidDigit { position, found } => {
                write!(f, "The input contains an invalid digit ({found:?}) at position {position}.")
            }
        }
    }
}

/// Errors returned by the crate's API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input could not be parsed as a non-negative integer.
    Parse(ParseError),
    /// The requested bit length is too small to hold an odd prime.
    InvalidBitLength {
        /// The requested bit length.
        bit_length: u32,
    },
    /// No probable prime was found within the allowed number of candidates.
    GenerationFailed {
        /// The number of candidates that were drawn and rejected.
        attempts: usize,
    },
    /// The modulus of an RSA operation is too small: a factor or the modulus itself is below 2.
    InvalidModulus,
    /// The public exponent shares a factor with the totient, so no private exponent exists.
    NoInverse,
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Parse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Error::Parse(err) => fmt::Display::fmt(err, f),
            Error::InvalidBitLength { bit_length } => write!(
                f,
                "The requested bit length of the candidate ({}) must be 2 or greater.",
                bit_length
            ),
            Error::GenerationFailed { attempts } => write!(
                f,
                concat![
                    "No probable prime was found after {} candidates; ",
                    "retry with fresh entropy or raise the attempt limit."
                ],
                attempts
            ),
            Error::InvalidModulus => write!(f, "The modulus and each of its prime factors must be 2 or greater."),
            Error::NoInverse => write!(
                f,
                "The public exponent is not invertible modulo the totient of the modulus."
            ),
        }
    }
}

impl core::error::Error for Error {}
