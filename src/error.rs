use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    BitOutOfRange { bit: u64 },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::BitOutOfRange { bit } => {
                write!(f, "bit index {} out of range 0..{}", bit, crate::BitField::BITS)
            }
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn from_bit(bit: u64) -> Self {
        Error::BitOutOfRange { bit }
    }
}
