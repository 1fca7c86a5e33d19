mod bit_field;
mod error;

pub use bit_field::BitField;
pub use error::{Error, Result};
