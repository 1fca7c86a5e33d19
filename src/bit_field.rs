use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use log::debug;

use crate::error::{Error, Result};

/// A 64-bit flag register.
///
/// Treats least significant bit as index 0. Mutators return `&mut Self` so
/// calls can be chained:
///
/// ```
/// use bit_field::BitField;
///
/// assert_eq!(29, BitField::new(0b1101).set_bit(4).value());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitField {
    value: u64,
}

impl BitField {
    /// Number of addressable bit positions.
    pub const BITS: u64 = u64::BITS as u64;

    pub fn new(initial: u64) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn reset(&mut self) -> &mut Self {
        self.value = 0;
        self
    }

    /// Panics if `bit` is 64 or greater.
    pub fn set_bit(&mut self, bit: u64) -> &mut Self {
        self.value |= Self::bit_mask(bit);
        self
    }

    pub fn set_mask(&mut self, mask: u64) -> &mut Self {
        self.value |= mask;
        self
    }

    pub fn set_from(&mut self, other: &BitField) -> &mut Self {
        self.set_mask(other.value)
    }

    /// Panics if `bit` is 64 or greater.
    pub fn clear_bit(&mut self, bit: u64) -> &mut Self {
        self.value &= !Self::bit_mask(bit);
        self
    }

    pub fn clear_mask(&mut self, mask: u64) -> &mut Self {
        self.value &= !mask;
        self
    }

    pub fn clear_from(&mut self, other: &BitField) -> &mut Self {
        self.clear_mask(other.value)
    }

    /// Panics if `bit` is 64 or greater.
    pub fn toggle_bit(&mut self, bit: u64) -> &mut Self {
        self.value ^= Self::bit_mask(bit);
        self
    }

    pub fn toggle_mask(&mut self, mask: u64) -> &mut Self {
        self.value ^= mask;
        self
    }

    pub fn toggle_from(&mut self, other: &BitField) -> &mut Self {
        self.toggle_mask(other.value)
    }

    /// Panics if `bit` is 64 or greater.
    pub fn test_bit(&self, bit: u64) -> bool {
        self.value & Self::bit_mask(bit) != 0
    }

    /// True iff every bit in `mask` is set. An empty mask is always satisfied.
    pub fn test_mask(&self, mask: u64) -> bool {
        self.value & mask == mask
    }

    pub fn test_from(&self, other: &BitField) -> bool {
        self.test_mask(other.value)
    }

    pub fn try_set_bit(&mut self, bit: u64) -> Result<&mut Self> {
        let mask = Self::checked_bit_mask(bit)?;
        Ok(self.set_mask(mask))
    }

    pub fn try_clear_bit(&mut self, bit: u64) -> Result<&mut Self> {
        let mask = Self::checked_bit_mask(bit)?;
        Ok(self.clear_mask(mask))
    }

    pub fn try_toggle_bit(&mut self, bit: u64) -> Result<&mut Self> {
        let mask = Self::checked_bit_mask(bit)?;
        Ok(self.toggle_mask(mask))
    }

    pub fn try_test_bit(&self, bit: u64) -> Result<bool> {
        let mask = Self::checked_bit_mask(bit)?;
        Ok(self.test_mask(mask))
    }

    fn bit_mask(bit: u64) -> u64 {
        assert!(
            bit < Self::BITS,
            "bit index {} out of range 0..{}",
            bit,
            Self::BITS
        );
        1 << bit
    }

    fn checked_bit_mask(bit: u64) -> Result<u64> {
        if bit < Self::BITS {
            Ok(1 << bit)
        } else {
            debug!("rejecting bit index {}", bit);
            Err(Error::from_bit(bit))
        }
    }
}

impl From<u64> for BitField {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl From<BitField> for u64 {
    fn from(field: BitField) -> Self {
        field.value
    }
}

impl BitOr for BitField {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::new(self.value | rhs.value)
    }
}

impl BitOrAssign for BitField {
    fn bitor_assign(&mut self, rhs: Self) {
        self.set_from(&rhs);
    }
}

impl BitAnd for BitField {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::new(self.value & rhs.value)
    }
}

impl BitAndAssign for BitField {
    fn bitand_assign(&mut self, rhs: Self) {
        self.value &= rhs.value;
    }
}

impl BitXor for BitField {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        Self::new(self.value ^ rhs.value)
    }
}

impl BitXorAssign for BitField {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.toggle_from(&rhs);
    }
}

impl Not for BitField {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::new(!self.value)
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#066b}", self.value)
    }
}

impl fmt::Binary for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.value, f)
    }
}

impl fmt::LowerHex for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.value, f)
    }
}

impl fmt::UpperHex for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.value, f)
    }
}
