use bit_field::BitField;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Permission {
    Read,
    Write,
    Execute,
    Delete,
    Admin,
}

impl Permission {
    pub fn bit(self) -> u64 {
        use Permission::*;
        match self {
            Read => 0,
            Write => 1,
            Execute => 2,
            Delete => 5,
            Admin => 63,
        }
    }

    pub fn mask(self) -> u64 {
        1 << self.bit()
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds a permission set holding exactly `granted`.
pub fn permissions(granted: &[Permission]) -> BitField {
    let mut set = BitField::default();
    for permission in granted {
        set.set_bit(permission.bit());
    }
    set
}

pub fn all_permissions() -> BitField {
    let all: Vec<Permission> = Permission::iter().collect();
    permissions(&all)
}

/// Values with a spread of bit patterns, including both extremes.
pub fn sample_values() -> Vec<u64> {
    vec![
        0,
        1,
        0b1101,
        0xdead_beef,
        0x8000_0000_0000_0001,
        0x5555_5555_5555_5555,
        0xaaaa_aaaa_aaaa_aaaa,
        u64::MAX,
    ]
}
