//! Address families and the numeral parameters that describe them.

use std::fmt;

/// The family of an address, detected from the syntax of its literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    Ipv4,
    Ipv6,
}

/// Positional numeral parameters of an address family.
///
/// A literal is a sequence of `width / group_bits` groups, each written in
/// `radix` and joined by `separator`, most significant group first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyParams {
    /// Total number of bits in an address.
    pub width: u8,
    /// Number of bits carried by each group.
    pub group_bits: u8,
    /// Radix each group is written in.
    pub radix: u32,
    /// Character separating groups.
    pub separator: char,
}

impl FamilyParams {
    /// Number of groups in a fully written out address.
    pub const fn groups(&self) -> usize {
        (self.width / self.group_bits) as usize
    }

    /// Largest value a single group can hold.
    pub const fn group_max(&self) -> u32 {
        (1 << self.group_bits) - 1
    }

    /// All-ones value covering the full address width.
    pub const fn full_mask(&self) -> u128 {
        u128::MAX >> (128 - self.width as u32)
    }
}

const IPV4_PARAMS: FamilyParams = FamilyParams {
    width: 32,
    group_bits: 8,
    radix: 10,
    separator: '.',
};

const IPV6_PARAMS: FamilyParams = FamilyParams {
    width: 128,
    group_bits: 16,
    radix: 16,
    separator: ':',
};

impl AddressFamily {
    /// Detects the family of a literal: anything containing `:` is IPv6.
    pub fn detect(literal: &str) -> Self {
        if literal.contains(':') {
            AddressFamily::Ipv6
        } else {
            AddressFamily::Ipv4
        }
    }

    /// Returns the numeral parameters for this family.
    pub fn params(self) -> &'static FamilyParams {
        match self {
            AddressFamily::Ipv4 => &IPV4_PARAMS,
            AddressFamily::Ipv6 => &IPV6_PARAMS,
        }
    }

    /// Address width in bits (32 or 128).
    pub fn width(self) -> u8 {
        self.params().width
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Ipv4 => f.write_str("INET"),
            AddressFamily::Ipv6 => f.write_str("INET6"),
        }
    }
}
