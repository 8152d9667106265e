//! The normalized address value.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::codec::{int_to_literal, literal_to_int};
use crate::error::FormatError;
use crate::family::AddressFamily;
use crate::network::{network_mask, split_mask};

/// An IPv4 or IPv6 address with a mask length.
///
/// The literal an `Address` is built from is never kept as written: it is
/// converted to an integer and rendered back, so [`Address::address`] is
/// always the normalized form (lowercase, `::`-compressed for IPv6).
///
/// Equality, ordering and hashing look at the integer value and the mask
/// length only. The family is not compared, so `0.0.0.1/32` and
/// `::0.0.0.1/32` compare equal.
#[derive(Debug, Clone)]
pub struct Address {
    address_int: u128,
    address: String,
    mask_length: u8,
    family: AddressFamily,
}

impl Address {
    /// Parses an address literal.
    ///
    /// The literal may carry a `/mask` suffix and, for IPv6, square brackets.
    /// A mask in the literal takes precedence over `mask_length`; when neither
    /// is given the mask covers the full address width (32 or 128).
    ///
    /// # Arguments
    ///
    /// * `literal` - The address or network literal, e.g. `192.0.2.1/24`
    /// * `mask_length` - Mask length to use if the literal has none
    ///
    /// # Errors
    ///
    /// Returns a [`FormatError`] if the literal is malformed or the mask is
    /// longer than the address width.
    pub fn new(literal: &str, mask_length: Option<u8>) -> Result<Self, FormatError> {
        let family = AddressFamily::detect(literal);
        let (literal, literal_mask) = split_mask(literal)?;
        let mask_length = literal_mask
            .or(mask_length)
            .unwrap_or_else(|| family.width());
        if mask_length > family.width() {
            return Err(FormatError::MaskOutOfRange {
                mask: mask_length,
                width: family.width(),
            });
        }

        let address_int = literal_to_int(literal, family)?;
        Ok(Self::from_parts(address_int, mask_length, family))
    }

    fn from_parts(address_int: u128, mask_length: u8, family: AddressFamily) -> Self {
        Self {
            address_int,
            address: int_to_literal(address_int, family),
            mask_length,
            family,
        }
    }

    /// The address as an integer.
    pub fn address_int(&self) -> u128 {
        self.address_int
    }

    /// The normalized address literal, without mask.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// The mask length, in bits.
    pub fn mask_length(&self) -> u8 {
        self.mask_length
    }

    /// The family detected from the original literal.
    pub fn family(&self) -> AddressFamily {
        self.family
    }

    /// Returns the covering network as an `Address`.
    ///
    /// Uses `mask_length` if given, otherwise this address's own mask length.
    /// The result carries the mask length that was applied.
    pub fn network(&self, mask_length: Option<u8>) -> Result<Address, FormatError> {
        let mask_length = mask_length.unwrap_or(self.mask_length);
        let mask = network_mask(mask_length, self.family)?;
        Ok(Self::from_parts(
            self.address_int & mask,
            mask_length,
            self.family,
        ))
    }

    /// Returns the covering network in CIDR notation.
    ///
    /// ```
    /// use netmath::Address;
    ///
    /// let address: Address = "192.0.2.9/24".parse().unwrap();
    /// assert_eq!(address.to_network(None).unwrap(), "192.0.2.0/24");
    /// assert_eq!(address.to_network(Some(8)).unwrap(), "192.0.0.0/8");
    /// ```
    pub fn to_network(&self, mask_length: Option<u8>) -> Result<String, FormatError> {
        Ok(self.network(mask_length)?.to_string())
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        (self.address_int, self.mask_length) == (other.address_int, other.mask_length)
    }
}

impl Eq for Address {}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.address_int, self.mask_length).cmp(&(other.address_int, other.mask_length))
    }
}

impl Hash for Address {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address_int.hash(state);
        self.mask_length.hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.mask_length)
    }
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s, None)
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        let family = AddressFamily::Ipv4;
        Self::from_parts(u128::from(u32::from(ip)), family.width(), family)
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        let family = AddressFamily::Ipv6;
        Self::from_parts(u128::from(ip), family.width(), family)
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(ipv4) => ipv4.into(),
            IpAddr::V6(ipv6) => ipv6.into(),
        }
    }
}

impl From<&Address> for IpAddr {
    fn from(address: &Address) -> Self {
        match address.family {
            AddressFamily::Ipv4 => IpAddr::V4(Ipv4Addr::from(address.address_int as u32)),
            AddressFamily::Ipv6 => IpAddr::V6(Ipv6Addr::from(address.address_int)),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
