//! Masking of address literals down to their covering networks.

use tracing::trace;

use crate::codec::{int_to_literal, literal_to_int, strip_brackets};
use crate::error::FormatError;
use crate::family::AddressFamily;

/// Splits an optional `/mask` suffix off a literal.
///
/// Returns the address part and the mask length, if one was given.
pub fn split_mask(literal: &str) -> Result<(&str, Option<u8>), FormatError> {
    match literal.split_once('/') {
        None => Ok((literal, None)),
        Some((address, mask)) => mask
            .parse::<u8>()
            .map(|mask_length| (address, Some(mask_length)))
            .map_err(|_| FormatError::InvalidMask(mask.to_string())),
    }
}

/// Returns the bitmask selecting the leading `mask_length` bits of an address
/// of the given family.
///
/// # Errors
///
/// Fails if `mask_length` is longer than the family's address width.
pub fn network_mask(mask_length: u8, family: AddressFamily) -> Result<u128, FormatError> {
    let params = family.params();
    if mask_length > params.width {
        return Err(FormatError::MaskOutOfRange {
            mask: mask_length,
            width: params.width,
        });
    }
    if mask_length == 0 {
        return Ok(0);
    }
    Ok((u128::MAX << (params.width - mask_length)) & params.full_mask())
}

/// Masks a single literal to its covering network in CIDR notation.
///
/// A `/mask` suffix on the literal takes precedence over `default_mask`. When
/// the effective mask is zero the address part is returned as written, with
/// any `/0` suffix dropped.
/// Bracketed IPv6 literals keep their brackets: `[2001:db8::1]/48` becomes
/// `[2001:db8::0]/48`.
pub fn mask_network(literal: &str, default_mask: u8) -> Result<String, FormatError> {
    let (address, mask) = split_mask(literal)?;
    let mask_length = mask.unwrap_or(default_mask);
    if mask_length == 0 {
        trace!("zero mask length, passing {:?} through", address);
        return Ok(address.to_string());
    }

    let family = AddressFamily::detect(address);
    let (address, wrapped) = strip_brackets(address)?;
    let network = literal_to_int(address, family)? & network_mask(mask_length, family)?;
    let network = int_to_literal(network, family);

    if wrapped {
        Ok(format!("[{network}]/{mask_length}"))
    } else {
        Ok(format!("{network}/{mask_length}"))
    }
}

/// Input accepted by [`mask_networks`]: a single literal, or a sequence of
/// literals.
///
/// The output keeps the shape of the input. A single literal gives a single
/// `String`, a sequence gives a `Vec<String>` in the same order.
pub trait NetworkInput {
    type Output;

    /// Masks every literal in `self`; see [`mask_network`].
    fn mask_with(self, default_mask: u8) -> Result<Self::Output, FormatError>;
}

impl NetworkInput for &str {
    type Output = String;

    fn mask_with(self, default_mask: u8) -> Result<String, FormatError> {
        mask_network(self, default_mask)
    }
}

impl NetworkInput for String {
    type Output = String;

    fn mask_with(self, default_mask: u8) -> Result<String, FormatError> {
        mask_network(&self, default_mask)
    }
}

impl<S: AsRef<str>> NetworkInput for &[S] {
    type Output = Vec<String>;

    fn mask_with(self, default_mask: u8) -> Result<Vec<String>, FormatError> {
        self.iter()
            .map(|literal| mask_network(literal.as_ref(), default_mask))
            .collect()
    }
}

impl<S: AsRef<str>> NetworkInput for Vec<S> {
    type Output = Vec<String>;

    fn mask_with(self, default_mask: u8) -> Result<Vec<String>, FormatError> {
        self.as_slice().mask_with(default_mask)
    }
}

impl<S: AsRef<str>, const N: usize> NetworkInput for [S; N] {
    type Output = Vec<String>;

    fn mask_with(self, default_mask: u8) -> Result<Vec<String>, FormatError> {
        self.as_slice().mask_with(default_mask)
    }
}

/// Masks one literal or a sequence of literals to their covering networks.
///
/// Each literal is handled independently: its own `/mask` suffix overrides
/// `default_mask`, IPv4 and IPv6 literals may be mixed, and a zero effective
/// mask passes the address through unmasked. The first malformed literal
/// fails the whole call.
///
/// # Examples
///
/// ```
/// use netmath::mask_networks;
///
/// assert_eq!(mask_networks("192.0.2.190", 28).unwrap(), "192.0.2.176/28");
/// assert_eq!(
///     mask_networks(["192.0.2.190/28", "192.0.2.10"], 0).unwrap(),
///     vec!["192.0.2.176/28", "192.0.2.10"]
/// );
/// ```
pub fn mask_networks<T: NetworkInput>(input: T, default_mask: u8) -> Result<T::Output, FormatError> {
    input.mask_with(default_mask)
}
