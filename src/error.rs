//! The error type returned when an address literal cannot be converted.

use thiserror::Error;

/// An address or network literal that could not be decomposed into the
/// segments its family requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("IPv6 address has too many groups: {found} (at most {max})")]
    TooManyGroups { found: usize, max: usize },

    #[error("IPv6 address has too few groups: {found} (expected {expected})")]
    TooFewGroups { found: usize, expected: usize },

    #[error("IPv4 address has too many octets: {found}")]
    TooManyOctets { found: usize },

    #[error("invalid address group: {0:?}")]
    InvalidGroup(String),

    #[error("invalid mask length: {0:?}")]
    InvalidMask(String),

    #[error("mask length {mask} exceeds address width {width}")]
    MaskOutOfRange { mask: u8, width: u8 },

    #[error("unbalanced brackets in address literal: {0:?}")]
    UnbalancedBrackets(String),
}
