#![doc = include_str!("../README.md")]

pub(crate) mod address;
pub(crate) mod codec;
pub(crate) mod error;
pub(crate) mod family;
pub(crate) mod network;

pub use address::Address;
pub use codec::{expand_shorthand, int_to_literal, literal_to_int, strip_brackets};
pub use error::FormatError;
pub use family::{AddressFamily, FamilyParams};
pub use network::{mask_network, mask_networks, network_mask, split_mask, NetworkInput};
