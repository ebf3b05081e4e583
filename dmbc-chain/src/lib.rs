//! Canonical transaction builder and binary encoder for a permissioned
//! asset-trading blockchain.
//!
//! This crate is a pure builder/encoder: it does not sign transactions, talk
//! to the network, persist state, or implement cryptographic primitives. It
//! assembles the value and offer objects a caller supplies into the
//! platform's canonical, bit-exact wire format — a zero-copy segmented
//! layout of inline fixed-size headers and a heap-suffix tail of
//! variable-length payloads (see [`segment`]) — so that the resulting bytes
//! can be signed and submitted by the caller.

pub mod codec;
pub mod envelope;
pub mod error;
pub mod offer;
pub mod segment;
pub mod transaction;
pub mod value;

pub use error::{DmbcError, Result};
