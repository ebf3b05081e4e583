//! The framed-message envelope shared by every transaction kind:
//!
//! ```text
//! network_id:u8 || protocol_version:u8 || message_type:u16 ||
//! service_id:u16 || payload_length:u32 ||
//! <payload bytes> ||
//! signature:64B
//! ```
//!
//! Every transaction builder composes its own payload and then calls
//! [`encode_envelope`] exactly once instead of re-deriving this framing
//! per type.

use crate::codec::DmbcEncode;
use crate::value::Signature;

/// `service_id` is fixed for every transaction kind built by this crate.
pub const SERVICE_ID: u16 = 2;

/// Byte size of the envelope's fixed framing ahead of the payload:
/// `network_id(1) + protocol_version(1) + message_type(2) + service_id(2)
/// + payload_length(4)`.
pub const HEADER_SIZE: usize = 10;

/// Byte size of the trailing signature slot.
pub const SIGNATURE_SIZE: usize = 64;

pub mod message_type {
    pub const TRANSFER: u16 = 200;
    pub const ADD_ASSETS: u16 = 300;
    pub const DELETE_ASSETS: u16 = 400;
    pub const TRADE: u16 = 501;
    pub const TRADE_INTERMEDIARY: u16 = 502;
    pub const EXCHANGE: u16 = 601;
    pub const EXCHANGE_INTERMEDIARY: u16 = 602;
    pub const ASK_OFFER: u16 = 700;
    pub const BID_OFFER: u16 = 701;
    pub const TRANSFER_FEES_PAYER: u16 = 203;
}

/// Assembles the full envelope around `payload`, given the outer 64-byte
/// signature slot (zero-filled when the caller supplies `None` — the
/// envelope signature is always zero in this library's output; the
/// distinct inner offer signatures, when present, already live inside
/// `payload`).
pub fn encode_envelope(
    network_id: u8,
    protocol_version: u8,
    message_type: u16,
    payload: &[u8],
    signature: Option<Signature>,
) -> Vec<u8> {
    let signature = signature.unwrap_or_else(Signature::zero);
    let payload_length = payload.len() as u32;

    let mut out = Vec::with_capacity(HEADER_SIZE + payload.len() + SIGNATURE_SIZE);
    network_id.dmbc_encode(&mut out);
    protocol_version.dmbc_encode(&mut out);
    message_type.dmbc_encode(&mut out);
    SERVICE_ID.dmbc_encode(&mut out);
    payload_length.dmbc_encode(&mut out);
    out.extend_from_slice(payload);
    signature.dmbc_encode(&mut out);

    out
}
