use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::ExchangeOffer;
use crate::segment::SegmentWriter;
use crate::value::Signature;

/// `S(offer) || signature:64`, signed by the sender.
#[derive(Debug, Clone)]
pub struct ExchangeTx {
    network_id: u8,
    protocol_version: u8,
    offer: ExchangeOffer,
    sender_signature: Signature,
}

impl ExchangeTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        offer: ExchangeOffer,
        sender_signature: Signature,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            offer,
            sender_signature,
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.offer.encode());
        w.push_field(&self.sender_signature.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::EXCHANGE,
            &payload,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PublicKey;

    #[test]
    fn exchange_tx_carries_message_type_601() {
        let offer = ExchangeOffer::new(PublicKey([1; 32]), 10, PublicKey([2; 32]), 1, 0, "memo").unwrap();
        let tx = ExchangeTx::new(1, 1, offer, Signature([0x11; 64]));
        let out = tx.into_bytes();
        assert_eq!(out[2..4], message_type::EXCHANGE.to_le_bytes());
    }
}
