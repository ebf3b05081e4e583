use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::ExchangeOfferIntermediary;
use crate::segment::SegmentWriter;
use crate::value::Signature;

/// `S(offer) || sender_sig:64 || intermediary_sig:64`.
#[derive(Debug, Clone)]
pub struct ExchangeIntermediaryTx {
    network_id: u8,
    protocol_version: u8,
    offer: ExchangeOfferIntermediary,
    sender_signature: Signature,
    intermediary_signature: Signature,
}

impl ExchangeIntermediaryTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        offer: ExchangeOfferIntermediary,
        sender_signature: Signature,
        intermediary_signature: Signature,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            offer,
            sender_signature,
            intermediary_signature,
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.offer.encode());
        w.push_field(&self.sender_signature.dmbc_encode_to_vec());
        w.push_field(&self.intermediary_signature.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::EXCHANGE_INTERMEDIARY,
            &payload,
            None,
        )
    }
}
