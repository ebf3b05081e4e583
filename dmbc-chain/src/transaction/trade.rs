use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::TradeOffer;
use crate::segment::SegmentWriter;
use crate::value::Signature;

/// `S(offer) || seller_sig:64`.
#[derive(Debug, Clone)]
pub struct TradeTx {
    network_id: u8,
    protocol_version: u8,
    offer: TradeOffer,
    seller_signature: Signature,
}

impl TradeTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        offer: TradeOffer,
        seller_signature: Signature,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            offer,
            seller_signature,
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.offer.encode());
        w.push_field(&self.seller_signature.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::TRADE,
            &payload,
            None,
        )
    }
}
