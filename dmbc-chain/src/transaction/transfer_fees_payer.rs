use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::TransferFeesPayerOffer;
use crate::segment::SegmentWriter;
use crate::value::Signature;

/// `S(offer) || signature:64`, signed by the fees payer.
#[derive(Debug, Clone)]
pub struct TransferFeesPayerTx {
    network_id: u8,
    protocol_version: u8,
    offer: TransferFeesPayerOffer,
    fees_payer_signature: Signature,
}

impl TransferFeesPayerTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        offer: TransferFeesPayerOffer,
        fees_payer_signature: Signature,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            offer,
            fees_payer_signature,
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.offer.encode());
        w.push_field(&self.fees_payer_signature.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::TRANSFER_FEES_PAYER,
            &payload,
            None,
        )
    }
}
