use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::segment::SegmentWriter;
use crate::value::{PublicKey, TradeAsset};

/// `public_key:32 || TradeAsset(32) || seed:u64 || S(data_info)`.
#[derive(Debug, Clone)]
pub struct BidOfferTx {
    network_id: u8,
    protocol_version: u8,
    public_key: PublicKey,
    asset: TradeAsset,
    seed: u64,
    data_info: String,
}

impl BidOfferTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        public_key: PublicKey,
        asset: TradeAsset,
        seed: u64,
        data_info: impl Into<String>,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            public_key,
            asset,
            seed,
            data_info: data_info.into(),
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_field(&self.public_key.dmbc_encode_to_vec());
        w.push_field(&self.asset.dmbc_encode_to_vec());
        w.push_field(&self.seed.dmbc_encode_to_vec());

        w.push_segment(self.data_info.as_bytes());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::BID_OFFER,
            &payload,
            None,
        )
    }
}
