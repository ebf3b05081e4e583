use crate::codec::DmbcEncode;
use crate::error::Result;
use crate::offer::{encode_list, validate_fee_strategy};
use crate::segment::SegmentWriter;
use crate::value::{Intermediary, PublicKey, TradeAsset};

/// `S(intermediary) || buyer:32 || seller:32 || S(assets) ||
/// fee_strategy:u8 || seed:u64 || S(data_info)`.
#[derive(Debug, Clone)]
pub struct TradeOfferIntermediary {
    intermediary: Intermediary,
    buyer: PublicKey,
    seller: PublicKey,
    assets: Vec<TradeAsset>,
    fee_strategy: u8,
    seed: u64,
    data_info: String,
}

impl TradeOfferIntermediary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        intermediary: Intermediary,
        buyer: PublicKey,
        seller: PublicKey,
        fee_strategy: u8,
        seed: u64,
        data_info: impl Into<String>,
    ) -> Result<Self> {
        let fee_strategy = validate_fee_strategy(fee_strategy)?;
        Ok(Self {
            intermediary,
            buyer,
            seller,
            assets: Vec::new(),
            fee_strategy,
            seed,
            data_info: data_info.into(),
        })
    }

    pub fn add_asset(&mut self, asset: &TradeAsset) {
        self.assets.push(*asset);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.intermediary.dmbc_encode_to_vec());

        w.push_field(&self.buyer.dmbc_encode_to_vec());
        w.push_field(&self.seller.dmbc_encode_to_vec());
        w.push_segment(&encode_list(&self.assets));

        w.push_field(&self.fee_strategy.dmbc_encode_to_vec());
        w.push_field(&self.seed.dmbc_encode_to_vec());
        w.push_segment(self.data_info.as_bytes());

        w.finish()
    }
}
