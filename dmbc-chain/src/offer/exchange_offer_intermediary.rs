use crate::codec::DmbcEncode;
use crate::error::Result;
use crate::offer::{encode_list, validate_fee_strategy};
use crate::segment::SegmentWriter;
use crate::value::{Asset, Intermediary, PublicKey};

/// `S(intermediary) || sender:32 || sender_value:u64 || S(sender_assets) ||
/// recipient:32 || S(recipient_assets) || fee_strategy:u8 || seed:u64 ||
/// S(memo)`.
#[derive(Debug, Clone)]
pub struct ExchangeOfferIntermediary {
    intermediary: Intermediary,
    sender: PublicKey,
    sender_value: u64,
    sender_assets: Vec<Asset>,
    recipient: PublicKey,
    recipient_assets: Vec<Asset>,
    fee_strategy: u8,
    seed: u64,
    memo: String,
}

impl ExchangeOfferIntermediary {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        intermediary: Intermediary,
        sender: PublicKey,
        sender_value: u64,
        recipient: PublicKey,
        fee_strategy: u8,
        seed: u64,
        memo: impl Into<String>,
    ) -> Result<Self> {
        let fee_strategy = validate_fee_strategy(fee_strategy)?;
        Ok(Self {
            intermediary,
            sender,
            sender_value,
            sender_assets: Vec::new(),
            recipient,
            recipient_assets: Vec::new(),
            fee_strategy,
            seed,
            memo: memo.into(),
        })
    }

    pub fn add_sender_asset(&mut self, asset: &Asset) {
        self.sender_assets.push(*asset);
    }

    pub fn add_recipient_asset(&mut self, asset: &Asset) {
        self.recipient_assets.push(*asset);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.intermediary.dmbc_encode_to_vec());

        w.push_field(&self.sender.dmbc_encode_to_vec());
        w.push_field(&self.sender_value.dmbc_encode_to_vec());
        w.push_segment(&encode_list(&self.sender_assets));

        w.push_field(&self.recipient.dmbc_encode_to_vec());
        w.push_segment(&encode_list(&self.recipient_assets));

        w.push_field(&self.fee_strategy.dmbc_encode_to_vec());
        w.push_field(&self.seed.dmbc_encode_to_vec());
        w.push_segment(self.memo.as_bytes());

        w.finish()
    }
}
