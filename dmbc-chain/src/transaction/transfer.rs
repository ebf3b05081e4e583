use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::encode_list;
use crate::segment::SegmentWriter;
use crate::value::{Asset, PublicKey};

/// `from:32 || to:32 || amount:u64 || S(assets=Asset[]) || seed:u64 ||
/// S(memo)`.
#[derive(Debug, Clone)]
pub struct TransferTx {
    network_id: u8,
    protocol_version: u8,
    from: PublicKey,
    to: PublicKey,
    amount: u64,
    seed: u64,
    memo: String,
    assets: Vec<Asset>,
}

impl TransferTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        from: PublicKey,
        to: PublicKey,
        amount: u64,
        seed: u64,
        memo: impl Into<String>,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            from,
            to,
            amount,
            seed,
            memo: memo.into(),
            assets: Vec::new(),
        }
    }

    pub fn add_asset(&mut self, asset: &Asset) {
        self.assets.push(*asset);
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_field(&self.from.dmbc_encode_to_vec());
        w.push_field(&self.to.dmbc_encode_to_vec());
        w.push_field(&self.amount.dmbc_encode_to_vec());

        w.push_segment(&encode_list(&self.assets));

        w.push_field(&self.seed.dmbc_encode_to_vec());

        w.push_segment(self.memo.as_bytes());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::TRANSFER,
            &payload,
            None,
        )
    }
}
