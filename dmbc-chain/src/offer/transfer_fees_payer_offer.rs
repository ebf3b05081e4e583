use crate::codec::DmbcEncode;
use crate::offer::encode_list;
use crate::segment::SegmentWriter;
use crate::value::{Asset, PublicKey};

/// `from:32 || to:32 || fees_payer:32 || amount:u64 || S(assets) ||
/// seed:u64 || S(data_info)`.
#[derive(Debug, Clone)]
pub struct TransferFeesPayerOffer {
    from: PublicKey,
    to: PublicKey,
    fees_payer: PublicKey,
    amount: u64,
    assets: Vec<Asset>,
    seed: u64,
    data_info: String,
}

impl TransferFeesPayerOffer {
    pub fn new(
        from: PublicKey,
        to: PublicKey,
        fees_payer: PublicKey,
        amount: u64,
        seed: u64,
        data_info: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            fees_payer,
            amount,
            assets: Vec::new(),
            seed,
            data_info: data_info.into(),
        }
    }

    pub fn add_asset(&mut self, asset: &Asset) {
        self.assets.push(*asset);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_field(&self.from.dmbc_encode_to_vec());
        w.push_field(&self.to.dmbc_encode_to_vec());
        w.push_field(&self.fees_payer.dmbc_encode_to_vec());
        w.push_field(&self.amount.dmbc_encode_to_vec());
        w.push_segment(&encode_list(&self.assets));

        w.push_field(&self.seed.dmbc_encode_to_vec());
        w.push_segment(self.data_info.as_bytes());

        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AssetId;

    #[test]
    fn fixed_header_layout_matches_schema() {
        let mut offer = TransferFeesPayerOffer::new(
            PublicKey([1; 32]),
            PublicKey([2; 32]),
            PublicKey([3; 32]),
            500,
            42,
            "info",
        );
        offer.add_asset(&Asset { id: AssetId([9; 16]), amount: 1 });
        let out = offer.encode();
        assert_eq!(&out[0..32], &[1u8; 32]);
        assert_eq!(&out[32..64], &[2u8; 32]);
        assert_eq!(&out[64..96], &[3u8; 32]);
        assert_eq!(&out[96..104], &500u64.to_le_bytes());
    }
}
