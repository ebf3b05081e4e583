use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::segment::SegmentWriter;
use crate::value::{Fees, PublicKey};

/// One entry of an `AddAssets` transaction's asset list:
/// `S(meta_data) || amount:u64 || S(fees=72B) || receiver:32`.
#[derive(Debug, Clone)]
pub struct AddAssetsItem {
    pub meta_data: String,
    pub amount: u64,
    pub fees: Fees,
    pub receiver: PublicKey,
}

impl AddAssetsItem {
    fn encode(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(self.meta_data.as_bytes());

        w.push_field(&self.amount.dmbc_encode_to_vec());

        w.push_segment(&self.fees.dmbc_encode_to_vec());

        w.push_field(&self.receiver.dmbc_encode_to_vec());

        w.finish()
    }
}

/// `public_key:32 || S(assets) || seed:u64`.
#[derive(Debug, Clone)]
pub struct AddAssetsTx {
    network_id: u8,
    protocol_version: u8,
    public_key: PublicKey,
    seed: u64,
    assets: Vec<AddAssetsItem>,
}

impl AddAssetsTx {
    pub fn new(network_id: u8, protocol_version: u8, public_key: PublicKey, seed: u64) -> Self {
        Self {
            network_id,
            protocol_version,
            public_key,
            seed,
            assets: Vec::new(),
        }
    }

    pub fn add_asset(&mut self, item: AddAssetsItem) {
        self.assets.push(item);
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_field(&self.public_key.dmbc_encode_to_vec());

        let mut assets_payload = Vec::new();
        for asset in &self.assets {
            assets_payload.extend_from_slice(&asset.encode());
        }
        w.push_segment(&assets_payload);

        w.push_field(&self.seed.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::ADD_ASSETS,
            &payload,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::{HEADER_SIZE, SIGNATURE_SIZE};

    #[test]
    fn add_assets_with_two_assets_matches_spec_scenario() {
        let public_key = PublicKey::from_hex(&"11".repeat(32)).unwrap();
        let fees = Fees::new(10, "0.1", 20, "0.2", 9, "0.999999").unwrap();

        let mut tx = AddAssetsTx::new(1, 1, public_key, 102);
        tx.add_asset(AddAssetsItem {
            meta_data: "Asset#10".to_string(),
            amount: 10,
            fees,
            receiver: PublicKey([0x44; 32]),
        });
        tx.add_asset(AddAssetsItem {
            meta_data: "Asset#00".to_string(),
            amount: 1000,
            fees,
            receiver: PublicKey([0x55; 32]),
        });

        let out = tx.into_bytes();
        assert_eq!(out[2..4], message_type::ADD_ASSETS.to_le_bytes());
        assert_eq!(&out[out.len() - 64..], &[0u8; 64][..]);

        let declared_len = u32::from_le_bytes(out[6..10].try_into().unwrap()) as usize;
        assert_eq!(declared_len, out.len() - HEADER_SIZE - SIGNATURE_SIZE);
    }

    #[test]
    fn payload_length_field_matches_property() {
        let tx = AddAssetsTx::new(1, 1, PublicKey([0u8; 32]), 1);
        let out = tx.into_bytes();
        let declared = u32::from_le_bytes(out[6..10].try_into().unwrap()) as usize;
        assert_eq!(declared, out.len() - HEADER_SIZE - SIGNATURE_SIZE);
    }
}
