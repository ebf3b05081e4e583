use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::encode_list;
use crate::segment::SegmentWriter;
use crate::value::{Asset, PublicKey};

/// `public_key:32 || S(assets=Asset[]) || seed:u64`.
#[derive(Debug, Clone)]
pub struct DeleteAssetsTx {
    network_id: u8,
    protocol_version: u8,
    public_key: PublicKey,
    seed: u64,
    assets: Vec<Asset>,
}

impl DeleteAssetsTx {
    pub fn new(network_id: u8, protocol_version: u8, public_key: PublicKey, seed: u64) -> Self {
        Self {
            network_id,
            protocol_version,
            public_key,
            seed,
            assets: Vec::new(),
        }
    }

    pub fn add_asset(&mut self, asset: &Asset) {
        self.assets.push(*asset);
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_field(&self.public_key.dmbc_encode_to_vec());
        w.push_segment(&encode_list(&self.assets));
        w.push_field(&self.seed.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::DELETE_ASSETS,
            &payload,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::AssetId;

    #[test]
    fn delete_assets_single_asset_matches_spec_scenario() {
        let mut tx = DeleteAssetsTx::new(1, 1, PublicKey::from_hex(&"11".repeat(32)).unwrap(), 102);
        tx.add_asset(&Asset {
            id: AssetId::from_hex(&format!("{}7777", "00".repeat(14))).unwrap(),
            amount: 10,
        });
        let out = tx.into_bytes();
        assert_eq!(out[2..4], message_type::DELETE_ASSETS.to_le_bytes());
        assert_eq!(&out[out.len() - 64..], &[0u8; 64][..]);
    }
}
