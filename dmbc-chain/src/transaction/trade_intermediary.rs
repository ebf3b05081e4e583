use crate::codec::DmbcEncode;
use crate::envelope::{encode_envelope, message_type};
use crate::offer::TradeOfferIntermediary;
use crate::segment::SegmentWriter;
use crate::value::Signature;

/// `S(offer) || seller_sig:64 || intermediary_sig:64`.
#[derive(Debug, Clone)]
pub struct TradeIntermediaryTx {
    network_id: u8,
    protocol_version: u8,
    offer: TradeOfferIntermediary,
    seller_signature: Signature,
    intermediary_signature: Signature,
}

impl TradeIntermediaryTx {
    pub fn new(
        network_id: u8,
        protocol_version: u8,
        offer: TradeOfferIntermediary,
        seller_signature: Signature,
        intermediary_signature: Signature,
    ) -> Self {
        Self {
            network_id,
            protocol_version,
            offer,
            seller_signature,
            intermediary_signature,
        }
    }

    pub fn into_bytes(&self) -> Vec<u8> {
        let mut w = SegmentWriter::new();

        w.push_segment(&self.offer.encode());
        w.push_field(&self.seller_signature.dmbc_encode_to_vec());
        w.push_field(&self.intermediary_signature.dmbc_encode_to_vec());

        let payload = w.finish();
        encode_envelope(
            self.network_id,
            self.protocol_version,
            message_type::TRADE_INTERMEDIARY,
            &payload,
            None,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{AssetId, Intermediary, PublicKey, TradeAsset};

    #[test]
    fn reordering_asset_insertion_changes_only_assets_region() {
        let mk_offer = |swap: bool| {
            let mut offer = TradeOfferIntermediary::new(
                Intermediary::new(PublicKey([0x22; 32]), 888),
                PublicKey([0x11; 32]),
                PublicKey([0x33; 32]),
                2,
                5,
                "info",
            )
            .unwrap();
            let a = TradeAsset { id: AssetId([1; 16]), amount: 1, price: 10 };
            let b = TradeAsset { id: AssetId([2; 16]), amount: 2, price: 20 };
            if swap {
                offer.add_asset(&b);
                offer.add_asset(&a);
            } else {
                offer.add_asset(&a);
                offer.add_asset(&b);
            }
            offer
        };

        let tx1 = TradeIntermediaryTx::new(1, 1, mk_offer(false), Signature([0; 64]), Signature([0; 64]));
        let tx2 = TradeIntermediaryTx::new(1, 1, mk_offer(true), Signature([0; 64]), Signature([0; 64]));

        assert_ne!(tx1.into_bytes(), tx2.into_bytes());
        assert_eq!(tx1.into_bytes()[2..4], message_type::TRADE_INTERMEDIARY.to_le_bytes());
    }
}
