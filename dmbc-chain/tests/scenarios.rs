//! End-to-end scenarios covering every transaction kind, exercised
//! against the public builder API the way a caller would use it.

use dmbc_chain::envelope::{message_type, HEADER_SIZE, SIGNATURE_SIZE};
use dmbc_chain::offer::{ExchangeOfferIntermediary, TradeOfferIntermediary};
use dmbc_chain::transaction::{
    AddAssetsItem, AddAssetsTx, DeleteAssetsTx, ExchangeIntermediaryTx, TradeIntermediaryTx,
    TransferTx,
};
use dmbc_chain::value::{Asset, AssetId, Fees, Intermediary, PublicKey, Signature, TradeAsset};

fn repeated_key(byte: u8) -> PublicKey {
    PublicKey([byte; 32])
}

#[test]
fn scenario_1_minimal_transfer() {
    let from = repeated_key(0x4e);
    let to = PublicKey([0u8; 32]);
    let asset = Asset {
        id: AssetId::from_hex(&format!("{}7777", "00".repeat(14))).unwrap(),
        amount: 10,
    };

    let mut tx = TransferTx::new(1, 1, from, to, 10_000_000, 123, "HELLO");
    tx.add_asset(&asset);

    let out = tx.into_bytes();
    assert_eq!(out[2..4], message_type::TRANSFER.to_le_bytes());
    let declared_len = u32::from_le_bytes(out[6..10].try_into().unwrap()) as usize;
    assert_eq!(declared_len, out.len() - HEADER_SIZE - SIGNATURE_SIZE);
    assert_eq!(&out[out.len() - SIGNATURE_SIZE..], &[0u8; SIGNATURE_SIZE][..]);

    // Golden vector: a byte-level regression in the segment engine (an
    // offset off by one, a field reordered) changes this hex even when
    // message_type/payload_length/signature all still check out above.
    let golden = "0101c80002007d0000004e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e4e0000000000000000000000000000000000000000000000000000000000000000809698000000000060000000180000007b000000000000007800000005000000000000000000000000000000000077770a0000000000000048454c4c4f00000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    assert_eq!(hex::encode(&out), golden);
}

#[test]
fn scenario_2_add_assets_two_assets_shared_fee_schedule() {
    let public_key = repeated_key(0xb9);
    let fees = Fees::new(10, "0.1", 20, "0.2", 9, "0.999999").unwrap();
    assert_eq!(fees.trade, dmbc_chain::value::FeeRatio { fixed: 10, num: 1, den: 10 });
    assert_eq!(fees.exchange, dmbc_chain::value::FeeRatio { fixed: 20, num: 2, den: 10 });
    assert_eq!(
        fees.transfer,
        dmbc_chain::value::FeeRatio { fixed: 9, num: 999999, den: 1_000_000 }
    );

    let mut tx = AddAssetsTx::new(1, 1, public_key, 102);
    tx.add_asset(AddAssetsItem {
        meta_data: "Asset#10".to_string(),
        amount: 10,
        fees,
        receiver: repeated_key(0x01),
    });
    tx.add_asset(AddAssetsItem {
        meta_data: "Asset#00".to_string(),
        amount: 1000,
        fees,
        receiver: repeated_key(0x02),
    });

    let out = tx.into_bytes();
    assert_eq!(out[2..4], message_type::ADD_ASSETS.to_le_bytes());
}

#[test]
fn scenario_3_delete_assets_single_asset() {
    let mut tx = DeleteAssetsTx::new(1, 1, repeated_key(0xb9), 102);
    tx.add_asset(&Asset {
        id: AssetId::from_hex(&format!("{}7777", "00".repeat(14))).unwrap(),
        amount: 10,
    });
    let out = tx.into_bytes();
    assert_eq!(out[2..4], message_type::DELETE_ASSETS.to_le_bytes());

    let golden = "01019001020048000000b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b9b930000000180000006600000000000000000000000000000000000000000077770a0000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000";
    assert_eq!(hex::encode(&out), golden);
}

#[test]
fn scenario_4_exchange_intermediary() {
    let mut offer = ExchangeOfferIntermediary::new(
        Intermediary::new(repeated_key(0x22), 888),
        repeated_key(0xb9),
        10_000,
        repeated_key(0x44),
        1,
        0,
        "EXCHANGE_i",
    )
    .unwrap();
    offer.add_recipient_asset(&Asset { id: AssetId([0x77; 16]), amount: 1 });

    let tx = ExchangeIntermediaryTx::new(1, 1, offer, Signature([0xAA; 64]), Signature([0xBB; 64]));
    let out = tx.into_bytes();
    assert_eq!(out[2..4], message_type::EXCHANGE_INTERMEDIARY.to_le_bytes());

    let payload_len = out.len() - HEADER_SIZE - SIGNATURE_SIZE;
    // payload = segptr(offer) || sender_sig || intermediary_sig
    assert!(payload_len >= 8 + 64 + 64);
}

#[test]
fn scenario_5_trade_intermediary_reordering_changes_only_assets_region() {
    let mk_offer = |swap: bool| {
        let mut offer = TradeOfferIntermediary::new(
            Intermediary::new(repeated_key(0x22), 888),
            repeated_key(0x11),
            repeated_key(0x33),
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
}

#[test]
fn scenario_6_invalid_hex_rejected() {
    let result = PublicKey::from_hex(&"a".repeat(63));
    assert!(result.is_err());
    assert!(!result.unwrap_err().to_string().is_empty());
}

#[test]
fn determinism_across_repeated_calls() {
    let mut tx = DeleteAssetsTx::new(1, 1, repeated_key(0xb9), 102);
    tx.add_asset(&Asset { id: AssetId([0x77; 16]), amount: 10 });
    assert_eq!(tx.into_bytes(), tx.into_bytes());
}
