//! JSON input schemas, one per transaction kind. Field names are a direct
//! reflection of each transaction's entity fields as defined in
//! `dmbc-chain`.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AssetInput {
    pub id: String,
    pub amount: u64,
}

#[derive(Debug, Deserialize)]
pub struct TradeAssetInput {
    pub id: String,
    pub amount: u64,
    pub price: u64,
}

#[derive(Debug, Deserialize)]
pub struct FeeRatioInput {
    pub fixed: u64,
    pub fraction: String,
}

#[derive(Debug, Deserialize)]
pub struct FeesInput {
    pub trade: FeeRatioInput,
    pub exchange: FeeRatioInput,
    pub transfer: FeeRatioInput,
}

#[derive(Debug, Deserialize)]
pub struct IntermediaryInput {
    pub wallet: String,
    pub commission: u64,
}

#[derive(Debug, Deserialize)]
pub struct AddAssetsAssetInput {
    pub meta_data: String,
    pub amount: u64,
    pub fees: FeesInput,
    pub receiver: String,
}

#[derive(Debug, Deserialize)]
pub struct AddAssetsInput {
    pub public_key: String,
    pub seed: u64,
    pub assets: Vec<AddAssetsAssetInput>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteAssetsInput {
    pub public_key: String,
    pub seed: u64,
    pub assets: Vec<AssetInput>,
}

#[derive(Debug, Deserialize)]
pub struct TransferInput {
    pub from: String,
    pub to: String,
    pub amount: u64,
    pub seed: u64,
    pub memo: String,
    pub assets: Vec<AssetInput>,
}

#[derive(Debug, Deserialize)]
pub struct TransferFeesPayerOfferInput {
    pub from: String,
    pub to: String,
    pub fees_payer: String,
    pub amount: u64,
    pub seed: u64,
    pub data_info: String,
    pub assets: Vec<AssetInput>,
}

#[derive(Debug, Deserialize)]
pub struct TransferFeesPayerInput {
    pub offer: TransferFeesPayerOfferInput,
    pub fees_payer_signature: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeOfferInput {
    pub sender: String,
    pub sender_value: u64,
    pub sender_assets: Vec<AssetInput>,
    pub recipient: String,
    pub recipient_assets: Vec<AssetInput>,
    pub fee_strategy: u8,
    pub seed: u64,
    pub memo: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeInput {
    pub offer: ExchangeOfferInput,
    pub sender_signature: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeOfferIntermediaryInput {
    pub intermediary: IntermediaryInput,
    pub sender: String,
    pub sender_value: u64,
    pub sender_assets: Vec<AssetInput>,
    pub recipient: String,
    pub recipient_assets: Vec<AssetInput>,
    pub fee_strategy: u8,
    pub seed: u64,
    pub memo: String,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeIntermediaryInput {
    pub offer: ExchangeOfferIntermediaryInput,
    pub sender_signature: String,
    pub intermediary_signature: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeOfferInput {
    pub buyer: String,
    pub seller: String,
    pub assets: Vec<TradeAssetInput>,
    pub fee_strategy: u8,
    pub seed: u64,
    pub data_info: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeInput {
    pub offer: TradeOfferInput,
    pub seller_signature: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeOfferIntermediaryInput {
    pub intermediary: IntermediaryInput,
    pub buyer: String,
    pub seller: String,
    pub assets: Vec<TradeAssetInput>,
    pub fee_strategy: u8,
    pub seed: u64,
    pub data_info: String,
}

#[derive(Debug, Deserialize)]
pub struct TradeIntermediaryInput {
    pub offer: TradeOfferIntermediaryInput,
    pub seller_signature: String,
    pub intermediary_signature: String,
}

#[derive(Debug, Deserialize)]
pub struct AskOrBidOfferInput {
    pub public_key: String,
    pub asset: TradeAssetInput,
    pub seed: u64,
    pub data_info: String,
}
