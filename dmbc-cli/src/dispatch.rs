//! Converts a parsed JSON input into the matching `dmbc-chain` transaction
//! builder and returns the encoded bytes. One function per kind, kept
//! deliberately thin — all the real encoding work happens in
//! `dmbc-chain`.

use dmbc_chain::offer::{
    ExchangeOffer, ExchangeOfferIntermediary, TradeOffer, TradeOfferIntermediary,
    TransferFeesPayerOffer,
};
use dmbc_chain::transaction::{
    AddAssetsItem, AddAssetsTx, AskOfferTx, BidOfferTx, DeleteAssetsTx, ExchangeIntermediaryTx,
    ExchangeTx, TradeIntermediaryTx, TradeTx, TransferFeesPayerTx, TransferTx,
};
use dmbc_chain::value::{Asset, AssetId, Fees, Intermediary, PublicKey, Signature, TradeAsset};
use dmbc_chain::Result as ChainResult;

use crate::error::CliError;
use crate::input::*;

/// Every builder on this crate's public surface is constructed against a
/// fixed `network_id`/`protocol_version` pair; the driver uses the values
/// below since the input JSON schema (mirroring each transaction's entity
/// fields) does not carry them.
const NETWORK_ID: u8 = 0;
const PROTOCOL_VERSION: u8 = 0;

fn asset(input: &AssetInput) -> ChainResult<Asset> {
    Ok(Asset {
        id: AssetId::from_hex(&input.id)?,
        amount: input.amount,
    })
}

fn trade_asset(input: &TradeAssetInput) -> ChainResult<TradeAsset> {
    Ok(TradeAsset {
        id: AssetId::from_hex(&input.id)?,
        amount: input.amount,
        price: input.price,
    })
}

fn fees(input: &FeesInput) -> ChainResult<Fees> {
    Fees::new(
        input.trade.fixed,
        &input.trade.fraction,
        input.exchange.fixed,
        &input.exchange.fraction,
        input.transfer.fixed,
        &input.transfer.fraction,
    )
}

fn intermediary(input: &IntermediaryInput) -> ChainResult<Intermediary> {
    Ok(Intermediary::new(
        PublicKey::from_hex(&input.wallet)?,
        input.commission,
    ))
}

pub fn add_assets(input: AddAssetsInput) -> Result<Vec<u8>, CliError> {
    let public_key = PublicKey::from_hex(&input.public_key)?;
    let mut tx = AddAssetsTx::new(NETWORK_ID, PROTOCOL_VERSION, public_key, input.seed);
    for a in &input.assets {
        tx.add_asset(AddAssetsItem {
            meta_data: a.meta_data.clone(),
            amount: a.amount,
            fees: fees(&a.fees)?,
            receiver: PublicKey::from_hex(&a.receiver)?,
        });
    }
    Ok(tx.into_bytes())
}

pub fn delete_assets(input: DeleteAssetsInput) -> Result<Vec<u8>, CliError> {
    let public_key = PublicKey::from_hex(&input.public_key)?;
    let mut tx = DeleteAssetsTx::new(NETWORK_ID, PROTOCOL_VERSION, public_key, input.seed);
    for a in &input.assets {
        tx.add_asset(&asset(a)?);
    }
    Ok(tx.into_bytes())
}

pub fn transfer(input: TransferInput) -> Result<Vec<u8>, CliError> {
    let from = PublicKey::from_hex(&input.from)?;
    let to = PublicKey::from_hex(&input.to)?;
    let mut tx = TransferTx::new(
        NETWORK_ID,
        PROTOCOL_VERSION,
        from,
        to,
        input.amount,
        input.seed,
        input.memo,
    );
    for a in &input.assets {
        tx.add_asset(&asset(a)?);
    }
    Ok(tx.into_bytes())
}

pub fn transfer_fees_payer(input: TransferFeesPayerInput) -> Result<Vec<u8>, CliError> {
    let o = &input.offer;
    let mut offer = TransferFeesPayerOffer::new(
        PublicKey::from_hex(&o.from)?,
        PublicKey::from_hex(&o.to)?,
        PublicKey::from_hex(&o.fees_payer)?,
        o.amount,
        o.seed,
        o.data_info.clone(),
    );
    for a in &o.assets {
        offer.add_asset(&asset(a)?);
    }
    let signature = Signature::from_hex(&input.fees_payer_signature)?;
    let tx = TransferFeesPayerTx::new(NETWORK_ID, PROTOCOL_VERSION, offer, signature);
    Ok(tx.into_bytes())
}

pub fn exchange(input: ExchangeInput) -> Result<Vec<u8>, CliError> {
    let o = &input.offer;
    let mut offer = ExchangeOffer::new(
        PublicKey::from_hex(&o.sender)?,
        o.sender_value,
        PublicKey::from_hex(&o.recipient)?,
        o.fee_strategy,
        o.seed,
        o.memo.clone(),
    )?;
    for a in &o.sender_assets {
        offer.add_sender_asset(&asset(a)?);
    }
    for a in &o.recipient_assets {
        offer.add_recipient_asset(&asset(a)?);
    }
    let signature = Signature::from_hex(&input.sender_signature)?;
    let tx = ExchangeTx::new(NETWORK_ID, PROTOCOL_VERSION, offer, signature);
    Ok(tx.into_bytes())
}

pub fn exchange_intermediary(input: ExchangeIntermediaryInput) -> Result<Vec<u8>, CliError> {
    let o = &input.offer;
    let mut offer = ExchangeOfferIntermediary::new(
        intermediary(&o.intermediary)?,
        PublicKey::from_hex(&o.sender)?,
        o.sender_value,
        PublicKey::from_hex(&o.recipient)?,
        o.fee_strategy,
        o.seed,
        o.memo.clone(),
    )?;
    for a in &o.sender_assets {
        offer.add_sender_asset(&asset(a)?);
    }
    for a in &o.recipient_assets {
        offer.add_recipient_asset(&asset(a)?);
    }
    let sender_signature = Signature::from_hex(&input.sender_signature)?;
    let intermediary_signature = Signature::from_hex(&input.intermediary_signature)?;
    let tx = ExchangeIntermediaryTx::new(
        NETWORK_ID,
        PROTOCOL_VERSION,
        offer,
        sender_signature,
        intermediary_signature,
    );
    Ok(tx.into_bytes())
}

pub fn trade(input: TradeInput) -> Result<Vec<u8>, CliError> {
    let o = &input.offer;
    let mut offer = TradeOffer::new(
        PublicKey::from_hex(&o.buyer)?,
        PublicKey::from_hex(&o.seller)?,
        o.fee_strategy,
        o.seed,
        o.data_info.clone(),
    )?;
    for a in &o.assets {
        offer.add_asset(&trade_asset(a)?);
    }
    let signature = Signature::from_hex(&input.seller_signature)?;
    let tx = TradeTx::new(NETWORK_ID, PROTOCOL_VERSION, offer, signature);
    Ok(tx.into_bytes())
}

pub fn trade_intermediary(input: TradeIntermediaryInput) -> Result<Vec<u8>, CliError> {
    let o = &input.offer;
    let mut offer = TradeOfferIntermediary::new(
        intermediary(&o.intermediary)?,
        PublicKey::from_hex(&o.buyer)?,
        PublicKey::from_hex(&o.seller)?,
        o.fee_strategy,
        o.seed,
        o.data_info.clone(),
    )?;
    for a in &o.assets {
        offer.add_asset(&trade_asset(a)?);
    }
    let seller_signature = Signature::from_hex(&input.seller_signature)?;
    let intermediary_signature = Signature::from_hex(&input.intermediary_signature)?;
    let tx = TradeIntermediaryTx::new(
        NETWORK_ID,
        PROTOCOL_VERSION,
        offer,
        seller_signature,
        intermediary_signature,
    );
    Ok(tx.into_bytes())
}

pub fn ask_offer(input: AskOrBidOfferInput) -> Result<Vec<u8>, CliError> {
    let public_key = PublicKey::from_hex(&input.public_key)?;
    let asset = trade_asset(&input.asset)?;
    let tx = AskOfferTx::new(
        NETWORK_ID,
        PROTOCOL_VERSION,
        public_key,
        asset,
        input.seed,
        input.data_info,
    );
    Ok(tx.into_bytes())
}

pub fn bid_offer(input: AskOrBidOfferInput) -> Result<Vec<u8>, CliError> {
    let public_key = PublicKey::from_hex(&input.public_key)?;
    let asset = trade_asset(&input.asset)?;
    let tx = BidOfferTx::new(
        NETWORK_ID,
        PROTOCOL_VERSION,
        public_key,
        asset,
        input.seed,
        input.data_info,
    );
    Ok(tx.into_bytes())
}
