//! Offer objects: composite encodables attached to offer-bearing
//! transactions (exchange, trade, transfer-fees-payer). Each offer is a
//! small state machine in the **Open** state: the mandatory
//! fixed fields are supplied at construction, assets are attached one at a
//! time via `add_*_asset`, and `encode` is a pure read that may be called
//! any number of times.

mod exchange_offer;
mod exchange_offer_intermediary;
mod trade_offer;
mod trade_offer_intermediary;
mod transfer_fees_payer_offer;

pub use exchange_offer::ExchangeOffer;
pub use exchange_offer_intermediary::ExchangeOfferIntermediary;
pub use trade_offer::TradeOffer;
pub use trade_offer_intermediary::TradeOfferIntermediary;
pub use transfer_fees_payer_offer::TransferFeesPayerOffer;

use crate::codec::DmbcEncode;
use crate::error::{DmbcError, Result};

/// Named fee-strategy values, matching the platform's
/// `FEE_STRATEGY_*` constants one-to-one.
pub mod fee_strategy {
    pub const RECIPIENT: u8 = 1;
    pub const SENDER: u8 = 2;
    pub const BOTH: u8 = 3;
    pub const INTERMEDIARY: u8 = 4;
}

/// Validates that `strategy` is one of the four named values.
pub fn validate_fee_strategy(strategy: u8) -> Result<u8> {
    match strategy {
        fee_strategy::RECIPIENT
        | fee_strategy::SENDER
        | fee_strategy::BOTH
        | fee_strategy::INTERMEDIARY => Ok(strategy),
        other => Err(DmbcError::InvalidFeeStrategy(format!(
            "{} is not in {{1,2,3,4}}",
            other
        ))),
    }
}

/// Concatenates the encodings of `items` in insertion order — used to
/// build the payload referenced by an asset-list segment pointer. No
/// sorting is ever performed; insertion order is on-wire order.
pub(crate) fn encode_list<T: DmbcEncode>(items: &[T]) -> Vec<u8> {
    let mut out = Vec::new();
    for item in items {
        item.dmbc_encode(&mut out);
    }
    out
}
