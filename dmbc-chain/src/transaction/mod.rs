//! The ten transaction kinds, each wrapping its payload in the
//! shared [`crate::envelope`] framing. Every builder is in the **Open**
//! state machine: mandatory fields at construction,
//! `add_*`/attach mutators that validate eagerly, and a pure `into_bytes`
//! that may be called repeatedly without consuming or freezing the
//! builder.

mod add_assets;
mod ask_offer;
mod bid_offer;
mod delete_assets;
mod exchange;
mod exchange_intermediary;
mod trade;
mod trade_intermediary;
mod transfer;
mod transfer_fees_payer;

pub use add_assets::{AddAssetsItem, AddAssetsTx};
pub use ask_offer::AskOfferTx;
pub use bid_offer::BidOfferTx;
pub use delete_assets::DeleteAssetsTx;
pub use exchange::ExchangeTx;
pub use exchange_intermediary::ExchangeIntermediaryTx;
pub use trade::TradeTx;
pub use trade_intermediary::TradeIntermediaryTx;
pub use transfer::TransferTx;
pub use transfer_fees_payer::TransferFeesPayerTx;
