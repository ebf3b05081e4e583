//! Value objects: self-contained encodable units with no segments of
//! their own. Each is a fixed-width struct wrapping a `[u8; N]` or a
//! small tuple of integers.

use crate::codec::{hex_to_bytes, parse_decimal_ratio, DmbcEncode};
use crate::error::Result;

#[cfg(feature = "proptest-impl")]
use proptest_derive::Arbitrary;

macro_rules! fixed_hex_newtype {
    ($name:ident, $len:expr) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
        pub struct $name(pub [u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            /// Parses a `2 * LEN`-character hex string into this type.
            pub fn from_hex(s: &str) -> Result<Self> {
                let bytes = hex_to_bytes(s, $len)?;
                let mut arr = [0u8; $len];
                arr.copy_from_slice(&bytes);
                Ok(Self(arr))
            }

            pub fn as_bytes(&self) -> &[u8; $len] {
                &self.0
            }
        }

        impl DmbcEncode for $name {
            fn dmbc_encode(&self, target: &mut Vec<u8>) {
                self.0.dmbc_encode(target);
            }
        }
    };
}

fixed_hex_newtype!(PublicKey, 32);
fixed_hex_newtype!(Signature, 64);
fixed_hex_newtype!(AssetId, 16);

impl Signature {
    /// The envelope's outer signature slot when no signature was supplied:
    /// 64 zero bytes.
    pub fn zero() -> Self {
        Self([0u8; 64])
    }
}

/// `id:16B || amount:u64`. No segments (24-byte header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
pub struct Asset {
    pub id: AssetId,
    pub amount: u64,
}

impl Asset {
    pub const ENCODED_LEN: usize = AssetId::LEN + 8;
}

impl DmbcEncode for Asset {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.id.dmbc_encode(target);
        self.amount.dmbc_encode(target);
    }
}

/// `id:16B || amount:u64 || price:u64`. No segments (32-byte header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
pub struct TradeAsset {
    pub id: AssetId,
    pub amount: u64,
    pub price: u64,
}

impl TradeAsset {
    pub const ENCODED_LEN: usize = AssetId::LEN + 8 + 8;
}

impl DmbcEncode for TradeAsset {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.id.dmbc_encode(target);
        self.amount.dmbc_encode(target);
        self.price.dmbc_encode(target);
    }
}

/// `fixed:u64 || numerator:u64 || denominator:u64`, derived from a decimal
/// literal by counting fractional digits (24-byte header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
pub struct FeeRatio {
    pub fixed: u64,
    pub num: u64,
    pub den: u64,
}

impl FeeRatio {
    pub const ENCODED_LEN: usize = 24;

    pub fn new(fixed: u64, fraction: &str) -> Result<Self> {
        let (num, den) = parse_decimal_ratio(fraction)?;
        Ok(Self { fixed, num, den })
    }
}

impl DmbcEncode for FeeRatio {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.fixed.dmbc_encode(target);
        self.num.dmbc_encode(target);
        self.den.dmbc_encode(target);
    }
}

/// Three inline [`FeeRatio`]s in order trade, exchange, transfer
/// (72-byte header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
pub struct Fees {
    pub trade: FeeRatio,
    pub exchange: FeeRatio,
    pub transfer: FeeRatio,
}

impl Fees {
    pub const ENCODED_LEN: usize = FeeRatio::ENCODED_LEN * 3;

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        trade_fixed: u64,
        trade_fraction: &str,
        exchange_fixed: u64,
        exchange_fraction: &str,
        transfer_fixed: u64,
        transfer_fraction: &str,
    ) -> Result<Self> {
        Ok(Self {
            trade: FeeRatio::new(trade_fixed, trade_fraction)?,
            exchange: FeeRatio::new(exchange_fixed, exchange_fraction)?,
            transfer: FeeRatio::new(transfer_fixed, transfer_fraction)?,
        })
    }
}

impl DmbcEncode for Fees {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.trade.dmbc_encode(target);
        self.exchange.dmbc_encode(target);
        self.transfer.dmbc_encode(target);
    }
}

/// `wallet:32B || commission:u64` (40-byte header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "proptest-impl", derive(Arbitrary))]
pub struct Intermediary {
    pub wallet: PublicKey,
    pub commission: u64,
}

impl Intermediary {
    pub const ENCODED_LEN: usize = PublicKey::LEN + 8;

    pub fn new(wallet: PublicKey, commission: u64) -> Self {
        Self { wallet, commission }
    }
}

impl DmbcEncode for Intermediary {
    fn dmbc_encode(&self, target: &mut Vec<u8>) {
        self.wallet.dmbc_encode(target);
        self.commission.dmbc_encode(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_encodes_24_bytes() {
        let asset = Asset {
            id: AssetId::from_hex(&"77".repeat(16)).unwrap(),
            amount: 10,
        };
        let out = asset.dmbc_encode_to_vec();
        assert_eq!(out.len(), Asset::ENCODED_LEN);
        assert_eq!(&out[16..24], &10u64.to_le_bytes());
    }

    #[test]
    fn trade_asset_encodes_32_bytes() {
        let asset = TradeAsset {
            id: AssetId([0u8; 16]),
            amount: 10,
            price: 20,
        };
        let out = asset.dmbc_encode_to_vec();
        assert_eq!(out.len(), TradeAsset::ENCODED_LEN);
    }

    #[test]
    fn fee_ratio_matches_scenario_from_spec() {
        let rows = [
            (10u64, "0.1", 10u64, 1u64, 10u64),
            (20, "0.2", 20, 2, 10),
            (9, "0.999999", 9, 999999, 1_000_000),
        ];
        for (fixed, fraction, exp_fixed, exp_num, exp_den) in rows {
            let fr = FeeRatio::new(fixed, fraction).unwrap();
            assert_eq!(fr.fixed, exp_fixed);
            assert_eq!(fr.num, exp_num);
            assert_eq!(fr.den, exp_den);
        }
    }

    #[test]
    fn fees_encode_in_trade_exchange_transfer_order() {
        let fees = Fees::new(10, "0.1", 20, "0.2", 9, "0.999999").unwrap();
        let out = fees.dmbc_encode_to_vec();
        assert_eq!(out.len(), Fees::ENCODED_LEN);
        assert_eq!(&out[0..8], &10u64.to_le_bytes());
        assert_eq!(&out[24..32], &20u64.to_le_bytes());
        assert_eq!(&out[48..56], &9u64.to_le_bytes());
    }

    #[test]
    fn public_key_rejects_short_hex() {
        assert!(PublicKey::from_hex(&"a".repeat(63)).is_err());
    }
}
