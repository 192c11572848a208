//! Spread and chain types as delivered by the spread scanner

use serde::{Deserialize, Serialize};

/// Deposit/withdraw availability of one network for an asset.
///
/// Wire names are camelCase; records are stored and served with snake_case names.
/// Unknown wire fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chain {
    pub chain: String,
    #[serde(rename(deserialize = "depositEnabled"), alias = "deposit_enabled")]
    pub deposit_enabled: bool,
    #[serde(rename(deserialize = "withdrawEnabled"), alias = "withdraw_enabled")]
    pub withdraw_enabled: bool,
    #[serde(rename(deserialize = "withdrawFee"), alias = "withdraw_fee")]
    pub withdraw_fee: f64,
    #[serde(rename(deserialize = "minConfirm"), alias = "min_confirm")]
    pub min_confirm: i64,
}

/// One arbitrage opportunity snapshot between a buy and a sell exchange.
///
/// Funding fields are optional on the wire since spot instruments carry no funding;
/// they default to zero. Every other field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spread {
    #[serde(rename(deserialize = "profitIndexMax"), alias = "profit_index_max")]
    pub profit_index_max: f64,
    #[serde(rename(deserialize = "profitIndexMin"), alias = "profit_index_min")]
    pub profit_index_min: f64,
    #[serde(rename(deserialize = "profitIndexAvg"), alias = "profit_index_avg")]
    pub profit_index_avg: f64,
    pub volume: f64,
    #[serde(rename(deserialize = "buyPriceMin"), alias = "buy_price_min")]
    pub buy_price_min: f64,
    #[serde(rename(deserialize = "buyPriceMax"), alias = "buy_price_max")]
    pub buy_price_max: f64,
    #[serde(rename(deserialize = "buyPriceAvg"), alias = "buy_price_avg")]
    pub buy_price_avg: f64,
    #[serde(rename(deserialize = "sellPriceMin"), alias = "sell_price_min")]
    pub sell_price_min: f64,
    #[serde(rename(deserialize = "sellPriceMax"), alias = "sell_price_max")]
    pub sell_price_max: f64,
    #[serde(rename(deserialize = "sellPriceAvg"), alias = "sell_price_avg")]
    pub sell_price_avg: f64,
    #[serde(rename(deserialize = "exchangeBuy"), alias = "exchange_buy")]
    pub exchange_buy: String,
    #[serde(rename(deserialize = "exchangeSell"), alias = "exchange_sell")]
    pub exchange_sell: String,
    pub symbol: String,
    #[serde(
        rename(deserialize = "buyExchangeFundingProfitModifier"),
        alias = "buy_exchange_funding_rate",
        default
    )]
    pub buy_exchange_funding_rate: f64,
    #[serde(
        rename(deserialize = "sellExchangeFundingProfitModifier"),
        alias = "sell_exchange_funding_rate",
        default
    )]
    pub sell_exchange_funding_rate: f64,
    #[serde(
        rename(deserialize = "buyExchangeNextFundingTime"),
        alias = "buy_exchange_next_funding_apply_time",
        default
    )]
    pub buy_exchange_next_funding_apply_time: i64,
    #[serde(
        rename(deserialize = "sellExchangeNextFundingTime"),
        alias = "sell_exchange_next_funding_apply_time",
        default
    )]
    pub sell_exchange_next_funding_apply_time: i64,
    #[serde(rename(deserialize = "overallProfitIndexMax"), alias = "overall_profit_index_max")]
    pub overall_profit_index_max: f64,
    #[serde(rename(deserialize = "overallProfitIndexMin"), alias = "overall_profit_index_min")]
    pub overall_profit_index_min: f64,
    #[serde(rename(deserialize = "overallProfitIndexAvg"), alias = "overall_profit_index_avg")]
    pub overall_profit_index_avg: f64,
    #[serde(rename(deserialize = "originalSymbol"), alias = "original_symbol")]
    pub original_symbol: String,
    #[serde(rename(deserialize = "volumeUsd"), alias = "volume_usd")]
    pub volume_usd: f64,
    pub lifetime: i64,
    #[serde(rename(deserialize = "chainsBuy"), alias = "chains_buy", default)]
    pub chains_buy: Vec<Chain>,
    #[serde(rename(deserialize = "chainsSell"), alias = "chains_sell", default)]
    pub chains_sell: Vec<Chain>,
    pub updated: i64,
    #[serde(rename(deserialize = "isFutures"), alias = "is_futures")]
    pub is_futures: bool,
}

/// Expected JSON kind of a wire field, used to attribute deserialization failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Float,
    Integer,
    Text,
    Flag,
    ChainList,
}

/// Wire name, snake_case name, kind and whether the field may be omitted.
pub type FieldSpec = (&'static str, &'static str, FieldKind, bool);

pub const SPREAD_FIELDS: &[FieldSpec] = &[
    ("profitIndexMax", "profit_index_max", FieldKind::Float, false),
    ("profitIndexMin", "profit_index_min", FieldKind::Float, false),
    ("profitIndexAvg", "profit_index_avg", FieldKind::Float, false),
    ("volume", "volume", FieldKind::Float, false),
    ("buyPriceMin", "buy_price_min", FieldKind::Float, false),
    ("buyPriceMax", "buy_price_max", FieldKind::Float, false),
    ("buyPriceAvg", "buy_price_avg", FieldKind::Float, false),
    ("sellPriceMin", "sell_price_min", FieldKind::Float, false),
    ("sellPriceMax", "sell_price_max", FieldKind::Float, false),
    ("sellPriceAvg", "sell_price_avg", FieldKind::Float, false),
    ("exchangeBuy", "exchange_buy", FieldKind::Text, false),
    ("exchangeSell", "exchange_sell", FieldKind::Text, false),
    ("symbol", "symbol", FieldKind::Text, false),
    ("buyExchangeFundingProfitModifier", "buy_exchange_funding_rate", FieldKind::Float, true),
    ("sellExchangeFundingProfitModifier", "sell_exchange_funding_rate", FieldKind::Float, true),
    ("buyExchangeNextFundingTime", "buy_exchange_next_funding_apply_time", FieldKind::Integer, true),
    ("sellExchangeNextFundingTime", "sell_exchange_next_funding_apply_time", FieldKind::Integer, true),
    ("overallProfitIndexMax", "overall_profit_index_max", FieldKind::Float, false),
    ("overallProfitIndexMin", "overall_profit_index_min", FieldKind::Float, false),
    ("overallProfitIndexAvg", "overall_profit_index_avg", FieldKind::Float, false),
    ("originalSymbol", "original_symbol", FieldKind::Text, false),
    ("volumeUsd", "volume_usd", FieldKind::Float, false),
    ("lifetime", "lifetime", FieldKind::Integer, false),
    ("chainsBuy", "chains_buy", FieldKind::ChainList, true),
    ("chainsSell", "chains_sell", FieldKind::ChainList, true),
    ("updated", "updated", FieldKind::Integer, false),
    ("isFutures", "is_futures", FieldKind::Flag, false),
];

pub const CHAIN_FIELDS: &[FieldSpec] = &[
    ("chain", "chain", FieldKind::Text, false),
    ("depositEnabled", "deposit_enabled", FieldKind::Flag, false),
    ("withdrawEnabled", "withdraw_enabled", FieldKind::Flag, false),
    ("withdrawFee", "withdraw_fee", FieldKind::Float, false),
    ("minConfirm", "min_confirm", FieldKind::Integer, false),
];
