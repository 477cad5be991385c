use serde::Deserialize;
use strum_macros::Display;

/// One historical trade as the backend reports it. Read-only on the client;
/// the server owns ordering.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Trade {
    pub id: i64,
    pub pair: String,
    pub amount: String,
    #[serde(rename = "type")]
    pub direction: TradeDirection,
    pub percentage: String,
    pub status: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TradeDirection {
    #[serde(rename = "BUY", alias = "Buy", alias = "buy")]
    Buy,
    #[serde(rename = "SELL", alias = "Sell", alias = "sell")]
    Sell,
}

impl TradeDirection {
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_backend_payload() {
        let json = r#"[
            {"id": 1, "pair": "BTC/USD", "amount": "0.5 BTC", "type": "BUY",
             "percentage": "+2.4%", "status": "Completed",
             "timestamp": "2025-11-02T09:15:00Z"},
            {"id": 2, "pair": "ETH/USD", "amount": "1.2 ETH", "type": "sell",
             "percentage": "-0.8%", "status": "Completed",
             "timestamp": "2025-11-03T14:40:00Z"}
        ]"#;
        let trades: Vec<Trade> = serde_json::from_str(json).unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].direction, TradeDirection::Buy);
        assert!(trades[0].direction.is_buy());
        assert_eq!(trades[1].direction, TradeDirection::Sell);
        assert_eq!(trades[1].pair, "ETH/USD");
    }

    #[test]
    fn direction_displays_uppercase() {
        assert_eq!(TradeDirection::Buy.to_string(), "BUY");
        assert_eq!(TradeDirection::Sell.to_string(), "SELL");
    }
}
