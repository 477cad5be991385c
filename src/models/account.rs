use serde::{Deserialize, Serialize};

/// Credentials for the user's external trading terminal. Stored and retrieved
/// verbatim; never validated client-side. Saving is a full replace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeCredentials {
    pub trade_server: String,
    pub username: String,
    pub password: String,
}

impl TradeCredentials {
    /// A 404 from the backend means "never configured"; callers get this.
    pub fn is_empty(&self) -> bool {
        self.trade_server.is_empty() && self.username.is_empty() && self.password.is_empty()
    }
}

/// Singleton payment destination, only used to render payment instructions.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_round_trip_camel_case() {
        let creds = TradeCredentials {
            trade_server: "server01.zentrader.com".into(),
            username: "zen_user_99".into(),
            password: "hunter2".into(),
        };
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json["tradeServer"], "server01.zentrader.com");
        let back: TradeCredentials = serde_json::from_value(json).unwrap();
        assert_eq!(back, creds);
        assert!(!back.is_empty());
        assert!(TradeCredentials::default().is_empty());
    }

    #[test]
    fn deserializes_bank_details() {
        let json = r#"{"accountName": "ZenTrader Ltd",
                       "accountNumber": "0123456789",
                       "bankName": "First Bank"}"#;
        let bank: BankDetails = serde_json::from_str(json).unwrap();
        assert_eq!(bank.account_number, "0123456789");
    }
}
