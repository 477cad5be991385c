/// Seed values for one simulated currency pair.
pub struct SeedPair {
    pub pair: &'static str,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

pub struct TickerConfig {
    /// Pairs shown in the currency-pairs widget, with their starting values.
    pub seed_pairs: &'static [SeedPair],
    /// Each entry reschedules itself somewhere in this window after an update.
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// Maximum single-step drift as a fraction of the current price.
    pub max_drift_pct: f64,
    /// Placeholder volume label; the widget has no market feed behind it.
    pub volume_label: &'static str,
}

pub const TICKER: TickerConfig = TickerConfig {
    seed_pairs: &[
        SeedPair { pair: "ADA/USD", price: 0.485, change: 0.0125, change_percent: 2.65 },
        SeedPair { pair: "SOL/USD", price: 98.75, change: 3.45, change_percent: 3.62 },
        SeedPair { pair: "XRP/USD", price: 0.6125, change: 0.005, change_percent: 0.81 },
        SeedPair { pair: "MATIC/USD", price: 0.895, change: 0.0275, change_percent: 3.17 },
    ],
    min_interval_ms: 1000,
    max_interval_ms: 3000,
    max_drift_pct: 0.005,
    volume_label: "24h Volume: 2.4B",
};
