//! Simulated currency-pair ticker. Pure visual noise: no market feed, nothing
//! persisted, values mean nothing outside this widget.
//!
//! One scheduler drives every entry. Each entry carries its own randomized
//! due time (1–3 s); `update` runs once per frame and perturbs only the due
//! ones. There are no timer handles, so tearing the board down is just
//! dropping it with its screen.

use std::time::{Duration, Instant};

use eframe::egui::{RichText, Ui};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::TICKER;
use crate::ui::{UI_CONFIG, UI_TEXT};

pub struct TickerEntry {
    pub pair: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub rising: bool,
    due: Instant,
}

pub struct TickerBoard {
    entries: Vec<TickerEntry>,
    rng: StdRng,
}

/// One price step: `|delta| <= max_drift_pct * price`, new price, signed
/// change, and the percent change computed against the new price.
pub fn perturb(price: f64, rng: &mut impl Rng) -> (f64, f64, f64) {
    let delta = rng.gen_range(-1.0..=1.0) * price * TICKER.max_drift_pct;
    let new_price = price + delta;
    let percent = if new_price.abs() > f64::EPSILON {
        delta / new_price * 100.0
    } else {
        0.0
    };
    (new_price, delta, percent)
}

impl TickerBoard {
    pub fn new() -> Self {
        let mut rng = StdRng::from_entropy();
        let now = Instant::now();
        let entries = TICKER
            .seed_pairs
            .iter()
            .map(|seed| TickerEntry {
                pair: seed.pair.to_string(),
                price: seed.price,
                change: seed.change,
                change_percent: seed.change_percent,
                rising: true,
                due: now + random_interval(&mut rng),
            })
            .collect();
        Self { entries, rng }
    }

    /// Single scheduler tick: perturb every entry whose deadline passed and
    /// hand it a fresh one.
    pub fn update(&mut self, now: Instant) {
        for entry in &mut self.entries {
            if now < entry.due {
                continue;
            }
            let (price, change, percent) = perturb(entry.price, &mut self.rng);
            entry.price = price;
            entry.change = change;
            entry.change_percent = percent;
            entry.rising = !entry.rising;
            entry.due = now + random_interval(&mut self.rng);
        }
    }

    /// How long until the next entry is due, for repaint scheduling.
    pub fn next_due_in(&self, now: Instant) -> Duration {
        self.entries
            .iter()
            .map(|e| e.due.saturating_duration_since(now))
            .min()
            .unwrap_or(Duration::from_millis(TICKER.min_interval_ms))
    }

    pub fn render(&self, ui: &mut Ui) {
        ui.label(
            RichText::new(UI_TEXT.ticker_title)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(4.0);
        for entry in &self.entries {
            let color = if entry.rising {
                UI_CONFIG.colors.positive
            } else {
                UI_CONFIG.colors.negative
            };
            UI_CONFIG.card_frame().show(ui, |ui| {
                ui.horizontal(|ui| {
                    let tag: String = entry.pair.chars().take(2).collect();
                    ui.label(
                        RichText::new(tag)
                            .strong()
                            .color(UI_CONFIG.colors.heading)
                            .monospace(),
                    );
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(&entry.pair)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        ui.label(
                            RichText::new(TICKER.volume_label)
                                .small()
                                .color(UI_CONFIG.colors.subdued),
                        );
                    });
                    ui.with_layout(
                        eframe::egui::Layout::right_to_left(eframe::egui::Align::Center),
                        |ui| {
                            ui.vertical(|ui| {
                                ui.label(
                                    RichText::new(format!("${:.2}", entry.price))
                                        .strong()
                                        .color(color),
                                );
                                let arrow = if entry.rising { "↗" } else { "↘" };
                                let sign = if entry.change > 0.0 { "+" } else { "-" };
                                ui.label(
                                    RichText::new(format!(
                                        "{arrow} {sign}{:.2} ({:.2}%)",
                                        entry.change.abs(),
                                        entry.change_percent,
                                    ))
                                    .small()
                                    .color(color),
                                );
                            });
                        },
                    );
                });
            });
            ui.add_space(4.0);
        }
    }
}

fn random_interval(rng: &mut impl Rng) -> Duration {
    Duration::from_millis(rng.gen_range(TICKER.min_interval_ms..=TICKER.max_interval_ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perturbation_stays_within_half_percent_of_old_price() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut price = 98.75;
        for _ in 0..1000 {
            let (new_price, change, _) = perturb(price, &mut rng);
            assert!(change.abs() <= TICKER.max_drift_pct * price + 1e-12);
            assert!((new_price - (price + change)).abs() < 1e-12);
            price = new_price;
        }
        assert!(price > 0.0);
    }

    #[test]
    fn percent_uses_post_perturbation_price() {
        let mut rng = StdRng::seed_from_u64(42);
        let (new_price, change, percent) = perturb(0.485, &mut rng);
        assert!((percent - change / new_price * 100.0).abs() < 1e-12);
    }

    #[test]
    fn update_only_touches_due_entries_and_flips_direction() {
        let mut board = TickerBoard::new();
        let now = Instant::now();

        // Nothing is due yet; prices must not move.
        let before: Vec<f64> = board.entries.iter().map(|e| e.price).collect();
        board.update(now);
        let after: Vec<f64> = board.entries.iter().map(|e| e.price).collect();
        assert_eq!(before, after);

        // Force everything due and tick once.
        for entry in &mut board.entries {
            entry.due = now;
        }
        board.update(now);
        for (entry, seed) in board.entries.iter().zip(TICKER.seed_pairs) {
            assert!(!entry.rising, "direction flag should flip on update");
            assert!(entry.change.abs() <= TICKER.max_drift_pct * seed.price + 1e-12);
            // Rescheduled into the configured window.
            let wait = entry.due.saturating_duration_since(now);
            assert!(wait >= Duration::from_millis(TICKER.min_interval_ms));
            assert!(wait <= Duration::from_millis(TICKER.max_interval_ms));
        }
    }

    #[test]
    fn next_due_reflects_soonest_entry() {
        let mut board = TickerBoard::new();
        let now = Instant::now();
        board.entries[1].due = now + Duration::from_millis(50);
        assert!(board.next_due_in(now) <= Duration::from_millis(50));
    }
}
