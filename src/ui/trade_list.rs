//! Trade rows shared by the dashboard and the history screen.

use chrono::DateTime;
use eframe::egui::{Align, Layout, RichText, Ui};

use crate::models::Trade;
use crate::ui::styles::DirectionColor;
use crate::ui::{UI_CONFIG, UI_TEXT};

pub fn render_trade_rows(ui: &mut Ui, trades: &[Trade]) {
    for trade in trades {
        let color = trade.direction.color();
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let arrow = if trade.direction.is_buy() { "↗" } else { "↘" };
                ui.label(RichText::new(arrow).size(18.0).color(color));
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&trade.pair)
                            .strong()
                            .color(UI_CONFIG.colors.heading),
                    );
                    ui.label(
                        RichText::new(&trade.amount)
                            .small()
                            .color(UI_CONFIG.colors.subdued),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.vertical(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(trade.direction.to_string()).small().color(color));
                            ui.label(RichText::new(&trade.percentage).small().color(color));
                            ui.label(
                                RichText::new(format_timestamp(&trade.timestamp))
                                    .small()
                                    .color(UI_CONFIG.colors.subdued),
                            );
                        });
                        crate::ui::styles::status_pill(ui, &trade.status, UI_CONFIG.colors.positive);
                    });
                });
            });
        });
        ui.add_space(4.0);
    }
}

pub fn render_no_trades(ui: &mut Ui, loading: bool) {
    let text = if loading {
        UI_TEXT.loading_trades
    } else {
        UI_TEXT.no_trades
    };
    ui.label(RichText::new(text).color(UI_CONFIG.colors.subdued));
}

/// Backend timestamps are RFC 3339 when well-formed; anything else renders
/// verbatim rather than hiding the row.
pub fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_and_passes_through_garbage() {
        assert_eq!(
            format_timestamp("2025-11-02T09:15:00Z"),
            "2025-11-02 09:15"
        );
        assert_eq!(format_timestamp("last tuesday"), "last tuesday");
    }
}
