use eframe::egui::{Color32, Response, RichText, TextEdit, Ui};

use crate::models::{SubscriptionStatus, TradeDirection};
use crate::ui::{UI_CONFIG, UI_TEXT};

pub trait DirectionColor {
    fn color(&self) -> Color32;
}

impl DirectionColor for TradeDirection {
    fn color(&self) -> Color32 {
        match self {
            Self::Buy => UI_CONFIG.colors.positive,
            Self::Sell => UI_CONFIG.colors.negative,
        }
    }
}

pub fn heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .size(20.0)
        .strong()
        .color(UI_CONFIG.colors.heading)
}

pub fn accent_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into())
        .size(20.0)
        .strong()
        .color(UI_CONFIG.colors.accent)
}

pub fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).small().color(UI_CONFIG.colors.subdued));
}

pub fn error_text(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(UI_CONFIG.colors.negative));
}

pub fn success_text(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(UI_CONFIG.colors.positive));
}

/// Pill-shaped status badge, green when subscribed, red otherwise.
pub fn subscription_badge(ui: &mut Ui, status: Option<SubscriptionStatus>) {
    let subscribed = status.is_some_and(|s| s.is_subscribed());
    let (text, color) = if subscribed {
        (UI_TEXT.badge_subscribed, UI_CONFIG.colors.positive)
    } else {
        (UI_TEXT.badge_inactive, UI_CONFIG.colors.negative)
    };
    status_pill(ui, text, color);
}

pub fn status_pill(ui: &mut Ui, text: &str, color: Color32) {
    eframe::egui::Frame {
        fill: UI_CONFIG.colors.side_panel,
        stroke: eframe::egui::Stroke::new(1.0, color),
        inner_margin: eframe::egui::Margin::symmetric(8, 2),
        corner_radius: 10.into(),
        ..Default::default()
    }
    .show(ui, |ui| {
        ui.label(RichText::new(text).small().color(color));
    });
}

/// Single-line password box with the reveal toggle next to it.
pub fn password_field(ui: &mut Ui, value: &mut String, show: &mut bool, hint: &str) -> Response {
    ui.horizontal(|ui| {
        let resp = ui.add(
            TextEdit::singleline(value)
                .password(!*show)
                .hint_text(hint)
                .desired_width(220.0),
        );
        let eye = if *show { "🙈" } else { "👁" };
        if ui.small_button(eye).clicked() {
            *show = !*show;
        }
        resp
    })
    .inner
}

/// "••••••••" when a password is set, "Not set" otherwise.
pub fn masked_password(value: &str) -> &'static str {
    if value.is_empty() {
        UI_TEXT.not_set
    } else {
        UI_TEXT.masked_password
    }
}

/// A value string with a fallback when the backend has nothing stored.
pub fn or_not_set(value: &str) -> &str {
    if value.is_empty() { UI_TEXT.not_set } else { value }
}
