use std::time::{Duration, Instant};

use eframe::egui::{Button, CentralPanel, Context, RichText, TextEdit, Ui, Window};

use crate::app::App;
use crate::app::state::{Screen, ScreenView};
use crate::config::constants::{PAID_CONFIRMATION_MS, SUBSCRIPTION_PERIOD, SUBSCRIPTION_PRICE};
use crate::data::{Backend, RemoteData};
use crate::models::BankDetails;
use crate::ui::styles;
use crate::ui::{NavTarget, UI_CONFIG, UI_TEXT};

pub struct SubscribeScreen {
    bank: RemoteData<Option<BankDetails>>,
    modal_open: bool,
    paid_at: Option<Instant>,
}

impl SubscribeScreen {
    pub fn new(backend: &Backend) -> Self {
        let client = backend.client();
        let bank = RemoteData::spawn(backend, async move { client.bank_details().await });
        Self {
            bank,
            modal_open: false,
            paid_at: None,
        }
    }

    fn render_modal(&mut self, ctx: &Context) {
        let mut open = self.modal_open;
        Window::new(UI_TEXT.payment_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match self.bank.ready() {
                    Some(Some(bank)) => {
                        readonly_field(ui, UI_TEXT.label_account_name, &bank.account_name);
                        readonly_field(ui, UI_TEXT.label_account_number, &bank.account_number);
                        readonly_field(ui, UI_TEXT.label_bank_name, &bank.bank_name);
                    }
                    Some(None) => {
                        styles::field_label(ui, UI_TEXT.not_set);
                    }
                    None => {
                        styles::field_label(ui, UI_TEXT.loading);
                    }
                }
                ui.add_space(8.0);
                styles::field_label(ui, UI_TEXT.payment_hint);
                ui.add_space(8.0);

                if let Some(at) = self.paid_at {
                    styles::success_text(ui, UI_TEXT.paid_confirmation);
                    if at.elapsed() >= Duration::from_millis(PAID_CONFIRMATION_MS) {
                        self.modal_open = false;
                        self.paid_at = None;
                    }
                } else if ui.button(UI_TEXT.btn_paid).clicked() {
                    self.paid_at = Some(Instant::now());
                }
            });
        // The window's own close button cleared `open`.
        if self.modal_open && !open {
            self.modal_open = false;
            self.paid_at = None;
        }
    }
}

impl ScreenView for SubscribeScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.bank.poll_or_empty("bank details", || None);
        let next = app.render_chrome(ctx, NavTarget::Subscribe);

        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.1);
                ui.set_max_width(380.0);
                UI_CONFIG.card_frame().show(ui, |ui| {
                    ui.label(styles::accent_heading(UI_TEXT.premium_title));
                    ui.add_space(4.0);
                    styles::field_label(ui, UI_TEXT.premium_pitch);
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(SUBSCRIPTION_PRICE)
                                .size(28.0)
                                .strong()
                                .color(UI_CONFIG.colors.heading),
                        );
                        styles::field_label(ui, SUBSCRIPTION_PERIOD);
                    });
                    ui.add_space(12.0);
                    if ui.add(Button::new(UI_TEXT.btn_subscribe)).clicked() {
                        self.modal_open = true;
                    }
                });
            });
        });

        if self.modal_open {
            self.render_modal(ctx);
        }

        if self.bank.is_loading() || self.paid_at.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        next
    }
}

fn readonly_field(ui: &mut Ui, label: &str, value: &str) {
    styles::field_label(ui, label);
    ui.add_enabled(
        false,
        TextEdit::singleline(&mut value.to_string()).desired_width(240.0),
    );
    ui.add_space(4.0);
}
