use std::time::Duration;

use eframe::egui::{Button, CentralPanel, Context, RichText, TextEdit, Ui, Window};

use crate::app::App;
use crate::app::state::{Screen, ScreenView};
use crate::data::{Backend, RemoteData};
use crate::models::TradeCredentials;
use crate::ui::styles::{self, masked_password, or_not_set, password_field};
use crate::ui::{NavTarget, UI_CONFIG, UI_TEXT};

pub struct ConnectScreen {
    details: RemoteData<TradeCredentials>,
    form_seeded: bool,
    modal_open: bool,
    form: TradeCredentials,
    show_password: bool,
    save: RemoteData<TradeCredentials>,
    save_error: Option<String>,
}

impl ConnectScreen {
    pub fn new(backend: &Backend) -> Self {
        let client = backend.client();
        let details = RemoteData::spawn(backend, async move { client.trade_details().await });
        Self {
            details,
            form_seeded: false,
            modal_open: false,
            form: TradeCredentials::default(),
            show_password: false,
            save: RemoteData::Idle,
            save_error: None,
        }
    }

    fn submit(&mut self, app: &mut App) {
        self.save_error = None;
        let client = app.services.backend.client();
        let creds = TradeCredentials {
            trade_server: self.form.trade_server.trim().to_string(),
            username: self.form.username.trim().to_string(),
            password: self.form.password.clone(),
        };
        self.save = RemoteData::spawn(&app.services.backend, async move {
            client.save_trade_details(&creds).await?;
            Ok(creds)
        });
    }

    fn render_modal(&mut self, ctx: &Context, app: &mut App) {
        let mut open = self.modal_open;
        Window::new(UI_TEXT.modal_details_title)
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(eframe::egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                styles::field_label(ui, UI_TEXT.label_trade_server);
                ui.add(TextEdit::singleline(&mut self.form.trade_server).desired_width(240.0));
                ui.add_space(8.0);
                styles::field_label(ui, UI_TEXT.label_username);
                ui.add(TextEdit::singleline(&mut self.form.username).desired_width(240.0));
                ui.add_space(8.0);
                styles::field_label(ui, UI_TEXT.label_password);
                password_field(
                    ui,
                    &mut self.form.password,
                    &mut self.show_password,
                    UI_TEXT.hint_password,
                );
                ui.add_space(8.0);

                if let Some(error) = &self.save_error {
                    styles::error_text(ui, error);
                    ui.add_space(8.0);
                }

                let busy = self.save.is_loading();
                let filled = !self.form.trade_server.trim().is_empty()
                    && !self.form.username.trim().is_empty()
                    && !self.form.password.is_empty();
                if ui
                    .add_enabled(!busy && filled, Button::new(UI_TEXT.btn_connect))
                    .clicked()
                {
                    self.submit(app);
                }
            });
        if self.modal_open && !open {
            self.modal_open = false;
            self.save_error = None;
        }
    }
}

impl ScreenView for ConnectScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.details
            .poll_or_empty("trading details", TradeCredentials::default);
        if !self.form_seeded {
            if let Some(details) = self.details.ready().cloned() {
                self.form = details;
                self.form_seeded = true;
            }
        }

        self.save.poll();
        if let Some(saved) = self.save.take_ready() {
            self.form = saved.clone();
            self.details = RemoteData::Ready(saved);
            self.modal_open = false;
        }
        if let Some(msg) = self.save.take_failed() {
            self.save_error = Some(msg);
        }

        let next = app.render_chrome(ctx, NavTarget::Connect);

        CentralPanel::default().show(ctx, |ui| {
            ui.label(styles::heading(UI_TEXT.trading_details_title));
            ui.add_space(8.0);

            let empty = TradeCredentials::default();
            let details = self.details.ready().unwrap_or(&empty);
            UI_CONFIG.card_frame().show(ui, |ui| {
                field_row(ui, UI_TEXT.label_trade_server, or_not_set(&details.trade_server));
                field_row(ui, UI_TEXT.label_username, or_not_set(&details.username));
                field_row(ui, UI_TEXT.label_password, masked_password(&details.password));
            });
            ui.add_space(12.0);

            let label = if details.is_empty() {
                UI_TEXT.btn_add_details
            } else {
                UI_TEXT.modal_details_title
            };
            if ui.button(label).clicked() {
                self.modal_open = true;
            }
        });

        if self.modal_open {
            self.render_modal(ctx, app);
        }

        if self.details.is_loading() || self.save.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        next
    }
}

fn field_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        styles::field_label(ui, label);
        ui.label(RichText::new(value).color(UI_CONFIG.colors.label));
    });
}
