use std::time::Duration;

use eframe::egui::{Align, CentralPanel, Context, Layout, TextEdit, Ui};

use crate::app::App;
use crate::app::screens::{DashboardScreen, SignupScreen};
use crate::app::state::{Screen, ScreenView};
use crate::data::RemoteData;
use crate::ui::UI_TEXT;
use crate::ui::styles::{self, password_field};

const FORM_WIDTH: f32 = 360.0;

#[derive(Default)]
pub struct LoginScreen {
    username: String,
    password: String,
    show_password: bool,
    error: Option<String>,
    pending: RemoteData<String>,
}

impl LoginScreen {
    fn submit(&mut self, app: &mut App) {
        self.error = None;
        // A stale session must not leak into the new login attempt.
        if let Err(err) = app.services.session.clear() {
            log::error!("Failed to clear session: {err:#}");
        }
        let client = app.services.backend.client();
        client.clear_token();

        let username = self.username.clone();
        let password = self.password.clone();
        self.pending = RemoteData::spawn(&app.services.backend, async move {
            client.login(&username, &password).await
        });
    }
}

impl ScreenView for LoginScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.pending.poll();
        if let Some(token) = self.pending.take_ready() {
            if let Err(err) = app.services.session.save(&token) {
                log::error!("Failed to persist session: {err:#}");
            }
            app.services.backend.client().set_token(token);
            return Some(Screen::Dashboard(DashboardScreen::new(
                &app.services.backend,
            )));
        }
        if let Some(msg) = self.pending.take_failed() {
            self.error = Some(msg);
        }

        let mut next = None;
        CentralPanel::default().show(ctx, |ui| {
            auth_card(ui, UI_TEXT.login_tagline, |ui| {
                ui.add(
                    TextEdit::singleline(&mut self.username)
                        .hint_text(UI_TEXT.hint_username)
                        .desired_width(220.0),
                );
                ui.add_space(8.0);
                password_field(
                    ui,
                    &mut self.password,
                    &mut self.show_password,
                    UI_TEXT.hint_password,
                );
                ui.add_space(8.0);
                if let Some(error) = &self.error {
                    styles::error_text(ui, error);
                    ui.add_space(8.0);
                }

                let busy = self.pending.is_loading();
                let can_submit =
                    !busy && !self.username.trim().is_empty() && !self.password.is_empty();
                let label = if busy {
                    UI_TEXT.btn_sign_in_busy
                } else {
                    UI_TEXT.btn_sign_in
                };
                if ui
                    .add_enabled(can_submit, eframe::egui::Button::new(label))
                    .clicked()
                {
                    self.submit(app);
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    styles::field_label(ui, UI_TEXT.login_no_account);
                    if ui.link(UI_TEXT.login_signup_link).clicked() {
                        next = Some(Screen::Signup(SignupScreen::default()));
                    }
                });
            });
        });

        if self.pending.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        next
    }
}

/// Centered card shared by the login and signup forms.
pub(crate) fn auth_card(ui: &mut Ui, tagline: &str, body: impl FnOnce(&mut Ui)) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.15);
        ui.set_max_width(FORM_WIDTH);
        crate::ui::UI_CONFIG.card_frame().show(ui, |ui| {
            ui.with_layout(Layout::top_down(Align::Center), |ui| {
                ui.horizontal(|ui| {
                    ui.add_space(ui.available_width() / 2.0 - 60.0);
                    ui.label(styles::accent_heading(UI_TEXT.app_title));
                    ui.label(styles::heading(UI_TEXT.app_title_accent));
                });
                styles::field_label(ui, tagline);
                ui.add_space(16.0);
                body(ui);
            });
        });
    });
}
