use std::time::{Duration, Instant};

use eframe::egui::{CentralPanel, Context, TextEdit};

use crate::api::RegisterRequest;
use crate::app::App;
use crate::app::screens::LoginScreen;
use crate::app::screens::login::auth_card;
use crate::app::state::{Screen, ScreenView};
use crate::config::constants::SIGNUP_REDIRECT_MS;
use crate::data::RemoteData;
use crate::ui::UI_TEXT;
use crate::ui::styles::{self, password_field};

#[derive(Default)]
pub struct SignupScreen {
    username: String,
    fullname: String,
    email: String,
    password: String,
    show_password: bool,
    error: Option<String>,
    success: Option<Instant>,
    pending: RemoteData<String>,
}

impl SignupScreen {
    fn submit(&mut self, app: &mut App) {
        self.error = None;
        let client = app.services.backend.client();
        let request = RegisterRequest {
            username: self.username.trim().to_string(),
            fullname: self.fullname.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        self.pending = RemoteData::spawn(&app.services.backend, async move {
            client.register(&request).await
        });
    }

    fn fields_filled(&self) -> bool {
        !self.username.trim().is_empty()
            && !self.fullname.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.password.is_empty()
    }
}

impl ScreenView for SignupScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.pending.poll();
        if let Some(token) = self.pending.take_ready() {
            if let Err(err) = app.services.session.save(&token) {
                log::error!("Failed to persist session: {err:#}");
            }
            app.services.backend.client().set_token(token);
            self.success = Some(Instant::now());
        }
        if let Some(msg) = self.pending.take_failed() {
            self.error = Some(msg);
        }

        // Linger on the confirmation message, then hand over to the login
        // screen as the original flow does.
        if let Some(at) = self.success {
            if at.elapsed() >= Duration::from_millis(SIGNUP_REDIRECT_MS) {
                return Some(Screen::Login(LoginScreen::default()));
            }
        }

        let mut next = None;
        CentralPanel::default().show(ctx, |ui| {
            auth_card(ui, UI_TEXT.signup_tagline, |ui| {
                ui.add(
                    TextEdit::singleline(&mut self.username)
                        .hint_text(UI_TEXT.hint_username)
                        .desired_width(220.0),
                );
                ui.add_space(8.0);
                ui.add(
                    TextEdit::singleline(&mut self.fullname)
                        .hint_text(UI_TEXT.hint_fullname)
                        .desired_width(220.0),
                );
                ui.add_space(8.0);
                ui.add(
                    TextEdit::singleline(&mut self.email)
                        .hint_text(UI_TEXT.hint_email)
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
                if self.success.is_some() {
                    styles::success_text(ui, UI_TEXT.signup_success);
                    ui.add_space(8.0);
                }

                let busy = self.pending.is_loading() || self.success.is_some();
                let label = if self.pending.is_loading() {
                    UI_TEXT.btn_sign_up_busy
                } else {
                    UI_TEXT.btn_sign_up
                };
                if ui
                    .add_enabled(!busy && self.fields_filled(), eframe::egui::Button::new(label))
                    .clicked()
                {
                    self.submit(app);
                }

                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    styles::field_label(ui, UI_TEXT.signup_has_account);
                    if ui.link(UI_TEXT.signup_login_link).clicked() {
                        next = Some(Screen::Login(LoginScreen::default()));
                    }
                });
            });
        });

        if self.pending.is_loading() || self.success.is_some() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        next
    }
}
