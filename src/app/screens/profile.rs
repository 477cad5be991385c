use std::time::Duration;

use eframe::egui::{Button, CentralPanel, Context, RichText, ScrollArea, TextEdit, Ui};

use crate::app::App;
use crate::app::state::{Screen, ScreenView};
use crate::data::{Backend, RemoteData};
use crate::models::{ProfileUpdate, UserProfile};
use crate::ui::styles::{self, or_not_set, password_field};
use crate::ui::{NavTarget, UI_CONFIG, UI_TEXT};

pub struct ProfileScreen {
    profile: RemoteData<UserProfile>,
    form_seeded: bool,
    edit_mode: bool,
    form_username: String,
    form_email: String,
    save: RemoteData<UserProfile>,
    save_error: Option<String>,

    new_password: String,
    show_new_password: bool,
    password_save: RemoteData<()>,
    password_notice: Option<(bool, String)>,
}

impl ProfileScreen {
    pub fn new(backend: &Backend) -> Self {
        let client = backend.client();
        let profile = RemoteData::spawn(backend, async move { client.profile().await });
        Self {
            profile,
            form_seeded: false,
            edit_mode: false,
            form_username: String::new(),
            form_email: String::new(),
            save: RemoteData::Idle,
            save_error: None,
            new_password: String::new(),
            show_new_password: false,
            password_save: RemoteData::Idle,
            password_notice: None,
        }
    }

    fn seed_form(&mut self, profile: &UserProfile) {
        self.form_username = profile.username.clone();
        self.form_email = profile.email.clone();
        self.form_seeded = true;
    }

    fn submit_save(&mut self, app: &mut App) {
        self.save_error = None;
        let client = app.services.backend.client();
        let update = ProfileUpdate {
            username: self.form_username.trim().to_string(),
            email: self.form_email.trim().to_string(),
        };
        self.save = RemoteData::spawn(&app.services.backend, async move {
            client.update_profile(&update).await
        });
    }

    fn submit_password(&mut self, app: &mut App) {
        self.password_notice = None;
        let client = app.services.backend.client();
        let new_password = self.new_password.clone();
        self.password_save = RemoteData::spawn(&app.services.backend, async move {
            client.change_password(&new_password).await
        });
    }

    fn render_details(&mut self, ui: &mut Ui, app: &mut App) {
        let profile = self.profile.ready().cloned().unwrap_or_default();
        UI_CONFIG.card_frame().show(ui, |ui| {
            if self.edit_mode {
                styles::field_label(ui, UI_TEXT.label_username);
                ui.add(TextEdit::singleline(&mut self.form_username).desired_width(240.0));
                ui.add_space(8.0);
                styles::field_label(ui, UI_TEXT.label_email);
                ui.add(TextEdit::singleline(&mut self.form_email).desired_width(240.0));
            } else {
                field_row(ui, UI_TEXT.label_username, or_not_set(&profile.username));
                field_row(ui, UI_TEXT.label_email, or_not_set(&profile.email));
            }
            field_row(
                ui,
                UI_TEXT.label_date_joined,
                or_not_set(profile.date_joined.as_deref().unwrap_or("")),
            );
            ui.horizontal(|ui| {
                styles::field_label(ui, UI_TEXT.label_subscription);
                styles::subscription_badge(ui, Some(profile.subscription_status));
            });
            ui.add_space(8.0);

            if let Some(error) = &self.save_error {
                styles::error_text(ui, error);
                ui.add_space(8.0);
            }

            let saving = self.save.is_loading();
            if self.edit_mode {
                ui.horizontal(|ui| {
                    let filled = !self.form_username.trim().is_empty()
                        && !self.form_email.trim().is_empty();
                    if ui
                        .add_enabled(!saving && filled, Button::new(UI_TEXT.btn_save_changes))
                        .clicked()
                    {
                        self.submit_save(app);
                    }
                    if ui.add_enabled(!saving, Button::new(UI_TEXT.btn_cancel)).clicked() {
                        self.seed_form(&profile);
                        self.save_error = None;
                        self.edit_mode = false;
                    }
                });
            } else if ui.button(UI_TEXT.btn_edit_profile).clicked() {
                self.edit_mode = true;
            }
        });
    }

    fn render_password_section(&mut self, ui: &mut Ui, app: &mut App) {
        ui.label(styles::heading(UI_TEXT.change_password_title));
        ui.add_space(4.0);
        UI_CONFIG.card_frame().show(ui, |ui| {
            password_field(
                ui,
                &mut self.new_password,
                &mut self.show_new_password,
                UI_TEXT.hint_new_password,
            );
            ui.add_space(8.0);
            if let Some((ok, msg)) = &self.password_notice {
                if *ok {
                    styles::success_text(ui, msg);
                } else {
                    styles::error_text(ui, msg);
                }
                ui.add_space(8.0);
            }
            let busy = self.password_save.is_loading();
            if ui
                .add_enabled(
                    !busy && !self.new_password.is_empty(),
                    Button::new(UI_TEXT.btn_change_password),
                )
                .clicked()
            {
                self.submit_password(app);
            }
        });
    }
}

impl ScreenView for ProfileScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.profile.poll_or_empty("profile", UserProfile::default);
        if !self.form_seeded {
            if let Some(profile) = self.profile.ready().cloned() {
                self.seed_form(&profile);
            }
        }

        self.save.poll();
        if let Some(updated) = self.save.take_ready() {
            self.seed_form(&updated);
            self.profile = RemoteData::Ready(updated);
            self.edit_mode = false;
        }
        if let Some(msg) = self.save.take_failed() {
            self.save_error = Some(msg);
        }

        self.password_save.poll();
        if self.password_save.take_ready().is_some() {
            self.password_notice = Some((true, UI_TEXT.password_changed.to_string()));
            self.new_password.clear();
        }
        if let Some(msg) = self.password_save.take_failed() {
            self.password_notice = Some((false, msg));
        }

        let next = app.render_chrome(ctx, NavTarget::Profile);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.label(styles::heading(UI_TEXT.profile_title));
                ui.add_space(8.0);
                self.render_details(ui, app);
                ui.add_space(16.0);
                self.render_password_section(ui, app);
            });
        });

        if self.profile.is_loading()
            || self.save.is_loading()
            || self.password_save.is_loading()
        {
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
