use std::time::{Duration, Instant};

use eframe::egui::{Align, CentralPanel, Context, Layout, RichText, ScrollArea, Ui};

use crate::app::App;
use crate::app::screens::HistoryScreen;
use crate::app::state::{Screen, ScreenView};
use crate::config::constants::PAGE_SIZE;
use crate::data::{Backend, RemoteData};
use crate::models::{Trade, TradeCredentials, UserProfile};
use crate::ui::styles::{self, masked_password};
use crate::ui::{
    NavTarget, Pager, TickerBoard, UI_CONFIG, UI_TEXT, pagination_controls, render_no_trades,
    render_trade_rows,
};

/// Everything the dashboard shows, loaded in one shot. If any leg fails the
/// whole load fails and the screen falls back to defaults.
#[derive(Default)]
pub struct DashboardData {
    pub credentials: TradeCredentials,
    pub trades: Vec<Trade>,
    pub profile: UserProfile,
}

pub struct DashboardScreen {
    data: RemoteData<DashboardData>,
    pager: Pager,
    ticker: TickerBoard,
}

impl DashboardScreen {
    pub fn new(backend: &Backend) -> Self {
        let client = backend.client();
        let data = RemoteData::spawn(backend, async move {
            let (credentials, trades, profile) =
                tokio::try_join!(client.trade_details(), client.trades(), client.profile())?;
            Ok(DashboardData {
                credentials,
                trades,
                profile,
            })
        });
        Self {
            data,
            pager: Pager::new(PAGE_SIZE),
            ticker: TickerBoard::new(),
        }
    }

    fn render_welcome(&self, ui: &mut Ui, data: &DashboardData) {
        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.horizontal(|ui| {
                let username = if data.credentials.username.is_empty() {
                    UI_TEXT.fallback_username
                } else {
                    &data.credentials.username
                };
                ui.label(styles::heading(format!(
                    "{} {username}",
                    UI_TEXT.welcome_title
                )));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    styles::subscription_badge(ui, Some(data.profile.subscription_status));
                });
            });
            ui.add_space(8.0);

            let server = if data.credentials.trade_server.is_empty() {
                UI_TEXT.fallback_server
            } else {
                &data.credentials.trade_server
            };
            ui.horizontal(|ui| {
                styles::field_label(ui, UI_TEXT.label_trade_server);
                ui.label(RichText::new(server).color(UI_CONFIG.colors.label));
            });
            ui.horizontal(|ui| {
                styles::field_label(ui, UI_TEXT.label_password);
                ui.label(
                    RichText::new(masked_password(&data.credentials.password))
                        .color(UI_CONFIG.colors.label),
                );
            });
        });
    }
}

impl ScreenView for DashboardScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.data
            .poll_or_empty("dashboard data", DashboardData::default);
        let mut next = app.render_chrome(ctx, NavTarget::Dashboard);

        let now = Instant::now();
        self.ticker.update(now);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let loading = self.data.is_loading();
                let empty = DashboardData::default();
                let data = self.data.ready().unwrap_or(&empty);

                self.render_welcome(ui, data);
                ui.add_space(16.0);

                ui.horizontal(|ui| {
                    ui.label(styles::heading(UI_TEXT.trade_history_title));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        if ui.link(UI_TEXT.view_all).clicked() && next.is_none() {
                            next = Some(Screen::History(HistoryScreen::new(
                                &app.services.backend,
                            )));
                        }
                    });
                });
                ui.add_space(4.0);

                let page = self.pager.slice(&data.trades);
                if page.is_empty() {
                    render_no_trades(ui, loading);
                } else {
                    render_trade_rows(ui, page);
                }
                pagination_controls(ui, &mut self.pager, data.trades.len());

                ui.add_space(16.0);
                self.ticker.render(ui);
            });
        });

        // Wake up for the next ticker deadline; cap the wait so pending
        // fetches keep getting polled.
        let wait = self.ticker.next_due_in(now).min(Duration::from_millis(250));
        ctx.request_repaint_after(wait);

        next
    }
}
