use std::time::Duration;

use eframe::egui::{Align, CentralPanel, Context, Layout, ScrollArea};

use crate::app::App;
use crate::app::state::{Screen, ScreenView};
use crate::config::constants::PAGE_SIZE;
use crate::data::{Backend, RemoteData};
use crate::models::{Trade, UserProfile};
use crate::ui::styles;
use crate::ui::{
    NavTarget, Pager, UI_TEXT, pagination_controls, render_no_trades, render_trade_rows,
};

#[derive(Default)]
pub struct HistoryData {
    pub trades: Vec<Trade>,
    pub profile: UserProfile,
}

pub struct HistoryScreen {
    data: RemoteData<HistoryData>,
    pager: Pager,
}

impl HistoryScreen {
    pub fn new(backend: &Backend) -> Self {
        let client = backend.client();
        let data = RemoteData::spawn(backend, async move {
            let (trades, profile) = tokio::try_join!(client.trades(), client.profile())?;
            Ok(HistoryData { trades, profile })
        });
        Self {
            data,
            pager: Pager::new(PAGE_SIZE),
        }
    }
}

impl ScreenView for HistoryScreen {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen> {
        self.data
            .poll_or_empty("trade history", HistoryData::default);
        let next = app.render_chrome(ctx, NavTarget::History);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                let loading = self.data.is_loading();
                let empty = HistoryData::default();
                let data = self.data.ready().unwrap_or(&empty);

                ui.horizontal(|ui| {
                    ui.label(styles::heading(UI_TEXT.trade_history_title));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        styles::subscription_badge(ui, Some(data.profile.subscription_status));
                    });
                });
                ui.add_space(8.0);

                let page = self.pager.slice(&data.trades);
                if page.is_empty() {
                    render_no_trades(ui, loading);
                } else {
                    render_trade_rows(ui, page);
                }
                pagination_controls(ui, &mut self.pager, data.trades.len());
            });
        });

        if self.data.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
        next
    }
}
