//! Fixed navigation panel shared by every authenticated screen. Purely
//! presentational: it reports clicks, the app shell decides what they mean.

use eframe::egui::{Align, Layout, RichText, Ui};

use crate::ui::{UI_CONFIG, UI_TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    History,
    Subscribe,
    Profile,
    Connect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    Navigate(NavTarget),
    Logout,
}

pub fn render_sidebar(ui: &mut Ui, active: NavTarget) -> Option<SidebarAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(UI_TEXT.app_title)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.accent),
        );
        ui.label(
            RichText::new(UI_TEXT.app_title_accent)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
    });
    ui.add_space(16.0);

    let links = [
        (NavTarget::Dashboard, UI_TEXT.nav_dashboard),
        (NavTarget::History, UI_TEXT.nav_history),
        (NavTarget::Subscribe, UI_TEXT.nav_subscribe),
        (NavTarget::Profile, UI_TEXT.nav_profile),
        (NavTarget::Connect, UI_TEXT.nav_connect),
    ];
    for (target, label) in links {
        if nav_link(ui, label, target == active) {
            action = Some(SidebarAction::Navigate(target));
        }
        ui.add_space(4.0);
    }

    ui.with_layout(Layout::bottom_up(Align::Min), |ui| {
        ui.label(
            RichText::new(UI_TEXT.nav_version)
                .small()
                .color(UI_CONFIG.colors.subdued),
        );
        ui.add_space(8.0);
        if nav_link(ui, UI_TEXT.nav_logout, false) {
            action = Some(SidebarAction::Logout);
        }
    });

    action
}

fn nav_link(ui: &mut Ui, label: &str, active: bool) -> bool {
    let color = if active {
        UI_CONFIG.colors.accent
    } else {
        UI_CONFIG.colors.label
    };
    ui.add(
        eframe::egui::Button::new(RichText::new(label).color(color))
            .fill(eframe::egui::Color32::TRANSPARENT)
            .min_size(eframe::egui::vec2(ui.available_width(), 28.0)),
    )
    .clicked()
}
