use eframe::egui::Context;

use crate::app::App;
use crate::app::screens::{
    ConnectScreen, DashboardScreen, HistoryScreen, LoginScreen, ProfileScreen, SignupScreen,
    SubscribeScreen,
};

/// Which screen owns the frame. Each variant carries that screen's view
/// state. Navigating constructs a fresh screen, which re-fetches; there is
/// no cross-screen cache.
pub enum Screen {
    Login(LoginScreen),
    Signup(SignupScreen),
    Dashboard(DashboardScreen),
    History(HistoryScreen),
    Subscribe(SubscribeScreen),
    Profile(ProfileScreen),
    Connect(ConnectScreen),
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginScreen::default())
    }
}

impl Screen {
    pub(crate) fn tick(mut self, app: &mut App, ctx: &Context) -> Screen {
        let next = match &mut self {
            Screen::Login(s) => s.tick(app, ctx),
            Screen::Signup(s) => s.tick(app, ctx),
            Screen::Dashboard(s) => s.tick(app, ctx),
            Screen::History(s) => s.tick(app, ctx),
            Screen::Subscribe(s) => s.tick(app, ctx),
            Screen::Profile(s) => s.tick(app, ctx),
            Screen::Connect(s) => s.tick(app, ctx),
        };
        next.unwrap_or(self)
    }
}

/// One frame of a screen: poll pending fetches, render, and optionally hand
/// over to a successor screen.
pub(crate) trait ScreenView {
    fn tick(&mut self, app: &mut App, ctx: &Context) -> Option<Screen>;
}
