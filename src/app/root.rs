use std::mem;
use std::path::PathBuf;

use eframe::egui::{Context, SidePanel, TopBottomPanel, Visuals};
use eframe::Frame;

use crate::api::ApiClient;
use crate::app::screens::{
    ConnectScreen, DashboardScreen, HistoryScreen, LoginScreen, ProfileScreen, SubscribeScreen,
};
use crate::app::state::Screen;
use crate::config::{API, PERSISTENCE, constants};
use crate::data::Backend;
use crate::session::SessionStore;
use crate::ui::{NavTarget, SidebarAction, UI_CONFIG, render_sidebar};
use crate::Cli;

/// Everything the screens share: the background fetch machinery and the
/// durable session. Screens receive it through `&mut App` each tick.
pub(crate) struct Services {
    pub backend: Backend,
    pub session: SessionStore,
}

pub struct App {
    pub(crate) services: Services,
    pub(crate) sidebar_open: bool,
    screen: Screen,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let base_url = API.resolve_base_url(args.backend_url.as_deref());
        log::info!("Using backend at {base_url}");
        let client = ApiClient::new(base_url).expect("Failed to build HTTP client");

        let session = SessionStore::load(PathBuf::from(PERSISTENCE.session_path));
        if let Some(token) = session.get() {
            client.set_token(token);
        }

        let services = Services {
            backend: Backend::new(client),
            session,
        };

        // A surviving session skips the login screen; the backend will reject
        // the token on the first fetch if it went stale.
        let screen = if services.session.get().is_some() {
            Screen::Dashboard(DashboardScreen::new(&services.backend))
        } else {
            Screen::default()
        };

        Self {
            services,
            sidebar_open: false,
            screen,
        }
    }

    /// Sidebar + narrow-viewport top bar, shared by every authenticated
    /// screen. Returns the successor screen when the user navigates away or
    /// logs out.
    pub(crate) fn render_chrome(&mut self, ctx: &Context, active: NavTarget) -> Option<Screen> {
        let narrow = ctx.input(|i| i.screen_rect().width()) < constants::NARROW_BREAKPOINT;

        if narrow {
            TopBottomPanel::top("topbar")
                .frame(UI_CONFIG.top_panel_frame())
                .show(ctx, |ui| {
                    if ui.button("☰").clicked() {
                        self.sidebar_open = !self.sidebar_open;
                    }
                });
        }

        let mut action = None;
        if !narrow || self.sidebar_open {
            let inner = SidePanel::left("sidebar")
                .exact_width(UI_CONFIG.sidebar_width)
                .resizable(false)
                .frame(UI_CONFIG.side_panel_frame())
                .show(ctx, |ui| render_sidebar(ui, active));
            if let Some(a) = inner.inner {
                action = Some(a);
            }

            // Collapsed mode: a tap anywhere outside the open panel dismisses it.
            if narrow && ctx.input(|i| i.pointer.any_pressed()) {
                if let Some(pos) = ctx.input(|i| i.pointer.interact_pos()) {
                    if !inner.response.rect.contains(pos) {
                        self.sidebar_open = false;
                    }
                }
            }
        }

        match action {
            Some(SidebarAction::Navigate(target)) if target != active => {
                self.sidebar_open = false;
                Some(self.screen_for(target))
            }
            Some(SidebarAction::Logout) => Some(self.logout()),
            _ => None,
        }
    }

    pub(crate) fn screen_for(&self, target: NavTarget) -> Screen {
        let backend = &self.services.backend;
        match target {
            NavTarget::Dashboard => Screen::Dashboard(DashboardScreen::new(backend)),
            NavTarget::History => Screen::History(HistoryScreen::new(backend)),
            NavTarget::Subscribe => Screen::Subscribe(SubscribeScreen::new(backend)),
            NavTarget::Profile => Screen::Profile(ProfileScreen::new(backend)),
            NavTarget::Connect => Screen::Connect(ConnectScreen::new(backend)),
        }
    }

    pub(crate) fn logout(&mut self) -> Screen {
        if let Err(err) = self.services.session.clear() {
            log::error!("Failed to clear session: {err:#}");
        }
        self.services.backend.client().clear_token();
        Screen::Login(LoginScreen::default())
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let current = mem::take(&mut self.screen);
        self.screen = current.tick(self, ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.panel_fill = UI_CONFIG.colors.central_panel;
    visuals.window_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}
