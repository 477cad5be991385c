mod pagination;
mod sidebar;
pub mod styles;
mod ticker;
mod trade_list;
mod ui_config;
mod ui_text;

pub use pagination::{Pager, pagination_controls};
pub use sidebar::{NavTarget, SidebarAction, render_sidebar};
pub use ticker::TickerBoard;
pub use trade_list::{format_timestamp, render_no_trades, render_trade_rows};
pub use ui_config::{UI_CONFIG, UiConfig};
pub use ui_text::{UI_TEXT, UiText};
