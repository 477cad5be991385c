use eframe::egui::{Color32, Frame, Margin, Stroke};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub label: Color32,
    pub subdued: Color32,
    pub accent: Color32,
    pub positive: Color32,
    pub negative: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub sidebar_width: f32,
    pub card_rounding: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::WHITE,
        label: Color32::from_rgb(209, 213, 219),
        subdued: Color32::from_rgb(156, 163, 175),
        accent: Color32::from_rgb(96, 165, 250),
        positive: Color32::from_rgb(34, 197, 94),
        negative: Color32::from_rgb(239, 68, 68),
        central_panel: Color32::from_rgb(17, 24, 39),
        side_panel: Color32::from_rgb(31, 41, 55),
        card: Color32::from_rgb(26, 32, 46),
        card_border: Color32::from_rgb(55, 65, 81),
    },
    sidebar_width: 220.0,
    card_rounding: 8.0,
};

impl UiConfig {
    /// Frame for the navigation sidebar (Standard padding)
    pub fn side_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Frame for the narrow-viewport top bar (Tighter vertical padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(8, 4),
            ..Default::default()
        }
    }

    /// Frame for a content card (welcome box, trade row, modal body)
    pub fn card_frame(&self) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(12),
            corner_radius: (self.card_rounding as u8).into(),
            ..Default::default()
        }
    }
}
