//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI components:
//! - Add new colors to the appropriate module
//! - Use `theme::module::CONSTANT` in render files
//! - Do NOT hardcode `Color::*` values directly in render files
//!
//! Theme: Harbor - muted vessel colors on a deep navy background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(22, 27, 45);
    pub const BG_SURFACE: Color = Color::Rgb(32, 38, 60);
    pub const BG_HOVER: Color = Color::Rgb(45, 52, 80);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const BLACK: Color = Color::Rgb(10, 10, 14);
}

/// Vessel rectangle colors
pub mod vessels {
    use super::*;

    /// Cyclic fill palette (seaborn "muted")
    pub const PALETTE: [Color; 6] = [
        Color::Rgb(72, 120, 208),
        Color::Rgb(238, 133, 74),
        Color::Rgb(106, 204, 100),
        Color::Rgb(214, 95, 95),
        Color::Rgb(149, 108, 180),
        Color::Rgb(140, 97, 60),
    ];

    /// Fill color for the vessel at `index`
    pub fn vessel_color(index: usize) -> Color {
        PALETTE[index % PALETTE.len()]
    }
}

/// Chart pane styles
pub mod chart {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const AXIS_LABEL: Color = palette::TEXT_MUTED;
    pub const EMPTY_HINT: Color = palette::TEXT_DIM;

    pub const VESSEL_BORDER: Color = palette::BLACK;
    pub const VESSEL_LABEL: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
}

/// Hover tooltip styles
pub mod tooltip {
    use super::*;

    pub const BORDER: Color = palette::TEXT;
    pub const BACKGROUND: Color = palette::BG_SURFACE;
    pub const TEXT: Color = palette::TEXT;
}

/// Draw button styles
pub mod button {
    use super::*;

    pub const BORDER: Color = palette::TEXT_MUTED;
    pub const BORDER_HOVERED: Color = palette::CYAN;
    pub const TEXT: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);
    pub const BACKGROUND_HOVERED: Color = palette::BG_HOVER;
}

/// Notification overlay colors
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = palette::BG_SURFACE;
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = palette::BLACK;
    pub const WARNING_BG: Color = Color::Rgb(236, 196, 86);
    pub const WARNING_BORDER: Color = Color::Rgb(236, 196, 86);

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = Color::Rgb(170, 52, 62);
    pub const ERROR_BORDER: Color = Color::Rgb(232, 98, 106);
}

/// Help line styles (bottom of screen)
pub mod help_line {
    use super::*;

    pub const KEY: Color = Color::Rgb(130, 133, 158);
    pub const DESCRIPTION: Color = Color::Rgb(90, 92, 119);
    pub const SEPARATOR: Color = Color::Rgb(90, 92, 119);
}
