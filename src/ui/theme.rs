//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Viridis colormap anchors, sampled at even steps from 0.0 to 1.0.
const VIRIDIS: [(u8, u8, u8); 9] = [
    (68, 1, 84),
    (71, 44, 122),
    (59, 81, 139),
    (44, 113, 142),
    (33, 144, 141),
    (39, 173, 129),
    (92, 200, 99),
    (170, 220, 50),
    (253, 231, 37),
];

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for error dialogs.
    pub error: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Humidity series color.
    pub humidity: Color,
    /// Current-time marker color.
    pub now_line: Color,
    /// Cursor line and tooltip border color.
    pub cursor: Color,
    /// Style for titles.
    pub header: Style,
    /// Style for the focused widget's border.
    pub focused: Style,
    /// Style for unfocused widget borders.
    pub unfocused: Style,
    /// Style for the fetch button.
    pub button: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            error: Color::Red,
            border: Color::Gray,
            humidity: Color::Rgb(102, 179, 255),
            now_line: Color::Rgb(255, 99, 71),
            cursor: Color::Red,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            focused: Style::default().fg(Color::Cyan),
            unfocused: Style::default().fg(Color::Gray),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(78, 93, 108))
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            error: Color::Red,
            border: Color::DarkGray,
            humidity: Color::Rgb(30, 110, 200),
            now_line: Color::Rgb(220, 70, 40),
            cursor: Color::Red,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            focused: Style::default().fg(Color::Blue),
            unfocused: Style::default().fg(Color::DarkGray),
            button: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Border style for a widget depending on focus.
    pub fn focus_style(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            self.unfocused
        }
    }

    /// Gradient color for temperature shade `shade` out of `levels`.
    pub fn temperature_color(&self, shade: usize, levels: usize) -> Color {
        let frac = if levels > 1 {
            shade.min(levels - 1) as f64 / (levels - 1) as f64
        } else {
            0.0
        };
        viridis(frac)
    }
}

/// Interpolate the viridis colormap at `frac` in `[0, 1]`.
pub fn viridis(frac: f64) -> Color {
    let frac = frac.clamp(0.0, 1.0);
    let scaled = frac * (VIRIDIS.len() - 1) as f64;
    let lo = (scaled.floor() as usize).min(VIRIDIS.len() - 1);
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    let t = scaled - lo as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    let (r0, g0, b0) = VIRIDIS[lo];
    let (r1, g1, b1) = VIRIDIS[hi];
    Color::Rgb(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
