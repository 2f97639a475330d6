use ratatui::style::{Color, Modifier, Style};

use super::keypad::ButtonKind;

#[derive(Debug)]
pub struct Theme {
    pub card_border: Color,
    pub header: Color,   // Grey
    pub pending: Color,  // Muted grey
    pub display: Color,  // White
    pub display_bg: Color,
    pub number_fg: Color,
    pub number_bg: Color,
    pub operator_fg: Color, // Indigo
    pub operator_bg: Color,
    pub action_fg: Color,
    pub action_bg: Color,
    pub equals_fg: Color,
    pub equals_bg: Color, // Strong indigo
    pub help: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    card_border: Color::Rgb(243, 244, 246),
    header: Color::Rgb(156, 163, 175),
    pending: Color::Rgb(156, 163, 175),
    display: Color::Rgb(255, 255, 255),
    display_bg: Color::Rgb(17, 24, 39),
    number_fg: Color::Rgb(31, 41, 55),
    number_bg: Color::Rgb(255, 255, 255),
    operator_fg: Color::Rgb(67, 56, 202),
    operator_bg: Color::Rgb(224, 231, 255),
    action_fg: Color::Rgb(31, 41, 55),
    action_bg: Color::Rgb(229, 231, 235),
    equals_fg: Color::Rgb(255, 255, 255),
    equals_bg: Color::Rgb(79, 70, 229),
    help: Color::Rgb(107, 114, 128),
};

impl Theme {
    /// Style of a keypad button, inverted while it is pressed
    #[must_use]
    pub fn button(&self, kind: ButtonKind, pressed: bool) -> Style {
        let (fg, bg) = match kind {
            ButtonKind::Number => (self.number_fg, self.number_bg),
            ButtonKind::Operator => (self.operator_fg, self.operator_bg),
            ButtonKind::Action => (self.action_fg, self.action_bg),
            ButtonKind::Equals => (self.equals_fg, self.equals_bg),
        };

        if pressed {
            Style::default()
                .fg(bg)
                .bg(fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(fg).bg(bg)
        }
    }
}
