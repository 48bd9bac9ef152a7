//! Field chrome: the bordered box a form widget draws around its value.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Borders};

/// Visual state a field's border reflects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldState {
    /// The field has input focus.
    pub focused: bool,
    /// The last validation failed.
    pub has_error: bool,
    /// The field ignores input.
    pub disabled: bool,
}

/// Border colour for a field: red with an error, dark gray when disabled,
/// cyan when focused, gray otherwise.
pub fn border_color(state: FieldState) -> Color {
    if state.has_error {
        Color::Red
    } else if state.disabled {
        Color::DarkGray
    } else if state.focused {
        Color::Cyan
    } else {
        Color::Gray
    }
}

/// A rounded, fully bordered block coloured after `state`.
pub fn field_block(state: FieldState) -> Block<'static> {
    Block::new()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color(state)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins_over_focus() {
        let state = FieldState {
            focused: true,
            has_error: true,
            disabled: false,
        };
        assert_eq!(border_color(state), Color::Red);
    }

    #[test]
    fn focus_and_idle_colours() {
        let focused = FieldState {
            focused: true,
            ..FieldState::default()
        };
        assert_eq!(border_color(focused), Color::Cyan);
        assert_eq!(border_color(FieldState::default()), Color::Gray);
    }

    #[test]
    fn disabled_is_dimmed() {
        let disabled = FieldState {
            focused: true,
            disabled: true,
            has_error: false,
        };
        assert_eq!(border_color(disabled), Color::DarkGray);
    }
}
