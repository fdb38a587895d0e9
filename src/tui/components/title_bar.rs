//! # TitleBar Component
//!
//! Top status bar showing the app name, the status message, and transient
//! notices.
//!
//! ## Conditional Formatting
//!
//! 1. **Notice**: `"BMI Calculator | Please enter both height and weight"` (yellow)
//! 2. **Busy**: `"BMI Calculator ⠋ | Ready"`
//! 3. **Default**: `"BMI Calculator | BMI 22.5 (NORMAL)"`
//!
//! A notice wins over the status message because it answers the last key
//! the user pressed.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar.
///
/// # Props
///
/// - `status_message`: From core App state
/// - `notice`: Transient TUI message (the blank-input warning)
/// - `busy`: Mirrors the core busy flag
/// - `spinner_frame`: Animation counter
pub struct TitleBar<'a> {
    pub status_message: &'a str,
    pub notice: Option<&'a str>,
    pub busy: bool,
    pub spinner_frame: usize,
}

impl<'a> TitleBar<'a> {
    pub fn new(status_message: &'a str) -> Self {
        Self {
            status_message,
            notice: None,
            busy: false,
            spinner_frame: 0,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "BMI Calculator",
            Style::default().add_modifier(Modifier::BOLD),
        )];

        if self.busy {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::styled(
                format!(" {glyph}"),
                Style::default().fg(Color::Cyan),
            ));
        }

        match self.notice {
            Some(notice) => {
                spans.push(Span::raw(" | "));
                spans.push(Span::styled(
                    notice.to_string(),
                    Style::default().fg(Color::Yellow),
                ));
            }
            None if !self.status_message.is_empty() => {
                spans.push(Span::raw(format!(" | {}", self.status_message)));
            }
            None => {}
        }

        frame.render_widget(Line::from(spans), area);
    }
}
