//! # InputField Component
//!
//! Single-line numeric input used for height and weight.
//!
//! ## Responsibilities
//!
//! - Capture characters that can appear in a decimal number
//! - Handle editing (backspace, delete, cursor movement, paste)
//! - Show a focus highlight and place the terminal cursor when focused
//!
//! Enter and focus changes are not handled here; the parent decides what
//! they mean for the screen as a whole.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Events emitted by the InputField
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEvent {
    ContentChanged,
    CursorMoved,
}

/// Bordered single-line input.
///
/// # Props
///
/// - `label`: Title shown in the border
/// - `focused`: Whether this field receives keystrokes (from TUI state)
///
/// # State
///
/// - `buffer`: Current text
/// - `cursor`: Byte offset of the cursor in `buffer`
pub struct InputField {
    pub label: &'static str,
    pub focused: bool,
    buffer: String,
    cursor: usize,
}

/// Characters a decimal number may contain (digits, sign, point, exponent).
fn accepts(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

impl InputField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            focused: false,
            buffer: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn is_blank(&self) -> bool {
        self.buffer.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn insert(&mut self, text: &str) -> Option<FieldEvent> {
        let accepted: String = text.chars().filter(|c| accepts(*c)).collect();
        if accepted.is_empty() {
            return None;
        }
        self.buffer.insert_str(self.cursor, &accepted);
        self.cursor += accepted.len();
        Some(FieldEvent::ContentChanged)
    }

    fn move_to(&mut self, pos: usize) -> Option<FieldEvent> {
        (self.cursor != pos).then(|| {
            self.cursor = pos;
            FieldEvent::CursorMoved
        })
    }
}

impl Component for InputField {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(self.label);

        let input = Paragraph::new(self.buffer.as_str()).block(block);
        frame.render_widget(input, area);

        if self.focused {
            // Buffer is ASCII only, so byte offset == column
            let col = u16::try_from(self.cursor).unwrap_or(u16::MAX);
            let max_x = area.x.saturating_add(area.width.saturating_sub(2));
            let x = area.x.saturating_add(1).saturating_add(col).min(max_x);
            frame.set_cursor_position((x, area.y.saturating_add(1)));
        }
    }
}

impl EventHandler for InputField {
    type Event = FieldEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => self.insert(c.encode_utf8(&mut [0; 4])),
            TuiEvent::Paste(text) => self.insert(text.trim()),
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                self.cursor -= 1;
                self.buffer.remove(self.cursor);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                self.buffer.remove(self.cursor);
                Some(FieldEvent::ContentChanged)
            }
            TuiEvent::CursorLeft => self.move_to(self.cursor.saturating_sub(1)),
            TuiEvent::CursorRight => self.move_to((self.cursor + 1).min(self.buffer.len())),
            TuiEvent::CursorHome => self.move_to(0),
            TuiEvent::CursorEnd => self.move_to(self.buffer.len()),
            _ => None,
        }
    }
}
