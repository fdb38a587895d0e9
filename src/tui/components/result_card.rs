//! # ResultCard Component
//!
//! Shows the latest BMI result on a card tinted with the category color.
//! Stateless: everything comes in as props, and an absent result renders a
//! short hint instead of the card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph, Wrap};

use crate::core::{BmiResult, ColorToken};
use crate::tui::component::Component;

/// Terminal color for a category's color token.
pub fn token_color(token: ColorToken) -> Color {
    match token {
        ColorToken::Blue => Color::LightBlue,
        ColorToken::Green => Color::LightGreen,
        ColorToken::Orange => Color::Rgb(255, 165, 0),
        ColorToken::Red => Color::LightRed,
    }
}

pub struct ResultCard<'a> {
    pub result: Option<&'a BmiResult>,
    pub decimal_places: usize,
    pub show_message: bool,
}

impl<'a> ResultCard<'a> {
    /// Text lines of the card, in display order.
    fn lines(result: &'a BmiResult, decimal_places: usize, show_message: bool) -> Vec<Line<'a>> {
        let mut lines = vec![
            Line::from(format!("BMI: {}", result.format_bmi(decimal_places)))
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(format!("Category: {}", result.category)),
        ];
        if show_message {
            lines.push(Line::default());
            lines.push(Line::from(result.message.as_str()));
        }
        lines
    }
}

impl Component for ResultCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(result) = self.result else {
            let hint = Paragraph::new("Enter your height and weight, then press Enter.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(hint, area);
            return;
        };

        let card_style = Style::default()
            .bg(token_color(result.color()))
            .fg(Color::Black);

        let card = Paragraph::new(Self::lines(result, self.decimal_places, self.show_message))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .title("Result"),
            )
            .style(card_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(card, area);
    }
}
