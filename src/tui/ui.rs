use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{ResultCard, TitleBar};
use crate::tui::{Focus, TuiState};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

/// Widest the form gets on large terminals.
const FORM_WIDTH: u16 = 64;
/// Borders + BMI + category + spacer + up to two message lines.
const CARD_HEIGHT: u16 = 8;

const KEY_HINTS: &str = "Enter calculate · Tab switch field · Ctrl+R reset · Esc quit";

fn screen_layout(area: Rect) -> [Rect; 6] {
    use Constraint::{Length, Max, Min};

    let [column] = Layout::horizontal([Max(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let [title, height, weight, spacer, card, hints] = Layout::vertical([
        Length(1),
        Length(3),
        Length(3),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(column);

    [title, height, weight, spacer, card, hints]
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    let [title_area, height_area, weight_area, _, card_area, hints_area] =
        screen_layout(frame.area());

    let mut title_bar = TitleBar {
        notice: tui.notice.map(|n| n.text),
        busy: tui.busy,
        spinner_frame,
        ..TitleBar::new(&app.status_message)
    };
    title_bar.render(frame, title_area);

    // Sync focus props before rendering the fields
    tui.height.focused = tui.focus == Focus::Height;
    tui.weight.focused = tui.focus == Focus::Weight;
    tui.height.render(frame, height_area);
    tui.weight.render(frame, weight_area);

    let card_area = Rect {
        height: card_area.height.min(CARD_HEIGHT),
        ..card_area
    };
    let mut card = ResultCard {
        result: if tui.card_visible { app.current() } else { None },
        decimal_places: app.decimal_places,
        show_message: app.show_message,
    };
    card.render(frame, card_area);

    frame.render_widget(
        Line::from(KEY_HINTS).style(Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn render(app: &App, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui, 0)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_draw_empty_screen() {
        let mut app = App::new();
        let mut tui = TuiState::new(&mut app);
        let text = render(&app, &mut tui);
        assert!(text.contains("BMI Calculator"));
        assert!(text.contains("Height (cm)"));
        assert!(text.contains("Weight (kg)"));
        assert!(text.contains("Ctrl+R reset"));
        assert!(!text.contains("BMI:"));
    }

    #[test]
    fn test_draw_after_calculation_and_reset() {
        let mut app = App::new();
        let mut tui = TuiState::new(&mut app);
        update(
            &mut app,
            Action::Calculate {
                height: "170".to_string(),
                weight: "80".to_string(),
            },
        );
        tui.sync(Instant::now());

        let text = render(&app, &mut tui);
        assert!(text.contains("BMI: 27.7"));
        assert!(text.contains("Category: OVERWEIGHT"));
        assert!(text.contains("BMI 27.7 (OVERWEIGHT)"));

        update(&mut app, Action::Reset);
        tui.sync(Instant::now());
        let text = render(&app, &mut tui);
        assert!(!text.contains("BMI:"));
        assert!(text.contains("Cleared"));
    }

    #[test]
    fn test_layout_fits_small_terminal() {
        let [title, height, weight, _, _, hints] = screen_layout(Rect::new(0, 0, 40, 12));
        assert_eq!(title.height, 1);
        assert_eq!(height.height, 3);
        assert_eq!(weight.height, 3);
        assert_eq!(hints.y, 11);
    }
}
