//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the calculator
//! screen, and translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Observing the core
//!
//! `TuiState` subscribes to the App's `result` and `is_loading` observables
//! when it is created and drains both receivers once per loop iteration.
//! The result card is shown or hidden from what the observer saw, not by the
//! key handler, so a calculation that silently fails leaves the card as is.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (busy spinner or a notice waiting to expire): redraws every ~80ms.
//! - **Idle**: sleeps up to 500ms, only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::BmiResult;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, InputField};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

pub const BLANK_INPUT_NOTICE: &str = "Please enter both height and weight";
/// How long a notice stays in the title bar.
pub const NOTICE_DURATION: Duration = Duration::from_secs(2);

/// Which input receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Height,
    Weight,
}

impl Focus {
    fn toggle(self) -> Self {
        match self {
            Focus::Height => Focus::Weight,
            Focus::Weight => Focus::Height,
        }
    }
}

/// A short-lived message in the title bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub text: &'static str,
    pub expires_at: Instant,
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub height: InputField,
    pub weight: InputField,
    pub focus: Focus,
    pub notice: Option<Notice>,
    /// Last value seen on the result observer
    pub card_visible: bool,
    /// Last value seen on the busy observer
    pub busy: bool,
    result_rx: Receiver<Option<BmiResult>>,
    busy_rx: Receiver<bool>,
}

impl TuiState {
    pub fn new(app: &mut App) -> Self {
        Self {
            height: InputField::new("Height (cm)"),
            weight: InputField::new("Weight (kg)"),
            focus: Focus::Height,
            notice: None,
            card_visible: app.current().is_some(),
            busy: *app.is_loading.get(),
            result_rx: app.result.subscribe(),
            busy_rx: app.is_loading.subscribe(),
        }
    }

    fn focused_field(&mut self) -> &mut InputField {
        match self.focus {
            Focus::Height => &mut self.height,
            Focus::Weight => &mut self.weight,
        }
    }

    /// Drain the observers and expire old notices. Returns true if anything
    /// visible changed.
    pub fn sync(&mut self, now: Instant) -> bool {
        let mut changed = false;

        for result in self.result_rx.try_iter() {
            self.card_visible = result.is_some();
            changed = true;
        }
        for busy in self.busy_rx.try_iter() {
            self.busy = busy;
            changed = true;
        }
        if self.notice.is_some_and(|n| now >= n.expires_at) {
            self.notice = None;
            changed = true;
        }

        changed
    }

    fn show_notice(&mut self, text: &'static str, now: Instant) {
        self.notice = Some(Notice {
            text,
            expires_at: now + NOTICE_DURATION,
        });
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,                        // Show cursor for input editing
            SetCursorStyle::SteadyBlock  // Blinking gets reset by every draw()
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

/// Apply one terminal event to the screen. Returns `Effect::Quit` when the
/// loop should stop.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent, now: Instant) -> Effect {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::Quit | TuiEvent::ForceQuit => update(app, Action::Quit),
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            tui.focus = tui.focus.toggle();
            Effect::None
        }
        TuiEvent::Submit => {
            if tui.height.is_blank() || tui.weight.is_blank() {
                debug!("Submit with blank field");
                tui.show_notice(BLANK_INPUT_NOTICE, now);
                return Effect::None;
            }
            tui.notice = None;
            update(
                app,
                Action::Calculate {
                    height: tui.height.value().to_string(),
                    weight: tui.weight.value().to_string(),
                },
            )
        }
        TuiEvent::Reset => {
            tui.height.clear();
            tui.weight.clear();
            tui.focus = Focus::Height;
            tui.notice = None;
            update(app, Action::Reset)
        }
        other => {
            // Editing a field answers the blank-input notice
            if tui.focused_field().handle_event(&other) == Some(FieldEvent::ContentChanged) {
                tui.notice = None;
            }
            Effect::None
        }
    }
}

pub fn run(config: &ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(config);
    let mut tui = TuiState::new(&mut app);

    let mut terminal = ratatui::init();
    let outcome = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &mut app, &mut tui));
    ratatui::restore();

    info!("Calculator screen closed");
    outcome
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut App, tui: &mut TuiState) -> std::io::Result<()> {
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if tui.sync(Instant::now()) {
            needs_redraw = true;
        }

        let animating = tui.busy || tui.notice.is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, app, tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        if next.is_some() {
            needs_redraw = true;
        }
        while let Some(event) = next {
            if handle_event(app, tui, event, Instant::now()) == Effect::Quit {
                return Ok(());
            }
            next = poll_event_immediate()?;
        }
    }
}
