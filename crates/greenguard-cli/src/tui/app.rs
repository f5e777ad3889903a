//! TUI application state and event loop.
//!
//! The app owns the engine and drives it from a single poll loop: draw,
//! handle one key if available, then `advance` the engine with the current
//! instant. All timing lives in the engine; the loop only feeds it time.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use greenguard_core::engine::{Engine, InputEvent};
use greenguard_core::view::{ALL_VIEWS, ViewId};

pub struct App {
    pub engine: Engine,
    /// Text being typed into the chat box.
    pub input: String,
    /// When true, printable keys go to the chat box instead of shortcuts.
    pub chat_focused: bool,
    running: bool,
}

impl App {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            input: String::new(),
            chat_focused: false,
            running: true,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        // Install panic hook that restores terminal before printing the panic.
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, crossterm::cursor::Show);
            original_hook(info);
        }));

        let result = self.run_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error.
        let _ = std::panic::take_hook();
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            crossterm::cursor::Show
        )?;

        result
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        while self.running {
            terminal.draw(|f| super::ui::draw(f, self))?;

            if event::poll(Duration::from_millis(50))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                self.handle_key(key.code);
            }

            self.engine.advance(Instant::now());
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.chat_focused {
            match key {
                KeyCode::Esc => self.chat_focused = false,
                KeyCode::Enter => {
                    let text = std::mem::take(&mut self.input);
                    self.engine
                        .handle(InputEvent::SubmitMessage(text), Instant::now());
                }
                KeyCode::Backspace => {
                    self.input.pop();
                }
                KeyCode::Char(c) => self.input.push(c),
                _ => {}
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Char('d') => self
                .engine
                .handle(InputEvent::ToggleDemoMode, Instant::now()),
            KeyCode::Char('e') => self.engine.handle(InputEvent::ExportReport, Instant::now()),
            KeyCode::Char('/') | KeyCode::Char('i') => self.chat_focused = true,
            KeyCode::Tab => {
                let next = next_view(self.engine.active_view());
                self.engine
                    .handle(InputEvent::SelectView(next), Instant::now());
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.engine
                    .handle(InputEvent::SelectView(ALL_VIEWS[idx]), Instant::now());
            }
            _ => {}
        }
    }
}

/// Next view in sidebar order, wrapping.
fn next_view(current: ViewId) -> ViewId {
    let pos = ALL_VIEWS
        .iter()
        .position(|v| *v == current)
        .expect("active view is always in the sidebar");
    ALL_VIEWS[(pos + 1) % ALL_VIEWS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_view_cycles_sidebar_order() {
        let mut view = ViewId::Overview;
        let mut seen = Vec::new();
        for _ in 0..ALL_VIEWS.len() {
            view = next_view(view);
            seen.push(view);
        }
        assert_eq!(view, ViewId::Overview);
        assert_eq!(seen.len(), ALL_VIEWS.len());
    }

    #[test]
    fn test_typed_input_reaches_engine_on_enter() {
        let t0 = Instant::now();
        let mut app = App::new(Engine::seeded(1, t0));
        app.chat_focused = true;
        for c in "xin chào".chars() {
            app.handle_key(KeyCode::Char(c));
        }
        app.handle_key(KeyCode::Enter);

        assert!(app.input.is_empty());
        let last = app.engine.messages().last().unwrap();
        assert_eq!(last.body, "xin chào");
    }

    #[test]
    fn test_shortcuts_ignored_while_chat_focused() {
        let t0 = Instant::now();
        let mut app = App::new(Engine::seeded(1, t0));
        app.chat_focused = true;
        app.handle_key(KeyCode::Char('d'));
        assert!(!app.engine.demo_mode());
        assert_eq!(app.input, "d");
    }

    #[test]
    fn test_number_keys_select_views() {
        let t0 = Instant::now();
        let mut app = App::new(Engine::seeded(1, t0));
        app.handle_key(KeyCode::Char('3'));
        assert_eq!(app.engine.active_view(), ViewId::Map);
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.engine.active_view(), ViewId::Alerts);
    }
}
