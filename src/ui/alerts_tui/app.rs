use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::core::{
    build_binding, AlertSource, Config, EmptyRouting, InputBinding, InputKey, NwsClient,
    SharedSurface, ViewState,
};

use super::event_handler::{map_key, AlertsEvent, Focus};
use super::render::render_ui;

const TICK_RATE: Duration = Duration::from_millis(100);

/// Alerts application state
pub struct AlertsApp<C: AlertSource> {
    pub surface: SharedSurface<ViewState>,
    binding: InputBinding<ViewState, C>,
    pub focus: Focus,
    pub should_quit: bool,
    pub show_help: bool,
    /// Advances every tick, drives the loading spinner
    pub tick: usize,
}

impl<C: AlertSource> AlertsApp<C> {
    pub fn new(source: C, config: &Config, initial_state: Option<&str>) -> Self {
        let surface = ViewState::shared();
        if let Some(state) = initial_state {
            surface.lock().input = state.to_string();
        }

        let binding = build_binding(
            surface.clone(),
            source,
            config,
            EmptyRouting::ErrorChannel,
        );

        Self {
            surface,
            binding,
            focus: Focus::default(),
            should_quit: false,
            show_help: false,
            tick: 0,
        }
    }

    /// Handle keyboard events.
    ///
    /// Fetches are spawned on the current tokio runtime so the UI keeps
    /// drawing while a request is in flight.
    pub fn handle_event(&mut self, event: AlertsEvent) {
        match event {
            AlertsEvent::Quit => self.should_quit = true,
            AlertsEvent::ToggleHelp => self.show_help = !self.show_help,
            AlertsEvent::FocusNext => self.focus = self.focus.next(),
            AlertsEvent::PressButton => {
                let binding = self.binding.clone();
                tokio::spawn(async move {
                    binding.activate().await;
                });
            }
            AlertsEvent::SubmitInput => {
                let binding = self.binding.clone();
                tokio::spawn(async move {
                    binding.handle_key(InputKey::Enter).await;
                });
            }
            AlertsEvent::Insert(c) => self.surface.lock().input.push(c),
            AlertsEvent::Backspace => {
                self.surface.lock().input.pop();
            }
            AlertsEvent::ClearInput => self.surface.lock().input.clear(),
            AlertsEvent::None => {}
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}

/// Run the alerts TUI application
pub fn run_alerts_app(config: Config, initial_state: Option<String>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let _guard = runtime.enter();

    let client = NwsClient::from_config(&config).context("Failed to create alerts client")?;
    let mut app = AlertsApp::new(client, &config, initial_state.as_deref());

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut terminal = restore_on_error(enter_terminal(), leave_terminal)?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal even if the loop failed
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Best-effort teardown when setup fails part way
fn leave_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("Failed to disable raw mode: {}", e);
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        log::warn!("Failed to leave alternate screen: {}", e);
    }
}

/// Run `restore` when a setup step after `enable_raw_mode` failed
fn restore_on_error<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

fn run_loop<C: AlertSource>(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AlertsApp<C>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render_ui(frame, app))?;

        if event::poll(TICK_RATE).context("Event poll failed")? {
            if let Event::Key(key) = event::read().context("Event read failed")? {
                if key.kind == KeyEventKind::Press {
                    let alerts_event = map_key(key, app.focus, app.show_help);
                    app.handle_event(alerts_event);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }

        app.on_tick();
    }
}
