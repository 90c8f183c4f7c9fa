use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use explorer_core::{update, AppState, Msg};
use explorer_logging::{explorer_debug, explorer_info};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;
use super::ui::{
    input::{map_key, InputAction},
    layout::ScreenLayout,
    render,
    theme::Theme,
};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

type Term = Terminal<CrosstermBackend<Stdout>>;

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    logging::initialize(config.log_level);
    explorer_info!(
        "Starting movie explorer base_url={} api_key_present={}",
        config.api.base_url,
        config.api_key.is_some()
    );

    let effects = EffectRunner::new(config.api.clone()).context("failed to start engine")?;
    let mut app = App::new(AppState::new(config.api_key), effects);

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = app.run(&mut terminal);

    // Always restore the terminal, even when the loop failed.
    if let Err(err) = cleanup_terminal() {
        eprintln!("Warning: terminal cleanup failed: {err}");
    }
    result
}

fn setup_terminal() -> io::Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

struct App {
    state: AppState,
    effects: EffectRunner,
    theme: Theme,
    layout: Option<ScreenLayout>,
    needs_redraw: bool,
}

impl App {
    fn new(state: AppState, effects: EffectRunner) -> Self {
        Self {
            state,
            effects,
            theme: Theme::default(),
            layout: None,
            needs_redraw: true,
        }
    }

    fn run(&mut self, terminal: &mut Term) -> anyhow::Result<()> {
        self.dispatch_msg(Msg::Started);

        loop {
            if self.needs_redraw {
                let view = self.state.view();
                let theme = &self.theme;
                let mut drawn = None;
                terminal.draw(|frame| drawn = Some(render::render(frame, &view, theme)))?;
                self.layout = drawn;
                self.needs_redraw = false;
            }

            if event::poll(POLL_INTERVAL)? && !self.handle_event(event::read()?) {
                explorer_info!("Quit requested");
                return Ok(());
            }

            for msg in self.effects.drain_messages() {
                self.dispatch_msg(msg);
            }
        }
    }

    /// Returns `false` when the user asked to quit.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match map_key(key, &self.state.view()) {
                    InputAction::Dispatch(msg) => self.dispatch_msg(msg),
                    InputAction::Quit => return false,
                    InputAction::Ignored => {}
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let msgs = match &self.layout {
                    Some(layout) => {
                        layout.hit_test(mouse.column, mouse.row, self.state.sort_menu_open())
                    }
                    None => Vec::new(),
                };
                for msg in msgs {
                    self.dispatch_msg(msg);
                }
            }
            Event::Resize(..) => self.needs_redraw = true,
            _ => {}
        }
        true
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        explorer_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.needs_redraw = true;
        }
        self.state = state;
        self.effects.enqueue(effects);
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::Started => "Started",
        Msg::SearchInput(_) => "SearchInput",
        Msg::PrevPageClicked => "PrevPageClicked",
        Msg::NextPageClicked => "NextPageClicked",
        Msg::SortMenuToggled => "SortMenuToggled",
        Msg::SortSelected(_) => "SortSelected",
        Msg::SortMenuDismissed => "SortMenuDismissed",
        Msg::FetchSucceeded { .. } => "FetchSucceeded",
        Msg::FetchFailed { .. } => "FetchFailed",
        Msg::NoOp => "NoOp",
    }
}
