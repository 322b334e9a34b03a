mod app;
mod tui_event;
mod ui;

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;
use chipchip_runtime::{ApiWorker, ChipChip};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

pub use app::AppState;
pub use tui_event::TuiEvent;

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct TuiRenderer {
    state: AppState,
}

impl TuiRenderer {
    pub fn new(app: ChipChip, page_limit: usize) -> Self {
        Self {
            state: AppState::new(app, page_limit),
        }
    }

    /// Take over the terminal until the user quits.
    pub fn run(mut self) -> Result<()> {
        let (tx, rx) = mpsc::channel();
        let worker = ApiWorker::spawn(self.state.client().api().clone(), tx, TuiEvent::Api)?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, &worker, &rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        worker: &ApiWorker,
        rx: &Receiver<TuiEvent>,
    ) -> Result<()> {
        while !self.state.should_quit() {
            for request in self.state.pending_requests() {
                worker.send(request)?;
            }

            terminal.draw(|f| ui::draw(f, &mut self.state))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        for request in self.state.handle_key(key) {
                            worker.send(request)?;
                        }
                    }
                }
            }

            while let Ok(event) = rx.try_recv() {
                match event {
                    TuiEvent::Api(response) => self.state.handle_response(response),
                }
            }
        }

        tracing::info!("tui closed");
        Ok(())
    }
}
