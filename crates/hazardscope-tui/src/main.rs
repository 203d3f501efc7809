//! hazardscope-tui — interactive terminal dashboard
//!
//! Country and year selection with the arrow keys stands in for the
//! dashboard dropdowns; Tab cycles the main panel between the hotspot
//! map, the disaster-type bar chart, and the risk profile.

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use hazardscope_core::DisasterStore;
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "hazardscope-tui", version, about = "Terminal dashboard for the hazardscope disaster datasets")]
struct Args {
    /// Directory containing the dataset files
    #[arg(short = 'd', long = "data-dir", default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load before touching the terminal so errors print normally.
    let store = DisasterStore::load_from_dir(&args.data_dir)
        .with_context(|| format!("loading datasets from {}", args.data_dir.display()))?;

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, App::new(store));
    ratatui::restore();

    result
}

fn run(terminal: &mut DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

                        KeyCode::Left | KeyCode::Char('h') => app.prev_country(),
                        KeyCode::Right | KeyCode::Char('l') => app.next_country(),
                        KeyCode::Up | KeyCode::Char('k') => app.prev_year(),
                        KeyCode::Down | KeyCode::Char('j') => app.next_year(),

                        KeyCode::Tab => app.cycle_panel(),

                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
