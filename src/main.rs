use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use ratatui::DefaultTerminal;
use crossterm::event;

use wayfinder::app::App;
use wayfinder::config::{Config, load_config};
use wayfinder::form::TripRequest;
use wayfinder::location::{NominatimClient, spawn_worker};
use wayfinder::logging;

/// Plan a trip from the terminal: fill in the form, pick places as you type,
/// and get the trip request as JSON on stdout
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (default: ~/.config/wayfinder/config.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append debug logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Print the submitted request as single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    logging::init(args.log_file.as_deref())?;
    let config = load_config(args.config.as_deref())?;

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    let result = run(terminal, &config);
    ratatui::restore();

    if let Some(request) = result? {
        print_request(&request, args.compact)?;
    }
    Ok(())
}

fn run(mut terminal: DefaultTerminal, config: &Config) -> Result<Option<TripRequest>> {
    let client = NominatimClient::new(&config.lookup)
        .map_err(|e| eyre!("Cannot create location client: {}", e))?;
    let request_tx = spawn_worker(Arc::new(client))?;
    let mut app = App::new(request_tx, config.lookup.settings());

    terminal.draw(|frame| app.render(frame))?;

    loop {
        let mut dirty = false;

        if event::poll(app.poll_timeout(Instant::now()))? {
            dirty |= app.handle_event(event::read()?, Instant::now());
        }
        dirty |= app.tick(Instant::now());

        if app.should_quit() {
            break;
        }
        if dirty {
            terminal.draw(|frame| app.render(frame))?;
        }
    }

    Ok(app.take_submitted())
}

fn print_request(request: &TripRequest, compact: bool) -> Result<()> {
    println!("{}", request.to_json(compact)?);
    Ok(())
}
