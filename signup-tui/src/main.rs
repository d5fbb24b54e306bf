mod app;
mod error;
mod event;
mod input;
mod paths;
mod render;
mod terminal;

use std::fs::{self, File};
use std::process::ExitCode;

use crossterm::event::Event as CrosstermEvent;
use signup_core::ValidationRules;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::TuiError;
use crate::terminal::Terminal;

fn main() -> ExitCode {
    if let Err(e) = init_logging() {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Log to a file in the cache dir; stdout belongs to the form.
fn init_logging() -> Result<(), TuiError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    paths::rotate_logs();
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    Ok(())
}

fn load_rules() -> Result<ValidationRules, TuiError> {
    match paths::rules_file() {
        Some(path) => Ok(ValidationRules::load_or_default(&path)?),
        None => Ok(ValidationRules::default()),
    }
}

fn run() -> Result<(), TuiError> {
    let rules = load_rules()?;
    let mut app = App::new(rules);
    let mut terminal = Terminal::new()?;
    log::info!("registration form started");

    let mut dirty = true;
    while !app.should_quit() {
        if dirty {
            terminal.draw(&render::layout(&app))?;
        }
        dirty = match terminal.read()? {
            CrosstermEvent::Key(key) => match event::translate(key) {
                Some(action) => app.handle(action),
                None => false,
            },
            CrosstermEvent::Resize(width, height) => {
                log::debug!("resized to {}x{}", width, height);
                true
            }
            _ => false,
        };
    }

    log::info!("registration form closed");
    Ok(())
}
