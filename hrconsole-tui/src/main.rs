mod app;
mod error;
mod input;
mod overlay;
mod pages;
mod paths;
mod presentation;
mod settings;
mod toast;
mod ui;

use std::fs::{self, File};
use std::process::ExitCode;

use log::{error, info};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::AppError;
use crate::pages::PageId;
use crate::settings::Settings;
use crate::ui::Terminal;

fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent() {
        let _ = fs::create_dir_all(dir);
    }
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), file);
    }
}

fn run() -> Result<(), AppError> {
    let settings_path = paths::settings_file();
    let settings = match &settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let start = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<PageId>()?,
        None => settings.start_page,
    };

    let mut app = App::new(settings, settings_path, start)?;
    let mut terminal = Terminal::new()?;
    let result = app.run(&mut terminal);
    drop(terminal);
    result
}

fn main() -> ExitCode {
    init_logging();
    info!("hrconsole {} starting", env!("CARGO_PKG_VERSION"));

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
