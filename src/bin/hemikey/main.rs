//! Hemikey terminal host: drives the text-entry engine from the keyboard and
//! an optional scripted controller.
//!
//! # Architecture
//!
//! - Input thread: polls crossterm for key events, forwards bound keys
//! - Controller tick: fixed-rate channel; each tick samples the controller source
//! - Event loop: owns the `Session`, applies events, redraws on change

mod cli_utils;
mod controller;
mod event_loop;
mod event_state;
mod input;
mod render;

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossbeam_channel::{bounded, tick};
use hemikey::{
    config::AppConfig, init_logging, log_debug, log_debug_content, log_file_path,
    telemetry::init_tracing, terminal_restore::TerminalRestoreGuard, Session,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::cli_utils::format_catalog;
use crate::controller::{ControllerSource, DetachedController, ScriptedController};
use crate::event_loop::run_event_loop;
use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::spawn_input_thread;

const INPUT_CHANNEL_CAPACITY: usize = 256;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    let catalog = config.load_catalog()?;
    if config.print_catalog {
        print!("{}", format_catalog(&catalog));
        return Ok(());
    }

    init_logging(&config);
    init_tracing(&config);
    log_debug("=== hemikey started ===");
    log_debug(&format!("log file: {}", log_file_path().display()));

    let tuning = config.input_tuning();
    let controller: Box<dyn ControllerSource> = match &config.controller_script {
        Some(path) => Box::new(ScriptedController::load(path)?),
        None => Box::new(DetachedController),
    };
    log_debug(&format!("controller source: {}", controller.label()));

    let terminal_guard = TerminalRestoreGuard::new();
    let mut stdout = io::stdout();
    terminal_guard.enter_full_screen(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let (input_tx, input_rx) = bounded(INPUT_CHANNEL_CAPACITY);
    let input_thread = spawn_input_thread(input_tx);

    let mut state = EventLoopState {
        session: Session::new(catalog, &tuning),
        needs_redraw: true,
    };
    let mut deps = EventLoopDeps {
        input_rx,
        tick_rx: tick(tuning.poll_interval),
        controller,
        started_at: Instant::now(),
    };

    let result = run_event_loop(&mut state, &mut deps, &mut terminal);

    drop(input_thread);
    drop(terminal);
    terminal_guard.restore();

    let output = state.session.view().output;
    log_debug_content(&format!("final output: {output}"));
    if !output.is_empty() {
        println!("{output}");
    }
    log_debug("=== hemikey exiting ===");
    result
}
