use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::select;
use hemikey::{log_debug, log_debug_content};
use ratatui::{backend::Backend, Terminal};

use crate::event_state::{EventLoopDeps, EventLoopState};
use crate::input::InputEvent;
use crate::render;

const EVENT_LOOP_IDLE_MS: u64 = 100;

fn handle_input(state: &mut EventLoopState, event: InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => {
            if state.session.handle_key(key, Instant::now()) {
                log_debug(&format!("key {key} changed state"));
                state.needs_redraw = true;
            }
            true
        }
        InputEvent::Redraw => {
            state.needs_redraw = true;
            true
        }
        InputEvent::Exit => false,
    }
}

fn run_controller_tick(state: &mut EventLoopState, deps: &mut EventLoopDeps) {
    let now = Instant::now();
    let elapsed = now.duration_since(deps.started_at);
    for connected in deps.controller.take_notifications(elapsed) {
        log_debug(&format!("controller notification: connected={connected}"));
        if state.session.controller_notification(connected) {
            state.needs_redraw = true;
        }
    }
    let frame = deps.controller.snapshot(elapsed);
    if state.session.controller_tick(now, frame) {
        state.needs_redraw = true;
    }
}

/// Run a parked controller frame once its throttle window has closed.
fn flush_due_controller_frame(state: &mut EventLoopState) {
    let now = Instant::now();
    let due = state
        .session
        .controller_flush_deadline()
        .is_some_and(|deadline| deadline <= now);
    if due && state.session.controller_flush(now) {
        state.needs_redraw = true;
    }
}

fn wait_timeout(state: &EventLoopState) -> Duration {
    let idle = Duration::from_millis(EVENT_LOOP_IDLE_MS);
    match state.session.controller_flush_deadline() {
        Some(deadline) => deadline.saturating_duration_since(Instant::now()).min(idle),
        None => idle,
    }
}

pub(crate) fn run_event_loop<B: Backend>(
    state: &mut EventLoopState,
    deps: &mut EventLoopDeps,
    terminal: &mut Terminal<B>,
) -> Result<()> {
    let controller_label = deps.controller.label();
    let input_rx = deps.input_rx.clone();
    let tick_rx = deps.tick_rx.clone();
    let mut running = true;
    while running {
        if state.needs_redraw {
            let view = state.session.view();
            terminal.draw(|frame| render::draw(frame, &view, controller_label))?;
            state.needs_redraw = false;
        }
        let timeout = wait_timeout(state);
        select! {
            recv(input_rx) -> event => {
                match event {
                    Ok(event) => running = handle_input(state, event),
                    Err(_) => running = false,
                }
            }
            recv(tick_rx) -> _ => run_controller_tick(state, deps),
            default(timeout) => {}
        }
        flush_due_controller_frame(state);
    }
    log_debug_content(&format!("event loop exit, output: {}", state.session.view().output));
    Ok(())
}
