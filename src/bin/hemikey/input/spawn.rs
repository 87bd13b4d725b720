use crossbeam_channel::Sender;
use crossterm::event;
use hemikey::log_debug;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::thread;
use std::time::Duration;

use crate::input::event::{map_terminal_event, InputEvent};

const INPUT_POLL_MS: u64 = 25;

/// Terminal input reader. Dropping it stops the thread and joins it.
pub(crate) struct InputThread {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Drop for InputThread {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log_debug("input thread panicked");
            }
        }
    }
}

pub(crate) fn spawn_input_thread(tx: Sender<InputEvent>) -> InputThread {
    let stop = Arc::new(AtomicBool::new(false));
    let thread_stop = Arc::clone(&stop);
    let handle = thread::spawn(move || {
        while !thread_stop.load(Ordering::SeqCst) {
            // Poll with a timeout so the stop flag is observed promptly.
            match event::poll(Duration::from_millis(INPUT_POLL_MS)) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    log_debug(&format!("terminal poll error: {err}"));
                    break;
                }
            }
            let terminal_event = match event::read() {
                Ok(terminal_event) => terminal_event,
                Err(err) => {
                    log_debug(&format!("terminal read error: {err}"));
                    break;
                }
            };
            if let Some(input) = map_terminal_event(terminal_event) {
                if tx.send(input).is_err() {
                    return;
                }
            }
        }
    });
    InputThread {
        stop,
        handle: Some(handle),
    }
}
