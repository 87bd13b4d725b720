//! Where the host gets controller frames from.
//!
//! There is no native gamepad backend; the host either runs with a detached
//! controller or replays a JSON-lines script of frames and hot-plug events.

mod script;

use hemikey::ControllerFrame;
use std::time::Duration;

pub(crate) use script::ScriptedController;

/// Polled by the event loop on every controller tick.
pub(crate) trait ControllerSource {
    /// Connect (`true`) and disconnect (`false`) notices that became due by `elapsed`.
    fn take_notifications(&mut self, elapsed: Duration) -> Vec<bool>;

    /// Current snapshot as of `elapsed` since the host started.
    fn snapshot(&mut self, elapsed: Duration) -> ControllerFrame;

    fn label(&self) -> &'static str;
}

/// No controller attached; every snapshot is disconnected.
pub(crate) struct DetachedController;

impl ControllerSource for DetachedController {
    fn take_notifications(&mut self, _elapsed: Duration) -> Vec<bool> {
        Vec::new()
    }

    fn snapshot(&mut self, _elapsed: Duration) -> ControllerFrame {
        ControllerFrame::disconnected()
    }

    fn label(&self) -> &'static str {
        "detached"
    }
}
