use std::time::Instant;

use crossbeam_channel::Receiver;
use hemikey::Session;

use crate::controller::ControllerSource;
use crate::input::InputEvent;

pub(crate) struct EventLoopState {
    pub(crate) session: Session,
    pub(crate) needs_redraw: bool,
}

pub(crate) struct EventLoopDeps {
    pub(crate) input_rx: Receiver<InputEvent>,
    pub(crate) tick_rx: Receiver<Instant>,
    pub(crate) controller: Box<dyn ControllerSource>,
    pub(crate) started_at: Instant,
}
