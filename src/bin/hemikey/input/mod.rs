mod event;
mod spawn;

pub(crate) use event::{map_terminal_event, InputEvent};
pub(crate) use spawn::{spawn_input_thread, InputThread};
