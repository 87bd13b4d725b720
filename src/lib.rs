//! Hemispherical text-entry engine.
//!
//! Rotate a virtual hemisphere to pick a sector (row of characters), pick one
//! character inside it, and append it to an output buffer. Keyboard events and
//! a polled game controller feed the same action vocabulary through one
//! reducer; rate limiting keeps held inputs from firing repeatedly.

mod app;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod input;
pub mod output;
pub mod rate_limit;
pub mod rotation;
pub mod selection;
pub mod session;
pub mod telemetry;
pub mod terminal_restore;

pub use app::{
    crash_log_path, init_logging, log_debug, log_debug_content, log_file_path, log_panic,
    logging_enabled,
};
pub use catalog::{CatalogError, SelectionCatalog};
pub use engine::{Action, Engine, Outcome};
pub use input::{ControllerFrame, GamepadButton, InputTuning, StickAxes};
pub use selection::{CharDirection, RowDirection};
pub use session::{Session, SessionView};
