//! Interactive TUI form.

mod form;
mod input;
mod text;

pub use input::*;
pub use text::*;

/// Run TUI interactive mode.
pub fn run() {
    form::run();
}
