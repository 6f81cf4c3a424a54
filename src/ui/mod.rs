//! Terminal adapter for the board's presentation seams.

pub mod command;
pub mod console;

pub use command::{Input, parse_input};
pub use console::{ConsoleNotifier, ConsoleView};
