pub mod api;
pub mod audio;
pub mod board;
pub mod config;
pub mod traits;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
