pub mod canvas;
pub mod config;
pub mod constants;
pub mod types;

pub use canvas::{Canvas, CircleCommand, DisplayList};
pub use config::{ConfigError, SimConfig};
pub use constants::*;
pub use types::*;
