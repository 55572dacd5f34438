//! Configuration
//!
//! `MentionsOptions` are the widget's options. `Config` is the TOML file the
//! demo binary reads from `~/.config/mentions/config.toml`.

mod loader;
mod options;
mod types;

pub use loader::{config_path, load_config, load_config_from_path, parse_config};
pub use options::{MentionsOptions, parse_trigger};
pub use types::{Config, InputConfig};
