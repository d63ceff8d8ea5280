pub mod cli;
pub mod client;
pub mod load_config;
pub mod menu;
pub mod operator;

pub use cli::{run, Cli, Commands};
