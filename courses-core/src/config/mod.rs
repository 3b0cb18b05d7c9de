pub use config::*;
mod config;
pub mod reader;
