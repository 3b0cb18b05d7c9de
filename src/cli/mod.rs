pub mod commands;
pub mod rt;
pub mod runner;
