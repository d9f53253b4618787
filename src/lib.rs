//! refpaste library - find the terminal running a target application by
//! walking live process trees, and deliver text into it.

pub mod cli;
pub mod config;
pub mod process;
pub mod terminal;
pub mod tmux;
