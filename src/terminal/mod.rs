//! Terminal matching: find the terminal whose process tree runs a target
//! application and deliver text to it.

mod error;
mod matcher;
mod pattern;

pub use error::{DeliveryError, PatternError, Result};
pub use matcher::{TerminalMatcher, MAX_DEPTH};
pub use pattern::TargetPattern;

use std::future::Future;

/// A terminal owned by the host. The matcher only reads its root pid and
/// uses its input/focus capabilities; it never creates or destroys one.
pub trait TerminalSession {
    /// Pid of the shell backing this terminal, if the host has resolved it
    fn root_pid(&self) -> impl Future<Output = Option<u32>> + Send;

    /// Type `text` into the terminal. With `execute` the host also submits it.
    fn send_text(&self, text: &str, execute: bool) -> impl Future<Output = Result<()>> + Send;

    /// Bring the terminal to the foreground
    fn show(&self) -> impl Future<Output = Result<()>> + Send;
}
