//! The notification collaborator.
//!
//! User-visible success/failure messages are fire-and-forget: the catalog
//! calls [`Notify::notify`] and moves on. How the message is presented
//! (toast, terminal, log line) is entirely the implementor's business.

use std::fmt;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Receives user-visible notifications from the catalog.
pub trait Notify {
    /// Delivers one message. Must not fail; delivery problems are the
    /// implementor's to swallow.
    fn notify(&self, severity: Severity, message: &str);
}

/// Routes notifications through `tracing` at the matching level.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notify for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!("{}", message),
            Severity::Error => tracing::error!("{}", message),
        }
    }
}
