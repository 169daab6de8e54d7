//! Error types for the notifier, derived with `thiserror`.
//!
//! Configuration problems are caught before any network I/O; delivery
//! problems surface the transport or webhook failure as-is. Neither kind
//! is retried.

use thiserror::Error;

/// Unified error type returned by [`crate::discord::send_notification`].
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Invalid or incomplete input, detected before any network I/O.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The notification text was absent or empty.
    #[error("notification text must not be empty")]
    MissingText,

    /// No explicit URL was given and the webhook secret is not configured.
    #[error("no webhook destination: pass a URL or set the 'DISCORD_WEBHOOK_URL' secret")]
    MissingDestination,

    /// The resolved destination does not parse as a URL.
    #[error("invalid webhook URL '{url}': {detail}")]
    InvalidUrl { url: String, detail: String },
}

/// The POST was attempted but did not succeed.
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Transport-level failure (connect, TLS, timeout).
    #[error("webhook request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status.
    #[error("webhook rejected with HTTP {status}: {body}")]
    Rejected { status: u16, body: String },
}
