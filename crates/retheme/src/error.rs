//! Error types for theme capture and application.

use thiserror::Error;

/// Errors that can occur while applying a theme to a host.
///
/// Both variants indicate programmer or host misconfiguration rather than
/// transient conditions; callers should surface them, not retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ThemeError {
    /// Variant resolution produced something other than Light or Dark.
    ///
    /// Palettes exist only for the Light and Dark variants; a host whose
    /// effective variant is neither cannot be themed.
    #[error("palettes only support the Light and Dark variants")]
    InvalidVariant,

    /// A rebuild was required but the host had no theme block installed.
    ///
    /// Hosts must install the runtime's [`ThemeBlock`](crate::ThemeBlock)
    /// at startup; a missing block means the host's style list is in an
    /// unsupported state.
    #[error("no theme block installed in the host; cannot rebuild styles")]
    MissingStyleBlock,
}

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;
