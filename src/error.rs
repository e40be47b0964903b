use thiserror::Error;

/// Error types for the KYNEX deployment artifact library.
///
/// Artifact generation is a pure transform, so the error surface is small:
/// a platform string outside the supported set, or a misconfigured
/// generator at construction time.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested platform is not one of the six supported platforms.
    ///
    /// The platform set is closed and matched case-sensitively; there is
    /// no fallback bundle for unknown platforms. The offending string is
    /// carried so callers can surface it to the user.
    #[error("Unsupported deployment platform: {0}")]
    UnsupportedPlatform(String),

    /// Configuration-related errors.
    ///
    /// These errors occur when the generator is constructed with invalid
    /// settings, such as an empty base URL.
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}
