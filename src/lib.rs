//! # KYNEX Deploy - Rust Library
//!
//! A Rust library for generating deployment artifacts for KYNEX.dev chatbot
//! agents. Given a target platform and agent metadata, it produces everything
//! needed to wire the agent up: webhook URLs, embeddable widget code,
//! integration code samples, platform-specific configuration, setup
//! instructions, and a testing guide.
//!
//! ## Key Features
//!
//! - **Six platforms**: Website Widget, API Webhook, WhatsApp, Telegram,
//!   X (Twitter), and Instagram, each with its own template set
//! - **Pure and synchronous**: no I/O, no shared state; safe to call from
//!   any number of threads concurrently
//! - **Stable URLs**: pass an existing deployment id to regenerate a bundle
//!   with identical URLs and tokens
//! - **Credential echoing**: missing required credentials never fail
//!   generation; they are surfaced per key in the setup instructions
//!
//! ## Quick Start
//!
//! ```rust
//! use kynex_deploy_rs::{DeploymentGeneratorBuilder, DeploymentRequest, Result};
//!
//! fn main() -> Result<()> {
//!     let generator = DeploymentGeneratorBuilder::new()
//!         .with_base_url("https://kynex.dev")
//!         .build()?;
//!
//!     let request = DeploymentRequest::new("Website Widget", "agent-42", "Support Bot")
//!         .with_deployment_id("dep123");
//!
//!     let bundle = generator.generate(&request)?;
//!
//!     assert_eq!(bundle.webhook_url, "https://kynex.dev/api/webhook/widget/dep123");
//!     println!("{}", bundle.embed_code.unwrap());
//!     Ok(())
//! }
//! ```
//!
//! ## Platform Dispatch
//!
//! The platform set is closed: the request's platform string is matched
//! exactly and case-sensitively against the six supported names, and
//! anything else fails with [`Error::UnsupportedPlatform`]. There is no
//! fallback bundle. Internally platforms are a sum type ([`Platform`]) and
//! generation is an exhaustive match, so adding a platform means adding a
//! variant plus its template set.
//!
//! ## Deployment Ids
//!
//! When a request carries no deployment id, a fresh 21-character URL-safe
//! token is generated and echoed back in the bundle. Every artifact in one
//! bundle references the same id: the webhook URL, the widget container id,
//! and the verify token all agree. Callers regenerating artifacts for an
//! existing deployment must pass the stored id, otherwise the new bundle
//! will reference a different deployment.
//!
//! ## Error Handling
//!
//! The library uses a small [`Error`] type: [`Error::UnsupportedPlatform`]
//! for unknown platform strings and [`Error::Configuration`] for builder
//! misconfiguration. Missing credentials are advisory, never errors.

mod config;
mod error;
mod generator;
mod id;
mod platform;
mod snippets;
mod types;

#[cfg(test)]
mod tests;

pub use config::{GeneratorConfig, DEFAULT_BASE_URL};
pub use error::Error;
pub use generator::{DeploymentGenerator, DeploymentGeneratorBuilder};
pub use id::generate_deployment_id;
pub use platform::Platform;
pub use types::{CodeSample, DeploymentArtifactBundle, DeploymentRequest};

/// Result type for KYNEX deployment artifact operations.
///
/// This is a convenience alias for `std::result::Result<T, Error>` that
/// simplifies error handling throughout the library.
pub type Result<T> = std::result::Result<T, Error>;
