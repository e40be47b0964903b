use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// The closed set of platforms an agent can be deployed to.
///
/// Platform identifiers are matched exactly and case-sensitively against
/// the display names used throughout the KYNEX dashboard. Adding a platform
/// means adding a variant here plus a generation branch and template set;
/// there is intentionally no catch-all variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Platform {
    /// Embeddable chat widget for arbitrary websites.
    WebsiteWidget,

    /// Generic webhook plus direct REST endpoint for custom integrations.
    ApiWebhook,

    /// WhatsApp Business API.
    WhatsApp,

    /// Telegram Bot API.
    Telegram,

    /// X (formerly Twitter) DMs and mentions.
    Twitter,

    /// Instagram Messaging (DMs and comments).
    Instagram,
}

impl Platform {
    /// All supported platforms, in the order the dashboard lists them.
    pub const ALL: [Platform; 6] = [
        Platform::WebsiteWidget,
        Platform::ApiWebhook,
        Platform::WhatsApp,
        Platform::Telegram,
        Platform::Twitter,
        Platform::Instagram,
    ];

    /// The display name, which doubles as the parse literal.
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::WebsiteWidget => "Website Widget",
            Platform::ApiWebhook => "API Webhook",
            Platform::WhatsApp => "WhatsApp",
            Platform::Telegram => "Telegram",
            Platform::Twitter => "X (Twitter)",
            Platform::Instagram => "Instagram",
        }
    }

    /// Credential keys the platform needs before it can go live.
    ///
    /// Absence of a required credential never fails generation; it is
    /// echoed in the setup instructions instead, and enforcement is left
    /// to the caller's form validation.
    pub fn required_credentials(&self) -> &'static [&'static str] {
        match self {
            Platform::WebsiteWidget => &[],
            Platform::ApiWebhook => &[],
            Platform::WhatsApp => &["business_api_key"],
            Platform::Telegram => &["bot_token"],
            Platform::Twitter => &["api_key", "api_secret", "bearer_token"],
            Platform::Instagram => &["app_id", "access_token"],
        }
    }

    /// Webhook path for a deployment, relative to the service base URL.
    ///
    /// Each platform owns a fixed path prefix; no platform ever uses
    /// another platform's prefix.
    pub fn webhook_path(&self, deployment_id: &str) -> String {
        match self {
            Platform::WebsiteWidget => format!("/api/webhook/widget/{}", deployment_id),
            Platform::ApiWebhook => format!("/api/webhook/generic/{}", deployment_id),
            Platform::WhatsApp => format!("/api/webhook/whatsapp/{}", deployment_id),
            Platform::Telegram => format!("/api/webhook/telegram/{}", deployment_id),
            Platform::Twitter => format!("/api/webhook/twitter/{}", deployment_id),
            Platform::Instagram => format!("/api/webhook/instagram/{}", deployment_id),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Website Widget" => Ok(Platform::WebsiteWidget),
            "API Webhook" => Ok(Platform::ApiWebhook),
            "WhatsApp" => Ok(Platform::WhatsApp),
            "Telegram" => Ok(Platform::Telegram),
            "X (Twitter)" => Ok(Platform::Twitter),
            "Instagram" => Ok(Platform::Instagram),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Platform> for String {
    fn from(platform: Platform) -> Self {
        platform.as_str().to_string()
    }
}
