use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::error::Error;
use crate::id::generate_deployment_id;
use crate::platform::Platform;
use crate::snippets;
use crate::types::{CodeSample, DeploymentArtifactBundle, DeploymentRequest};
use crate::Result;

/// Header carrying the HMAC-SHA256 signature on generic webhook calls.
const SIGNATURE_HEADER: &str = "x-kynex-signature";

/// `DeploymentGenerator` produces the artifact bundle for deploying a KYNEX
/// agent to one of the supported platforms.
///
/// The generator is a pure, synchronous transform: it performs no I/O and
/// holds no mutable state, so a single instance may be shared freely across
/// threads. The only configuration is the service base URL from which every
/// generated webhook URL is derived.
///
/// # Examples
///
/// ```
/// use kynex_deploy_rs::{DeploymentGeneratorBuilder, DeploymentRequest, Result};
///
/// fn main() -> Result<()> {
///     let generator = DeploymentGeneratorBuilder::new()
///         .with_base_url("https://kynex.dev")
///         .build()?;
///
///     let request = DeploymentRequest::new("Telegram", "agent-42", "Support Bot")
///         .with_credential("bot_token", "123456:ABC");
///
///     let bundle = generator.generate(&request)?;
///     println!("Webhook URL: {}", bundle.webhook_url);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct DeploymentGenerator {
    config: GeneratorConfig,
}

impl DeploymentGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// The resolved base URL all generated URLs are built from.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Generates the deployment artifact bundle for a request.
    ///
    /// The request's platform string is matched exactly against the six
    /// supported platforms; the deployment id is taken from the request or
    /// freshly generated when absent. Missing credentials never fail
    /// generation — they are echoed per key in the setup instructions so
    /// the dashboard can show what still needs to be filled in.
    ///
    /// # Parameters
    ///
    /// * `request` - The deployment request to generate artifacts for
    ///
    /// # Returns
    ///
    /// A `DeploymentArtifactBundle` whose shape is fixed per platform
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedPlatform`] when `request.platform` is not
    /// one of the six supported platform names. This is the only failure
    /// mode; the transform itself cannot fail.
    pub fn generate(&self, request: &DeploymentRequest) -> Result<DeploymentArtifactBundle> {
        let platform: Platform = request.platform.parse()?;

        let deployment_id = match &request.deployment_id {
            Some(id) => id.clone(),
            None => generate_deployment_id(),
        };

        debug!(
            platform = platform.as_str(),
            agent_id = %request.agent_id,
            deployment_id = %deployment_id,
            "generating deployment artifacts"
        );

        for key in platform.required_credentials() {
            if !credential_supplied(request, key) {
                warn!(
                    platform = platform.as_str(),
                    credential = key,
                    "required credential not supplied; noted in setup instructions"
                );
            }
        }

        let webhook_url = format!(
            "{}{}",
            self.config.base_url,
            platform.webhook_path(&deployment_id)
        );

        let bundle = match platform {
            Platform::WebsiteWidget => self.widget_bundle(request, &deployment_id, webhook_url),
            Platform::ApiWebhook => self.api_webhook_bundle(request, &deployment_id, webhook_url),
            Platform::WhatsApp => self.whatsapp_bundle(request, &deployment_id, webhook_url),
            Platform::Telegram => self.telegram_bundle(request, &deployment_id, webhook_url),
            Platform::Twitter => self.twitter_bundle(request, &deployment_id, webhook_url),
            Platform::Instagram => self.instagram_bundle(request, &deployment_id, webhook_url),
        };

        Ok(bundle)
    }

    /// Website Widget: self-contained embed snippet plus framework variants.
    fn widget_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let base = &self.config.base_url;
        let container_id = format!("kynex-agent-{}", deployment_id);

        let integration_code = vec![
            CodeSample::new(
                "jsx",
                "React component",
                snippets::widget_react(base, deployment_id, &request.agent_name),
            ),
            CodeSample::new(
                "vue",
                "Vue component",
                snippets::widget_vue(base, deployment_id, &request.agent_name),
            ),
            CodeSample::new(
                "php",
                "WordPress shortcode",
                snippets::widget_wordpress(base, deployment_id),
            ),
        ];

        let platform_specific_config = HashMap::from([
            ("widget_container_id".to_string(), json!(container_id)),
            ("script_url".to_string(), json!(format!("{}/widget.js", base))),
            ("theme".to_string(), json!("light")),
            ("position".to_string(), json!("bottom-right")),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::WebsiteWidget);
        setup_instructions.extend([
            "Copy the embed code and paste it just before the closing </body> tag of every page where the widget should appear.".to_string(),
            "Using React, Vue or WordPress? Use the matching integration sample instead of the raw embed code.".to_string(),
            format!(
                "The widget mounts into the container element with id \"{}\"; keep that id unchanged.",
                container_id
            ),
            "Adjust theme and position in the init options to match your site.".to_string(),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::WebsiteWidget));

        let testing_guide = vec![
            "Open a page containing the embed code and confirm the chat bubble appears in the configured corner.".to_string(),
            format!(
                "Send a test message and confirm \"{}\" replies within a few seconds.",
                request.agent_name
            ),
            "Check the browser console for KynexWidget errors if the bubble does not render.".to_string(),
            "Verify the widget works on both desktop and mobile viewports.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: Some(snippets::widget_embed(
                base,
                deployment_id,
                &request.agent_name,
            )),
            api_endpoint: None,
            integration_code,
            webhook_verification: None,
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }

    /// API Webhook: webhook URL plus a direct message endpoint and an
    /// HMAC signature verification sample.
    fn api_webhook_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let api_endpoint = format!(
            "{}/api/agents/{}/message",
            self.config.base_url, deployment_id
        );

        let integration_code = vec![
            CodeSample::new(
                "javascript",
                "Node.js",
                snippets::api_node(&api_endpoint, &request.agent_name),
            ),
            CodeSample::new(
                "python",
                "Python",
                snippets::api_python(&api_endpoint, &request.agent_name),
            ),
            CodeSample::new("bash", "cURL", snippets::api_curl(&api_endpoint)),
        ];

        let platform_specific_config = HashMap::from([
            ("signature_header".to_string(), json!(SIGNATURE_HEADER)),
            ("content_type".to_string(), json!("application/json")),
            ("rate_limit".to_string(), json!("60 requests per minute")),
            (
                "events".to_string(),
                json!(["message.received", "message.sent", "conversation.started"]),
            ),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::ApiWebhook);
        setup_instructions.extend([
            "Use the direct API endpoint to send messages to the agent programmatically; authenticate with your KYNEX API key as a Bearer token.".to_string(),
            format!(
                "To receive events, expose an HTTPS endpoint on your side and register it; KYNEX will POST events to it and sign each request with the {} header.",
                SIGNATURE_HEADER
            ),
            "Verify signatures with the provided sample before trusting any payload.".to_string(),
            "Respond to event deliveries with HTTP 200 within 10 seconds; slower responses are retried.".to_string(),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::ApiWebhook));

        let testing_guide = vec![
            "Call the direct API endpoint with the cURL sample and confirm a JSON reply.".to_string(),
            "Trigger a conversation and confirm your webhook endpoint receives a message.received event.".to_string(),
            "Tamper with a payload byte and confirm your signature check rejects it.".to_string(),
            "Confirm your endpoint answers within the 10 second delivery window.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: None,
            api_endpoint: Some(api_endpoint),
            integration_code,
            webhook_verification: Some(snippets::webhook_signature_verification(SIGNATURE_HEADER)),
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }

    /// WhatsApp Business: Meta webhook subscription with a fixed verify
    /// token derived from the deployment id.
    fn whatsapp_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let verify_token = format!("kynex_{}", deployment_id);

        let integration_code = vec![CodeSample::new(
            "javascript",
            "Webhook verification",
            snippets::meta_challenge_verification(&verify_token, "WhatsApp"),
        )];

        let platform_specific_config = HashMap::from([
            ("verify_token".to_string(), json!(verify_token)),
            ("api_version".to_string(), json!("v18.0")),
            ("subscribed_fields".to_string(), json!(["messages"])),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::WhatsApp);
        setup_instructions.extend([
            "Open the Meta for Developers dashboard and select your WhatsApp Business app.".to_string(),
            format!(
                "Under WhatsApp > Configuration, set the callback URL to {} and the verify token to \"{}\".",
                webhook_url, verify_token
            ),
            "Subscribe the webhook to the \"messages\" field.".to_string(),
            "Save the configuration; Meta immediately sends the verification challenge, which KYNEX answers automatically.".to_string(),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::WhatsApp));

        let testing_guide = vec![
            "In the Meta dashboard, confirm the webhook shows as Verified.".to_string(),
            format!(
                "Send a WhatsApp message to your business number and confirm \"{}\" replies.",
                request.agent_name
            ),
            "Check the deployment's message log in KYNEX to confirm inbound events arrive.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: None,
            api_endpoint: None,
            integration_code,
            webhook_verification: None,
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }

    /// Telegram: bot webhook registration plus the standard command set.
    fn telegram_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let bot_token = request
            .credentials
            .get("bot_token")
            .filter(|v| !v.trim().is_empty())
            .map(String::as_str)
            .unwrap_or("<YOUR_BOT_TOKEN>");

        let integration_code = vec![CodeSample::new(
            "bash",
            "Webhook registration",
            snippets::telegram_register_webhook(bot_token, &webhook_url),
        )];

        let platform_specific_config = HashMap::from([
            (
                "bot_commands".to_string(),
                json!(["/start", "/help", "/reset"]),
            ),
            (
                "allowed_updates".to_string(),
                json!(["message", "callback_query"]),
            ),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::Telegram);
        setup_instructions.extend([
            "Create a bot with @BotFather (/newbot) if you have not already, and copy the bot token it gives you.".to_string(),
            "Run the webhook registration sample to point the bot at this deployment.".to_string(),
            format!(
                "Optionally register the commands /start, /help and /reset with @BotFather so they appear in the Telegram command menu for \"{}\".",
                request.agent_name
            ),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::Telegram));

        let testing_guide = vec![
            "Run getWebhookInfo and confirm the url field matches the webhook URL above.".to_string(),
            "Open a chat with your bot and send /start; confirm the agent greets you.".to_string(),
            "Send a free-form message and confirm the agent answers.".to_string(),
            "Send /reset and confirm the conversation context is cleared.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: None,
            api_endpoint: None,
            integration_code,
            webhook_verification: None,
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }

    /// X (Twitter): Account Activity events for DMs and mentions. Webhook
    /// delivery requires a paid API tier, called out explicitly.
    fn twitter_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let integration_code = vec![CodeSample::new(
            "javascript",
            "DM and mention handling",
            snippets::twitter_dm_mention_handler(&request.agent_name, &webhook_url),
        )];

        let platform_specific_config = HashMap::from([
            (
                "required_api_tier".to_string(),
                json!("Basic or Pro (paid) - webhook delivery is not available on the free tier"),
            ),
            (
                "subscribed_events".to_string(),
                json!(["direct_message_events", "tweet_create_events"]),
            ),
            ("crc_validation".to_string(), json!(true)),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::Twitter);
        setup_instructions.extend([
            "⚠️ The X API only delivers webhook events on the paid Basic or Pro tiers; a free-tier app will not receive DMs or mentions.".to_string(),
            "Create a project and app in the X developer portal with Read, Write and Direct Messages permissions.".to_string(),
            format!(
                "Register {} as the Account Activity webhook; KYNEX answers the CRC challenge automatically.",
                webhook_url
            ),
            "Subscribe your account to the webhook so DM and mention events are delivered.".to_string(),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::Twitter));

        let testing_guide = vec![
            "Confirm the webhook passes the CRC check in the developer portal.".to_string(),
            format!(
                "Send your account a DM and confirm \"{}\" replies.",
                request.agent_name
            ),
            "Mention your account from another account and confirm the mention is handled.".to_string(),
            "If no events arrive, re-check the app's API tier and permission scopes.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: None,
            api_endpoint: None,
            integration_code,
            webhook_verification: None,
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }

    /// Instagram: Meta webhook subscription covering comments and DMs.
    fn instagram_bundle(
        &self,
        request: &DeploymentRequest,
        deployment_id: &str,
        webhook_url: String,
    ) -> DeploymentArtifactBundle {
        let verify_token = format!("kynex_{}", deployment_id);

        let integration_code = vec![
            CodeSample::new(
                "javascript",
                "Webhook verification",
                snippets::meta_challenge_verification(&verify_token, "Instagram"),
            ),
            CodeSample::new(
                "javascript",
                "Comment and DM handling",
                snippets::instagram_event_handler(&request.agent_name),
            ),
        ];

        let platform_specific_config = HashMap::from([
            ("verify_token".to_string(), json!(verify_token)),
            ("api_version".to_string(), json!("v18.0")),
            (
                "subscribed_fields".to_string(),
                json!(["messages", "comments"]),
            ),
        ]);

        let mut setup_instructions = instruction_header(request, Platform::Instagram);
        setup_instructions.extend([
            "Connect your Instagram professional account to a Facebook Page and add the Instagram product to your Meta app.".to_string(),
            format!(
                "Under Webhooks, set the callback URL to {} and the verify token to \"{}\".",
                webhook_url, verify_token
            ),
            "Subscribe to the \"messages\" and \"comments\" fields.".to_string(),
            "Enable message access for your app under Instagram > Settings.".to_string(),
        ]);
        setup_instructions.extend(credential_status_lines(request, Platform::Instagram));

        let testing_guide = vec![
            "In the Meta dashboard, confirm the webhook shows as Verified.".to_string(),
            format!(
                "Send a DM to your Instagram account and confirm \"{}\" replies.",
                request.agent_name
            ),
            "Comment on one of your posts and confirm the comment event reaches the agent.".to_string(),
        ];

        DeploymentArtifactBundle {
            deployment_id: deployment_id.to_string(),
            webhook_url,
            embed_code: None,
            api_endpoint: None,
            integration_code,
            webhook_verification: None,
            platform_specific_config,
            setup_instructions,
            testing_guide,
        }
    }
}

impl Default for DeploymentGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// True when the credential is present and non-empty. A presence check
/// only; the value itself is never validated.
fn credential_supplied(request: &DeploymentRequest, key: &str) -> bool {
    request
        .credentials
        .get(key)
        .map(|v| !v.trim().is_empty())
        .unwrap_or(false)
}

/// One status line per required credential key, in table order.
fn credential_status_lines(request: &DeploymentRequest, platform: Platform) -> Vec<String> {
    platform
        .required_credentials()
        .iter()
        .map(|key| {
            if credential_supplied(request, key) {
                format!("✅ {} is configured.", key)
            } else {
                format!(
                    "❌ {} is missing - add it in the deployment settings before going live.",
                    key
                )
            }
        })
        .collect()
}

/// Leading instruction line. The timestamp is documentation only and is
/// deliberately the single non-deterministic piece of instruction text.
fn instruction_header(request: &DeploymentRequest, platform: Platform) -> Vec<String> {
    vec![format!(
        "Setup guide for \"{}\" on {} (generated {}).",
        request.agent_name,
        platform,
        Utc::now().format("%Y-%m-%d %H:%M UTC")
    )]
}

/// Builder for creating a `DeploymentGenerator` with a fluent interface.
///
/// # Examples
///
/// ```
/// use kynex_deploy_rs::DeploymentGeneratorBuilder;
///
/// let generator = DeploymentGeneratorBuilder::new()
///     .with_base_url("https://staging.kynex.dev/")
///     .build()
///     .expect("Failed to create generator");
///
/// assert_eq!(generator.base_url(), "https://staging.kynex.dev");
/// ```
#[derive(Debug, Default)]
pub struct DeploymentGeneratorBuilder {
    base_url: Option<String>,
}

impl DeploymentGeneratorBuilder {
    /// Creates a new empty `DeploymentGeneratorBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service base URL. Defaults to the hosted KYNEX platform
    /// when not set.
    ///
    /// # Returns
    ///
    /// The builder instance for method chaining
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Builds a `DeploymentGenerator` instance with the configured
    /// parameters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the base URL is set to an
    /// empty string.
    pub fn build(self) -> Result<DeploymentGenerator> {
        let config = match self.base_url {
            Some(url) => {
                if url.trim_end_matches('/').is_empty() {
                    return Err(Error::Configuration("Base URL must not be empty".into()));
                }
                GeneratorConfig::new(url)
            }
            None => GeneratorConfig::default(),
        };

        Ok(DeploymentGenerator::new(config))
    }
}
