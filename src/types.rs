use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Request for generating deployment artifacts.
///
/// Collected by the dashboard's deployment dialog: the target platform,
/// the agent being deployed, and whatever credentials the user has entered
/// so far. Field names serialize in camelCase to match the dashboard's
/// JSON conventions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentRequest {
    /// Target platform display name, e.g. `"Telegram"`.
    ///
    /// Matched exactly and case-sensitively against the supported set;
    /// anything else fails generation with an unsupported-platform error.
    pub platform: String,

    /// Opaque identifier of the agent being deployed.
    pub agent_id: String,

    /// Human-readable agent name, interpolated into generated snippets
    /// and instructions.
    pub agent_name: String,

    /// Platform-dependent credential values keyed by field name.
    ///
    /// Missing or empty entries are reported in the setup instructions,
    /// never treated as errors.
    #[serde(default)]
    pub credentials: HashMap<String, String>,

    /// Existing deployment identifier, if regenerating artifacts.
    ///
    /// When `None` a fresh 21-character URL-safe id is generated. Callers
    /// regenerating artifacts for an already-persisted deployment must pass
    /// the stored id here, otherwise every URL and token in the new bundle
    /// will reference a different deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_id: Option<String>,
}

impl DeploymentRequest {
    /// Creates a request with no credentials and no pre-existing id.
    ///
    /// # Parameters
    ///
    /// * `platform` - Target platform display name
    /// * `agent_id` - Identifier of the agent being deployed
    /// * `agent_name` - Display name of the agent
    pub fn new(
        platform: impl Into<String>,
        agent_id: impl Into<String>,
        agent_name: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            agent_id: agent_id.into(),
            agent_name: agent_name.into(),
            credentials: HashMap::new(),
            deployment_id: None,
        }
    }

    /// Adds a single credential value.
    ///
    /// # Returns
    ///
    /// The updated request for method chaining
    pub fn with_credential(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.credentials.insert(key.into(), value.into());
        self
    }

    /// Replaces the credential map wholesale.
    ///
    /// # Returns
    ///
    /// The updated request for method chaining
    pub fn with_credentials(mut self, credentials: HashMap<String, String>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Pins the deployment id, keeping generated URLs stable across
    /// re-generation.
    ///
    /// # Returns
    ///
    /// The updated request for method chaining
    pub fn with_deployment_id(mut self, deployment_id: impl Into<String>) -> Self {
        self.deployment_id = Some(deployment_id.into());
        self
    }
}

/// A language- or framework-specific integration code sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    /// Language or tool the sample is written in, e.g. `"javascript"`.
    pub language: String,

    /// Short human-readable label shown above the code block.
    pub label: String,

    /// The sample source itself, ready for copy-to-clipboard rendering.
    pub code: String,
}

impl CodeSample {
    pub fn new(
        language: impl Into<String>,
        label: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            language: language.into(),
            label: label.into(),
            code: code.into(),
        }
    }
}

/// The full set of artifacts generated for one deployment.
///
/// Which fields are populated depends entirely on the platform; the shape
/// for a given platform is fixed. Callers typically render the code fields
/// into copy-to-clipboard blocks and may persist `webhook_url` and
/// `deployment_id` alongside the deployment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentArtifactBundle {
    /// The deployment id every artifact in this bundle references.
    ///
    /// Either the id supplied in the request or a freshly generated one;
    /// callers should persist it if they intend to regenerate later.
    pub deployment_id: String,

    /// Fully-qualified URL the external platform will call.
    pub webhook_url: String,

    /// Copy-pasteable script + markup for client-side embedding.
    /// Website Widget only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed_code: Option<String>,

    /// Direct programmatic endpoint, distinct from the webhook.
    /// API Webhook only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_endpoint: Option<String>,

    /// Language/framework-specific integration samples.
    pub integration_code: Vec<CodeSample>,

    /// Sample code for verifying webhook signatures or challenges.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webhook_verification: Option<String>,

    /// Platform-specific settings: verify tokens, API versions, rate
    /// limits, subscribed event types. Shape varies per platform.
    pub platform_specific_config: HashMap<String, Value>,

    /// Ordered setup steps, including a per-key echo of which required
    /// credentials were supplied.
    pub setup_instructions: Vec<String>,

    /// Verification checklist for confirming the deployment works.
    pub testing_guide: Vec<String>,
}
