use super::*;
use crate::id::is_valid_deployment_id;
use std::collections::HashMap;

// Helper function to create a generator with the standard test base URL
fn create_test_generator() -> DeploymentGenerator {
    DeploymentGeneratorBuilder::new()
        .with_base_url("https://kynex.dev")
        .build()
        .unwrap()
}

fn request_for(platform: &str) -> DeploymentRequest {
    DeploymentRequest::new(platform, "agent-1", "Helper").with_deployment_id("dep123")
}

#[test]
fn test_all_platforms_generate_with_webhook_url() {
    let generator = create_test_generator();

    let expected_segments = [
        (Platform::WebsiteWidget, "/api/webhook/widget/"),
        (Platform::ApiWebhook, "/api/webhook/generic/"),
        (Platform::WhatsApp, "/api/webhook/whatsapp/"),
        (Platform::Telegram, "/api/webhook/telegram/"),
        (Platform::Twitter, "/api/webhook/twitter/"),
        (Platform::Instagram, "/api/webhook/instagram/"),
    ];

    for (platform, segment) in expected_segments {
        let bundle = generator.generate(&request_for(platform.as_str())).unwrap();

        assert!(
            bundle.webhook_url.contains(segment),
            "{} webhook URL {} missing segment {}",
            platform,
            bundle.webhook_url,
            segment
        );
        assert!(bundle.webhook_url.ends_with("dep123"));
        assert_eq!(bundle.deployment_id, "dep123");
        assert!(!bundle.setup_instructions.is_empty());
        assert!(!bundle.testing_guide.is_empty());
    }
}

#[test]
fn test_unsupported_platform_errors() {
    let generator = create_test_generator();

    for bad in ["Discord", "website widget", "TELEGRAM", "", "Slack"] {
        let result = generator.generate(&request_for(bad));
        match result {
            Err(Error::UnsupportedPlatform(name)) => assert_eq!(name, bad),
            other => panic!("expected UnsupportedPlatform for {:?}, got {:?}", bad, other),
        }
    }
}

#[test]
fn test_website_widget_scenario() {
    let generator = create_test_generator();
    let bundle = generator
        .generate(&request_for("Website Widget"))
        .unwrap();

    assert_eq!(
        bundle.webhook_url,
        "https://kynex.dev/api/webhook/widget/dep123"
    );

    let embed = bundle.embed_code.as_deref().unwrap();
    assert!(embed.contains("kynex-agent-dep123"));
    assert!(embed.contains("Helper"));
    assert!(bundle.api_endpoint.is_none());
    assert!(bundle.webhook_verification.is_none());

    // Framework variants: component-based, templating-based, CMS shortcode
    let labels: Vec<&str> = bundle
        .integration_code
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    assert_eq!(
        labels,
        ["React component", "Vue component", "WordPress shortcode"]
    );
}

#[test]
fn test_api_webhook_has_both_endpoints() {
    let generator = create_test_generator();
    let bundle = generator.generate(&request_for("API Webhook")).unwrap();

    assert_eq!(
        bundle.webhook_url,
        "https://kynex.dev/api/webhook/generic/dep123"
    );
    assert_eq!(
        bundle.api_endpoint.as_deref(),
        Some("https://kynex.dev/api/agents/dep123/message")
    );

    let verification = bundle.webhook_verification.as_deref().unwrap();
    assert!(verification.contains("sha256"));
    assert!(verification.contains("x-kynex-signature"));

    assert_eq!(
        bundle.platform_specific_config["signature_header"],
        serde_json::json!("x-kynex-signature")
    );
}

#[test]
fn test_whatsapp_scenario() {
    let generator = create_test_generator();
    let request = DeploymentRequest::new("WhatsApp", "agent-1", "Helper")
        .with_deployment_id("dep1")
        .with_credential("business_api_key", "X");

    let bundle = generator.generate(&request).unwrap();

    assert_eq!(
        bundle.platform_specific_config["verify_token"],
        serde_json::json!("kynex_dep1")
    );
    assert!(bundle
        .setup_instructions
        .iter()
        .any(|line| line.starts_with('✅') && line.contains("business_api_key")));
}

#[test]
fn test_telegram_credential_echo() {
    let generator = create_test_generator();

    // Without the bot token: reported missing
    let bundle = generator.generate(&request_for("Telegram")).unwrap();
    assert!(bundle
        .setup_instructions
        .iter()
        .any(|line| line.starts_with('❌') && line.contains("bot_token")));

    // With the bot token: reported configured, and used in the sample
    let request = request_for("Telegram").with_credential("bot_token", "123456:ABC");
    let bundle = generator.generate(&request).unwrap();
    assert!(bundle
        .setup_instructions
        .iter()
        .any(|line| line.starts_with('✅') && line.contains("bot_token")));
    assert!(bundle.integration_code[0].code.contains("bot123456:ABC"));
}

#[test]
fn test_empty_credential_counts_as_missing() {
    let generator = create_test_generator();
    let request = request_for("Telegram").with_credential("bot_token", "   ");
    let bundle = generator.generate(&request).unwrap();

    assert!(bundle
        .setup_instructions
        .iter()
        .any(|line| line.starts_with('❌') && line.contains("bot_token")));
    assert!(bundle.integration_code[0].code.contains("<YOUR_BOT_TOKEN>"));
}

#[test]
fn test_twitter_requires_three_credentials() {
    let generator = create_test_generator();
    let request = request_for("X (Twitter)").with_credential("api_key", "k");
    let bundle = generator.generate(&request).unwrap();

    let configured: Vec<&String> = bundle
        .setup_instructions
        .iter()
        .filter(|l| l.starts_with('✅'))
        .collect();
    let missing: Vec<&String> = bundle
        .setup_instructions
        .iter()
        .filter(|l| l.starts_with('❌'))
        .collect();

    assert_eq!(configured.len(), 1);
    assert_eq!(missing.len(), 2);
    assert!(missing.iter().any(|l| l.contains("api_secret")));
    assert!(missing.iter().any(|l| l.contains("bearer_token")));

    // Paid tier prerequisite is called out
    assert!(bundle
        .setup_instructions
        .iter()
        .any(|l| l.contains("paid")));
    assert!(bundle
        .platform_specific_config
        .contains_key("required_api_tier"));
}

#[test]
fn test_instagram_bundle() {
    let generator = create_test_generator();
    let bundle = generator.generate(&request_for("Instagram")).unwrap();

    assert_eq!(
        bundle.platform_specific_config["verify_token"],
        serde_json::json!("kynex_dep123")
    );
    assert_eq!(
        bundle.platform_specific_config["subscribed_fields"],
        serde_json::json!(["messages", "comments"])
    );

    // Verification challenge plus comment/DM handling samples
    assert_eq!(bundle.integration_code.len(), 2);
    assert!(bundle.integration_code[0].code.contains("hub.challenge"));
    assert!(bundle.integration_code[1].code.contains("comments"));
}

#[test]
fn test_deployment_id_consistency_across_artifacts() {
    let generator = create_test_generator();

    let widget = generator.generate(&request_for("Website Widget")).unwrap();
    assert!(widget.webhook_url.contains(&widget.deployment_id));
    assert!(widget
        .embed_code
        .as_deref()
        .unwrap()
        .contains(&format!("kynex-agent-{}", widget.deployment_id)));
    assert_eq!(
        widget.platform_specific_config["widget_container_id"],
        serde_json::json!(format!("kynex-agent-{}", widget.deployment_id))
    );
    for sample in &widget.integration_code {
        assert!(sample.code.contains(&widget.deployment_id));
    }

    let whatsapp = generator.generate(&request_for("WhatsApp")).unwrap();
    assert!(whatsapp.webhook_url.contains(&whatsapp.deployment_id));
    assert_eq!(
        whatsapp.platform_specific_config["verify_token"],
        serde_json::json!(format!("kynex_{}", whatsapp.deployment_id))
    );
}

#[test]
fn test_idempotence_with_explicit_id() {
    let generator = create_test_generator();

    for platform in Platform::ALL {
        let request = request_for(platform.as_str()).with_credential("bot_token", "t");
        let first = generator.generate(&request).unwrap();
        let second = generator.generate(&request).unwrap();

        // Everything except instruction prose (which embeds a timestamp)
        // must be byte-identical.
        assert_eq!(first.deployment_id, second.deployment_id);
        assert_eq!(first.webhook_url, second.webhook_url);
        assert_eq!(first.embed_code, second.embed_code);
        assert_eq!(first.api_endpoint, second.api_endpoint);
        assert_eq!(first.integration_code, second.integration_code);
        assert_eq!(first.webhook_verification, second.webhook_verification);
        assert_eq!(
            first.platform_specific_config,
            second.platform_specific_config
        );
        assert_eq!(first.testing_guide, second.testing_guide);
    }
}

#[test]
fn test_fresh_id_generated_when_absent() {
    let generator = create_test_generator();
    let request = DeploymentRequest::new("Telegram", "agent-1", "Helper");

    let first = generator.generate(&request).unwrap();
    let second = generator.generate(&request).unwrap();

    assert!(is_valid_deployment_id(&first.deployment_id));
    assert!(is_valid_deployment_id(&second.deployment_id));
    assert_ne!(first.deployment_id, second.deployment_id);
    assert!(first.webhook_url.ends_with(&first.deployment_id));
}

#[test]
fn test_generated_id_format() {
    for _ in 0..100 {
        let id = generate_deployment_id();
        assert_eq!(id.len(), 21);
        assert!(is_valid_deployment_id(&id));
        assert!(id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-'));
    }
}

#[test]
fn test_base_url_trailing_slash_stripped() {
    let generator = DeploymentGeneratorBuilder::new()
        .with_base_url("https://staging.kynex.dev///")
        .build()
        .unwrap();

    assert_eq!(generator.base_url(), "https://staging.kynex.dev");

    let bundle = generator.generate(&request_for("Telegram")).unwrap();
    assert_eq!(
        bundle.webhook_url,
        "https://staging.kynex.dev/api/webhook/telegram/dep123"
    );
}

#[test]
fn test_builder_rejects_empty_base_url() {
    let result = DeploymentGeneratorBuilder::new().with_base_url("").build();
    assert!(matches!(result, Err(Error::Configuration(_))));

    let result = DeploymentGeneratorBuilder::new().with_base_url("///").build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_builder_defaults_to_hosted_base_url() {
    let generator = DeploymentGeneratorBuilder::new().build().unwrap();
    assert_eq!(generator.base_url(), DEFAULT_BASE_URL);

    let generator = DeploymentGenerator::default();
    assert_eq!(generator.base_url(), DEFAULT_BASE_URL);
}

#[test]
fn test_generator_from_config() {
    let config = GeneratorConfig::default().with_base_url("https://eu.kynex.dev/");
    let generator = DeploymentGenerator::new(config);
    assert_eq!(generator.base_url(), "https://eu.kynex.dev");
}

#[test]
fn test_with_credentials_replaces_map() {
    let generator = create_test_generator();
    let credentials = HashMap::from([
        ("app_id".to_string(), "12345".to_string()),
        ("access_token".to_string(), "tok".to_string()),
    ]);
    let request = request_for("Instagram").with_credentials(credentials);
    let bundle = generator.generate(&request).unwrap();

    assert!(bundle
        .setup_instructions
        .iter()
        .filter(|l| l.starts_with('✅'))
        .count()
        == 2);
}

#[test]
fn test_platform_parse_round_trip() {
    for platform in Platform::ALL {
        let parsed: Platform = platform.as_str().parse().unwrap();
        assert_eq!(parsed, platform);
    }

    assert!(matches!(
        "Discord".parse::<Platform>(),
        Err(Error::UnsupportedPlatform(_))
    ));
}

#[test]
fn test_required_credentials_table() {
    let expected: [(Platform, &[&str]); 6] = [
        (Platform::WebsiteWidget, &[]),
        (Platform::ApiWebhook, &[]),
        (Platform::WhatsApp, &["business_api_key"]),
        (Platform::Telegram, &["bot_token"]),
        (Platform::Twitter, &["api_key", "api_secret", "bearer_token"]),
        (Platform::Instagram, &["app_id", "access_token"]),
    ];

    for (platform, keys) in expected {
        assert_eq!(platform.required_credentials(), keys);
    }
}

#[test]
fn test_bundle_serializes_camel_case() {
    let generator = create_test_generator();
    let bundle = generator.generate(&request_for("API Webhook")).unwrap();

    let value = serde_json::to_value(&bundle).unwrap();
    let obj = value.as_object().unwrap();

    assert!(obj.contains_key("webhookUrl"));
    assert!(obj.contains_key("apiEndpoint"));
    assert!(obj.contains_key("integrationCode"));
    assert!(obj.contains_key("platformSpecificConfig"));
    assert!(obj.contains_key("setupInstructions"));
    // None fields are omitted entirely
    assert!(!obj.contains_key("embedCode"));
}

#[test]
fn test_request_deserializes_with_defaults() {
    let request: DeploymentRequest = serde_json::from_str(
        r#"{"platform": "Telegram", "agentId": "a1", "agentName": "Helper"}"#,
    )
    .unwrap();

    assert_eq!(request.platform, "Telegram");
    assert_eq!(request.credentials, HashMap::new());
    assert!(request.deployment_id.is_none());
}
