//! Template builders for generated embed markup, integration code samples,
//! and webhook verification samples.
//!
//! Everything here is plain string interpolation over fixed templates; the
//! samples are developer-facing starting points, not code this crate ever
//! executes. Each builder takes the resolved deployment id (directly or via
//! a URL derived from it) so that every snippet in one bundle references
//! the same deployment.

/// Self-contained embed snippet for the website widget: container element,
/// styling, and loader script. The container id is `kynex-agent-{id}`.
pub fn widget_embed(base_url: &str, deployment_id: &str, agent_name: &str) -> String {
    format!(
        r#"<!-- KYNEX chat widget for "{agent_name}" -->
<div id="kynex-agent-{deployment_id}"></div>
<style>
  #kynex-agent-{deployment_id} {{
    position: fixed;
    bottom: 24px;
    right: 24px;
    z-index: 9999;
  }}
</style>
<script>
  (function () {{
    var s = document.createElement('script');
    s.src = '{base_url}/widget.js';
    s.async = true;
    s.onload = function () {{
      KynexWidget.init({{
        container: 'kynex-agent-{deployment_id}',
        deploymentId: '{deployment_id}',
        endpoint: '{base_url}/api/webhook/widget/{deployment_id}',
        title: '{agent_name}'
      }});
    }};
    document.head.appendChild(s);
  }})();
</script>"#
    )
}

/// React component wrapper around the widget loader.
pub fn widget_react(base_url: &str, deployment_id: &str, agent_name: &str) -> String {
    format!(
        r#"import {{ useEffect }} from 'react';

export function KynexChat() {{
  useEffect(() => {{
    const script = document.createElement('script');
    script.src = '{base_url}/widget.js';
    script.async = true;
    script.onload = () => {{
      window.KynexWidget.init({{
        container: 'kynex-agent-{deployment_id}',
        deploymentId: '{deployment_id}',
        endpoint: '{base_url}/api/webhook/widget/{deployment_id}',
        title: '{agent_name}'
      }});
    }};
    document.head.appendChild(script);
    return () => script.remove();
  }}, []);

  return <div id="kynex-agent-{deployment_id}" />;
}}"#
    )
}

/// Vue single-file component variant.
pub fn widget_vue(base_url: &str, deployment_id: &str, agent_name: &str) -> String {
    format!(
        r#"<template>
  <div id="kynex-agent-{deployment_id}"></div>
</template>

<script>
export default {{
  name: 'KynexChat',
  mounted() {{
    const script = document.createElement('script');
    script.src = '{base_url}/widget.js';
    script.async = true;
    script.onload = () => {{
      window.KynexWidget.init({{
        container: 'kynex-agent-{deployment_id}',
        deploymentId: '{deployment_id}',
        endpoint: '{base_url}/api/webhook/widget/{deployment_id}',
        title: '{agent_name}'
      }});
    }};
    document.head.appendChild(script);
  }}
}};
</script>"#
    )
}

/// WordPress shortcode registration for functions.php.
pub fn widget_wordpress(base_url: &str, deployment_id: &str) -> String {
    format!(
        r#"// Add to your theme's functions.php, then use [kynex_chat] in any page.
function kynex_chat_shortcode() {{
    return '<div id="kynex-agent-{deployment_id}"></div>'
        . '<script src="{base_url}/widget.js" async '
        . 'data-container="kynex-agent-{deployment_id}" '
        . 'data-deployment-id="{deployment_id}"></script>';
}}
add_shortcode('kynex_chat', 'kynex_chat_shortcode');"#
    )
}

/// Node.js sample for calling the direct message endpoint.
pub fn api_node(api_endpoint: &str, agent_name: &str) -> String {
    format!(
        r#"// Send a message to "{agent_name}" and print the reply.
const response = await fetch('{api_endpoint}', {{
  method: 'POST',
  headers: {{
    'Content-Type': 'application/json',
    'Authorization': `Bearer ${{process.env.KYNEX_API_KEY}}`
  }},
  body: JSON.stringify({{
    message: 'Hello!',
    sessionId: 'user-session-1'
  }})
}});

const {{ reply }} = await response.json();
console.log(reply);"#
    )
}

/// Python sample for calling the direct message endpoint.
pub fn api_python(api_endpoint: &str, agent_name: &str) -> String {
    format!(
        r#"# Send a message to "{agent_name}" and print the reply.
import os
import requests

response = requests.post(
    "{api_endpoint}",
    headers={{
        "Content-Type": "application/json",
        "Authorization": f"Bearer {{os.environ['KYNEX_API_KEY']}}",
    }},
    json={{"message": "Hello!", "sessionId": "user-session-1"}},
)
response.raise_for_status()
print(response.json()["reply"])"#
    )
}

/// cURL sample for the direct message endpoint.
pub fn api_curl(api_endpoint: &str) -> String {
    format!(
        r#"curl -X POST '{api_endpoint}' \
  -H 'Content-Type: application/json' \
  -H "Authorization: Bearer $KYNEX_API_KEY" \
  -d '{{"message": "Hello!", "sessionId": "user-session-1"}}'"#
    )
}

/// HMAC-SHA256 signature verification sample for inbound generic webhooks.
pub fn webhook_signature_verification(signature_header: &str) -> String {
    format!(
        r#"// Verify that an incoming webhook call originated from KYNEX.
const crypto = require('crypto');

function verifyKynexSignature(req, webhookSecret) {{
  const signature = req.headers['{signature_header}'];
  if (!signature) return false;

  const expected = crypto
    .createHmac('sha256', webhookSecret)
    .update(JSON.stringify(req.body))
    .digest('hex');

  return crypto.timingSafeEqual(
    Buffer.from(signature),
    Buffer.from(expected)
  );
}}

app.post('/your-webhook-endpoint', (req, res) => {{
  if (!verifyKynexSignature(req, process.env.KYNEX_WEBHOOK_SECRET)) {{
    return res.status(401).send('invalid signature');
  }}
  // handle the event
  res.sendStatus(200);
}});"#
    )
}

/// Meta-style hub.challenge verification handler, shared shape between
/// WhatsApp and Instagram (only the verify token differs).
pub fn meta_challenge_verification(verify_token: &str, platform_label: &str) -> String {
    format!(
        r#"// {platform_label} webhook verification: Meta sends a GET request with
// hub.mode, hub.verify_token and hub.challenge. Echo the challenge back
// when the token matches.
app.get('/webhook', (req, res) => {{
  const mode = req.query['hub.mode'];
  const token = req.query['hub.verify_token'];
  const challenge = req.query['hub.challenge'];

  if (mode === 'subscribe' && token === '{verify_token}') {{
    res.status(200).send(challenge);
  }} else {{
    res.sendStatus(403);
  }}
}});"#
    )
}

/// Telegram webhook registration call for the Bot API.
///
/// `bot_token` is the user's real token when supplied, or a
/// `<YOUR_BOT_TOKEN>` placeholder otherwise.
pub fn telegram_register_webhook(bot_token: &str, webhook_url: &str) -> String {
    format!(
        r#"# Register the KYNEX webhook with the Telegram Bot API.
curl -X POST 'https://api.telegram.org/bot{bot_token}/setWebhook' \
  -H 'Content-Type: application/json' \
  -d '{{"url": "{webhook_url}", "allowed_updates": ["message", "callback_query"]}}'

# Confirm registration:
curl 'https://api.telegram.org/bot{bot_token}/getWebhookInfo'"#
    )
}

/// X (Twitter) Account Activity sample handling both DMs and mentions.
pub fn twitter_dm_mention_handler(agent_name: &str, webhook_url: &str) -> String {
    format!(
        r#"// Account Activity events for "{agent_name}" arrive on {webhook_url}.
// KYNEX forwards them here after CRC validation; both direct messages
// and mentions are routed through the agent.
app.post('/webhook', (req, res) => {{
  const event = req.body;

  if (event.direct_message_events) {{
    for (const dm of event.direct_message_events) {{
      console.log('DM from', dm.message_create.sender_id, ':',
        dm.message_create.message_data.text);
    }}
  }}

  if (event.tweet_create_events) {{
    for (const tweet of event.tweet_create_events) {{
      if (tweet.text.includes('@')) {{
        console.log('Mention from @' + tweet.user.screen_name, ':', tweet.text);
      }}
    }}
  }}

  res.sendStatus(200);
}});"#
    )
}

/// Instagram messaging sample handling both comments and DMs.
pub fn instagram_event_handler(agent_name: &str) -> String {
    format!(
        r#"// Instagram events for "{agent_name}": comments and direct messages
// both arrive as entry changes on the subscribed webhook.
app.post('/webhook', (req, res) => {{
  for (const entry of req.body.entry ?? []) {{
    for (const change of entry.changes ?? []) {{
      if (change.field === 'comments') {{
        console.log('Comment:', change.value.text);
      }}
    }}
    for (const messaging of entry.messaging ?? []) {{
      if (messaging.message) {{
        console.log('DM from', messaging.sender.id, ':', messaging.message.text);
      }}
    }}
  }}
  res.sendStatus(200);
}});"#
    )
}
