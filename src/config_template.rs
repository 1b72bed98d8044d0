/// First-run gateway configuration, written verbatim. The document is JSON5
/// and the `${...}` placeholders are resolved by the gateway itself from its
/// environment, so the shell never parses or rewrites it.
pub(crate) const DEFAULT_CONFIG_TEMPLATE: &str = r#"{
  gateway: {
    mode: "local",
    bind: "loopback",
    port: 18789,
    auth: {
      mode: "token",
      token: "${CLAWDBOT_GATEWAY_TOKEN}"
    }
  },
  env: {
    OPENROUTER_API_KEY: "${OPENROUTER_API_KEY}"
  },
  agents: {
    defaults: {
      model: {
        primary: "openrouter/deepseek/deepseek-r1:free"
      }
    }
  }
}
"#;
