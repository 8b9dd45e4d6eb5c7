use consumption_gateway::config::*;
use consumption_gateway::error::ConfigError;
use std::collections::HashMap;
use std::time::Duration;

// Helper function to build a configuration from a fixed set of variables
fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

const CREDENTIALS: [(&str, &str); 3] = [
    (OAUTH_CLIENT_ID, "client-123"),
    (OAUTH_CLIENT_SECRET, "secret-456"),
    (OAUTH_CALLBACK, "http://localhost:3000/callback"),
];

#[test]
fn test_defaults() {
    let config = config_from(&CREDENTIALS).unwrap();

    assert_eq!(config.credentials.client_id, "client-123");
    assert_eq!(config.credentials.client_secret, "secret-456");
    assert_eq!(config.credentials.redirect_uri, "http://localhost:3000/callback");
    assert_eq!(config.server_addr.to_string(), DEFAULT_SERVER_ADDRESS);
    assert_eq!(
        config.upstream_timeout,
        Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS)
    );
    assert_eq!(config.token_url.as_str(), DEFAULT_TIBBER_TOKEN_URL);
    assert_eq!(config.profile_url.as_str(), DEFAULT_SVK_PROFILE_URL);
}

#[test]
fn test_missing_credentials() {
    for (i, (key, _)) in CREDENTIALS.iter().enumerate() {
        // Unset
        let mut vars = CREDENTIALS.to_vec();
        vars.remove(i);
        match config_from(&vars) {
            Err(ConfigError::Missing(missing)) => assert_eq!(missing, *key),
            other => panic!("expected missing {}, got {:?}", key, other),
        }

        // Set but empty
        let mut vars = CREDENTIALS.to_vec();
        vars[i].1 = "";
        match config_from(&vars) {
            Err(ConfigError::Missing(missing)) => assert_eq!(missing, *key),
            other => panic!("expected missing {}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_overrides() {
    let mut vars = CREDENTIALS.to_vec();
    vars.extend([
        (SERVER_ADDRESS, "127.0.0.1:9000"),
        (UPSTREAM_TIMEOUT_SECS, "5"),
        (TIBBER_TOKEN_URL, "http://127.0.0.1:1234/connect/token"),
        (SVK_PROFILE_URL, "http://127.0.0.1:1234/profile"),
    ]);

    let config = config_from(&vars).unwrap();

    assert_eq!(config.server_addr.to_string(), "127.0.0.1:9000");
    assert_eq!(config.upstream_timeout, Duration::from_secs(5));
    assert_eq!(config.token_url.as_str(), "http://127.0.0.1:1234/connect/token");
    assert_eq!(config.profile_url.as_str(), "http://127.0.0.1:1234/profile");
}

#[test]
fn test_invalid_optional_values() {
    let cases = [
        (SERVER_ADDRESS, "not an address"),
        (UPSTREAM_TIMEOUT_SECS, "0"),
        (UPSTREAM_TIMEOUT_SECS, "ten"),
        (TIBBER_TOKEN_URL, "no scheme"),
        (SVK_PROFILE_URL, "::"),
    ];

    for (key, value) in cases {
        let mut vars = CREDENTIALS.to_vec();
        vars.push((key, value));
        match config_from(&vars) {
            Err(ConfigError::Invalid { key: invalid, .. }) => assert_eq!(invalid, key),
            other => panic!("expected invalid {}, got {:?}", key, other),
        }
    }
}

#[test]
fn test_debug_output_hides_secret() {
    let config = config_from(&CREDENTIALS).unwrap();
    let debug = format!("{:?}", config);

    assert!(debug.contains("client-123"));
    assert!(!debug.contains("secret-456"));
}
