//! Access-token and base-URL resolution from multiple sources

use log::debug;

use crate::config::{api, credentials};
use crate::error::{Error, Result};
use crate::settings::Settings;

/// Resolve the access token: CLI flag, then environment, then config file.
pub fn resolve_token(cli_token: Option<&str>, settings: &Settings) -> Result<String> {
    if let Some(token) = cli_token {
        debug!("Using access token from CLI flag");
        return Ok(token.to_string());
    }

    if let Ok(token) = std::env::var(credentials::TOKEN_ENV_VAR) {
        if !token.is_empty() {
            debug!(
                "Using access token from {} environment variable",
                credentials::TOKEN_ENV_VAR
            );
            return Ok(token);
        }
    }

    if let Some(token) = settings.get(&[], "access-token") {
        debug!("Using access token from config file");
        return Ok(token);
    }

    Err(Error::Config(token_not_found_message()))
}

/// Resolve the API base URL: CLI flag, env, config file, built-in default.
pub fn resolve_api_url(cli_url: Option<&str>, settings: &Settings) -> String {
    crate::settings::resolve_value(
        cli_url,
        Some(credentials::API_URL_ENV_VAR),
        settings,
        &[],
        "api-url",
        Some(api::DEFAULT_BASE_URL),
    )
    .unwrap_or_else(|| api::DEFAULT_BASE_URL.to_string())
}

fn token_not_found_message() -> String {
    let config_path = Settings::default_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "~/.config/nimbusctl/config.yaml".to_string());

    format!(
        "No access token found. Please provide one using one of:\n\
         \n\
         1. CLI flag:         nimbusctl --access-token <TOKEN> ...\n\
         2. Environment var:  export {}=<TOKEN>\n\
         3. Config file:      access-token: <TOKEN>  (in {})",
        credentials::TOKEN_ENV_VAR,
        config_path
    )
}
