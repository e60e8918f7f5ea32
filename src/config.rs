/// Configuration constants for the Nimbus Cloud API
pub mod api {
    /// Default base URL for the Nimbus v2 API
    pub const DEFAULT_BASE_URL: &str = "https://api.nimbus.cloud/v2";

    /// Default page size for paginated list requests
    pub const DEFAULT_PER_PAGE: u32 = 200;

    /// Connect timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Overall per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;
}

/// Configuration constants for credentials and the config file
pub mod credentials {
    /// Environment variable carrying the access token
    pub const TOKEN_ENV_VAR: &str = "NIMBUS_ACCESS_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "NIMBUS_API_URL";

    /// Config file name, relative to the user config directory
    pub const CONFIG_FILE_NAME: &str = "nimbusctl/config.yaml";
}

/// Default values for CLI behavior
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";

    /// Log level used when --verbose is set
    pub const VERBOSE_LOG_LEVEL: &str = "debug";

    /// Poll interval for action waits, in seconds
    pub const ACTION_POLL_SECS: u64 = 5;
}

/// Process exit codes
pub mod exit {
    /// Command completed successfully
    pub const OK: i32 = 0;

    /// Runtime failure (transport, API, validation, rendering)
    pub const FAILURE: i32 = 1;

    /// Usage error (bad flag, missing argument)
    pub const USAGE: i32 = 64;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url_is_https() {
        assert!(api::DEFAULT_BASE_URL.starts_with("https://"));
        assert!(!api::DEFAULT_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_default_per_page() {
        assert_eq!(api::DEFAULT_PER_PAGE, 200);
    }

    #[test]
    fn test_token_env_var_name() {
        assert_eq!(credentials::TOKEN_ENV_VAR, "NIMBUS_ACCESS_TOKEN");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit::OK, 0);
        assert_eq!(exit::FAILURE, 1);
        assert_eq!(exit::USAGE, 64);
    }
}
