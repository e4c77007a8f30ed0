use crate::constants::{DEFAULT_COUNTRY_ID, DEFAULT_TIMEOUT_SECS, PRODUCTION_URL, SANDBOX_URL};
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Login data for the Allegro WebAPI
pub struct Credentials {
    /// User login
    pub login: String,
    /// Raw password, hashed at connect time and never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    /// WebAPI key (see allegro.pl/myaccount/webapi.php)
    pub api_key: String,
}

/// Service the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    /// webapisandbox.pl test service
    Sandbox,
    /// Live service
    Production,
}

impl Environment {
    /// Maps the constructor's sandbox flag to an environment
    #[must_use]
    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox {
            Environment::Sandbox
        } else {
            Environment::Production
        }
    }

    /// WSDL location of the service
    #[must_use]
    pub fn wsdl_url(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_URL,
            Environment::Production => PRODUCTION_URL,
        }
    }

    /// Service URL, the WSDL location without its query
    #[must_use]
    pub fn service_url(self) -> &'static str {
        self.wsdl_url().trim_end_matches("?wsdl")
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration of the SOAP transport
pub struct SoapConfig {
    /// Use the sandbox instead of production
    pub sandbox: bool,
    /// Overrides the endpoint requests are posted to
    pub endpoint_url: Option<String>,
    /// HTTP timeout in seconds
    pub timeout: u64,
}

impl SoapConfig {
    /// Configuration for one of the two fixed endpoints
    #[must_use]
    pub fn for_environment(sandbox: bool) -> Self {
        Self {
            sandbox,
            endpoint_url: None,
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Selected environment
    #[must_use]
    pub fn environment(&self) -> Environment {
        Environment::from_sandbox_flag(self.sandbox)
    }

    /// URL requests are posted to
    #[must_use]
    pub fn endpoint(&self) -> String {
        self.endpoint_url
            .clone()
            .unwrap_or_else(|| self.environment().service_url().to_string())
    }

    /// Namespace of the request elements; does not follow endpoint overrides
    #[must_use]
    pub fn namespace(&self) -> String {
        self.environment().service_url().to_string()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration of the Allegro WebAPI client
pub struct Config {
    /// Login data
    pub credentials: Credentials,
    /// Transport configuration
    pub soap: SoapConfig,
    /// Country used by `connect`
    pub country_id: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment and an optional `.env` file
    ///
    /// Missing credentials are logged and replaced by placeholders, so
    /// `connect` will then be rejected by the service.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let login = get_env_or_default("ALLEGRO_LOGIN", String::from("default_login"));
        let password = get_env_or_default("ALLEGRO_PASSWORD", String::from("default_password"));
        let api_key = get_env_or_default("ALLEGRO_API_KEY", String::from("default_api_key"));

        if login == "default_login" {
            error!("ALLEGRO_LOGIN not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("ALLEGRO_PASSWORD not found in environment variables or .env file");
        }
        if api_key == "default_api_key" {
            error!("ALLEGRO_API_KEY not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                login,
                password,
                api_key,
            },
            soap: SoapConfig {
                sandbox: get_env_flag("ALLEGRO_SANDBOX", false),
                endpoint_url: get_env_or_none::<String>("ALLEGRO_ENDPOINT_URL")
                    .filter(|url| !url.is_empty()),
                timeout: get_env_or_default("ALLEGRO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            country_id: get_env_or_default("ALLEGRO_COUNTRY_ID", DEFAULT_COUNTRY_ID),
        }
    }
}
