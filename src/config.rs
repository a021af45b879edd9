//! Configuration management for the contact pipeline.
//!
//! Three independent groups are loaded from environment variables (with an
//! optional `.env` file):
//!
//! - [`Config`]: server settings and the public company profile. Always loads.
//! - [`EmailConfig`]: provider credentials and addresses. May be missing; the
//!   server still starts and refuses every submission until it is present.
//! - [`ClientConfig`]: which delivery strategy the contact form uses.

use crate::domain::EmailAddress;
use crate::error::{ConfigError, ConfigResult};
use std::env;

const DEFAULT_RESEND_API_BASE_URL: &str = "https://api.resend.com";

/// Public company details that appear in acknowledgment emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteProfile {
    /// Company name
    pub name: String,

    /// Public site URL, no trailing slash
    pub url: String,

    /// Public phone number
    pub phone: String,

    /// General inquiries address
    pub info_email: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            name: "Enercam Solar Roofs".to_string(),
            url: "https://enercam.com".to_string(),
            phone: "+237-622-672-1748".to_string(),
            info_email: "info@enercam.com".to_string(),
        }
    }
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP server binds to (default: 127.0.0.1:3000)
    pub bind_address: String,

    /// Outbound HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,

    /// Company profile for email content
    pub site: SiteProfile,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIND_ADDRESS`: listen address (default: 127.0.0.1:3000)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `LOG_LEVEL`: logging level (default: "info")
    /// - `SITE_URL`, `SITE_PHONE`, `SITE_INFO_EMAIL`: company profile
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = SiteProfile::default();

        let site_url = env::var("SITE_URL").unwrap_or(defaults.url);
        validate_http_url("SITE_URL", &site_url)?;

        let info_email = env::var("SITE_INFO_EMAIL").unwrap_or(defaults.info_email);
        validate_address("SITE_INFO_EMAIL", &info_email)?;

        let request_timeout = request_timeout()?;

        Ok(Config {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "127.0.0.1:3000".to_string()),
            request_timeout,
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            site: SiteProfile {
                name: defaults.name,
                url: site_url.trim_end_matches('/').to_string(),
                phone: env::var("SITE_PHONE").unwrap_or(defaults.phone),
                info_email,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_address: "127.0.0.1:3000".to_string(),
            request_timeout: 10,
            log_level: "info".to_string(),
            site: SiteProfile::default(),
        }
    }
}

/// Email provider configuration. All three of key, sender and staff address
/// are required.
#[derive(Clone)]
pub struct EmailConfig {
    /// Provider API key
    pub api_key: String,

    /// Provider API base URL (default: https://api.resend.com)
    pub api_base_url: String,

    /// Sender for both emails
    pub from: String,

    /// Staff inbox for notifications
    pub to: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("from", &self.from)
            .field("to", &self.to)
            .finish()
    }
}

impl EmailConfig {
    /// Load provider configuration.
    ///
    /// Required environment variables:
    /// - `RESEND_API_KEY`: provider API key
    /// - `EMAIL_FROM`: sender address (may be `Name <addr>`)
    /// - `EMAIL_TO`: staff inbox
    ///
    /// Optional:
    /// - `RESEND_API_BASE_URL`: provider base URL
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let api_key = required_var("RESEND_API_KEY")?;
        let from = required_var("EMAIL_FROM")?;
        let to = required_var("EMAIL_TO")?;

        validate_address("EMAIL_FROM", mailbox_address(&from))?;
        validate_address("EMAIL_TO", &to)?;

        let api_base_url = env::var("RESEND_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_RESEND_API_BASE_URL.to_string());
        validate_http_url("RESEND_API_BASE_URL", &api_base_url)?;

        Ok(EmailConfig {
            api_key,
            api_base_url,
            from,
            to,
        })
    }
}

/// How the contact form hands off a validated submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeliveryMode {
    /// Open the user's mail client with a prefilled message
    #[default]
    Mailto,
    /// POST the submission to the contact endpoint
    Http,
}

/// Client-side configuration for the contact form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub mode: DeliveryMode,

    /// Contact endpoint URL; required in `Http` mode
    pub endpoint_url: Option<String>,

    /// Address the mailto link targets
    pub mailto_address: String,

    /// HTTP timeout in seconds for the endpoint call
    pub request_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            mode: DeliveryMode::Mailto,
            endpoint_url: None,
            mailto_address: SiteProfile::default().info_email,
            request_timeout: 10,
        }
    }
}

impl ClientConfig {
    /// Load client configuration.
    ///
    /// - `CONTACT_DELIVERY_MODE`: `mailto` (default) or `http`
    /// - `CONTACT_ENDPOINT_URL`: required when mode is `http`
    /// - `CONTACT_MAILTO_ADDRESS`: default `info@enercam.com`
    /// - `REQUEST_TIMEOUT`: seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let mode = match env::var("CONTACT_DELIVERY_MODE") {
            Err(_) => DeliveryMode::Mailto,
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "mailto" => DeliveryMode::Mailto,
                "http" => DeliveryMode::Http,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: "CONTACT_DELIVERY_MODE".to_string(),
                        reason: format!("Expected 'mailto' or 'http', got: {}", raw),
                    })
                }
            },
        };

        let endpoint_url = env::var("CONTACT_ENDPOINT_URL").ok();
        match (&mode, &endpoint_url) {
            (DeliveryMode::Http, None) => {
                return Err(ConfigError::MissingVar("CONTACT_ENDPOINT_URL".to_string()))
            }
            (_, Some(url)) => validate_http_url("CONTACT_ENDPOINT_URL", url)?,
            _ => {}
        }

        let mailto_address = env::var("CONTACT_MAILTO_ADDRESS")
            .unwrap_or_else(|_| SiteProfile::default().info_email);
        validate_address("CONTACT_MAILTO_ADDRESS", &mailto_address)?;

        Ok(ClientConfig {
            mode,
            endpoint_url,
            mailto_address,
            request_timeout: request_timeout()?,
        })
    }
}

/// Read a required, non-blank environment variable.
fn required_var(var_name: &str) -> ConfigResult<String> {
    let value = env::var(var_name).map_err(|_| ConfigError::MissingVar(var_name.to_string()))?;
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "Cannot be empty".to_string(),
        });
    }
    Ok(value)
}

fn validate_http_url(var_name: &str, url: &str) -> ConfigResult<()> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: "Must start with http:// or https://".to_string(),
        });
    }
    Ok(())
}

fn validate_address(var_name: &str, address: &str) -> ConfigResult<()> {
    EmailAddress::new(address)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Not a valid email address: {}", address),
        })
}

/// Extract `addr` from `Display Name <addr>`, or return the input unchanged.
fn mailbox_address(mailbox: &str) -> &str {
    match (mailbox.rfind('<'), mailbox.rfind('>')) {
        (Some(start), Some(end)) if start < end => &mailbox[start + 1..end],
        _ => mailbox,
    }
}

/// `REQUEST_TIMEOUT` in seconds (default: 10). Zero would time out every request.
fn request_timeout() -> ConfigResult<u64> {
    let timeout = parse_env_u64("REQUEST_TIMEOUT", 10)?;
    if timeout == 0 {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT".to_string(),
            reason: "Must be at least 1 second".to_string(),
        });
    }
    Ok(timeout)
}

/// Parse an environment variable as u64 with a default value.
fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
    match env::var(var_name) {
        Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
            var: var_name.to_string(),
            reason: format!("Must be a positive number, got: {}", val),
        }),
        Err(_) => Ok(default),
    }
}
