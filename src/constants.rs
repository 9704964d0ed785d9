/// Default base URL of the RelateIQ REST API, including the version path.
///
/// The trailing slash matters: every request path is resolved relative to it.
pub const DEFAULT_BASE_URL: &str = "https://api.relateiq.com/v2/";
/// User agent string sent with every request unless overridden on the client
pub const USER_AGENT: &str = concat!("relateiq-client/", env!("CARGO_PKG_VERSION"));
/// Default timeout in seconds for REST API requests built from a [`Config`](crate::application::config::Config)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Path of the accounts endpoint, relative to the versioned API root
pub const ACCOUNTS_PATH: &str = "accounts";
/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "RELATEIQ_API_KEY";
/// Environment variable holding the API secret
pub const ENV_API_SECRET: &str = "RELATEIQ_API_SECRET";
/// Environment variable overriding the API base URL
pub const ENV_BASE_URL: &str = "RELATEIQ_BASE_URL";
/// Environment variable overriding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "RELATEIQ_TIMEOUT";
/// Environment variable overriding the user agent
pub const ENV_USER_AGENT: &str = "RELATEIQ_USER_AGENT";
