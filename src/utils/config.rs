use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::warn;

/// Gets an environment variable or returns a default value
///
/// Surrounding whitespace is trimmed and a blank value counts as unset, so an
/// entry like `RELATEIQ_BASE_URL=` in a `.env` file falls back to the default.
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The value to use if the variable is unset, blank or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match read_env(env_var) {
        Some(val) => val.parse::<T>().unwrap_or_else(|e| {
            warn!("Failed to parse {}={:?} ({:?}), using default", env_var, val, e);
            default
        }),
        None => default,
    }
}

fn read_env(env_var: &str) -> Option<String> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
