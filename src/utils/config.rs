/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads an environment variable and parses it, falling back to `default`
///
/// Unparseable values are logged and replaced by the default.
///
/// # Arguments
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or invalid
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse {}={:?}: {:?}, using default", env_var, raw, e);
            default
        }
    }
}

/// Reads an environment variable and parses it, `None` when missing or invalid
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var)
        .ok()
        .and_then(|raw| raw.trim().parse::<T>().ok())
}

/// Reads a boolean flag; accepts `1/0`, `true/false`, `yes/no` and `on/off`
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    let Ok(raw) = env::var(env_var) else {
        return default;
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        other => {
            error!("Invalid boolean {}={:?}, using {}", env_var, other, default);
            default
        }
    }
}
