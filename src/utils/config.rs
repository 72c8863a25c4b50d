/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A variable that is present but cannot be parsed is logged and replaced by the default.
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.trim().parse::<T>().unwrap_or_else(|e| {
            error!("Failed to parse {}={}: {:?}, using default", env_var, val, e);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable
///
/// Returns `None` when the variable is missing, empty or cannot be parsed.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T> {
    env::var(env_var)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
        .and_then(|val| val.parse::<T>().ok())
}

/// Reads a boolean flag from the environment
///
/// Accepts `1`, `true`, `yes` and `on` (case-insensitive) as true and `0`, `false`, `no`
/// and `off` as false; anything else yields `default`.
pub fn get_env_flag(env_var: &str, default: bool) -> bool {
    match env::var(env_var) {
        Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => {
                error!("Invalid flag {}={}, using default", env_var, val);
                default
            }
        },
        Err(_) => default,
    }
}
