use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

use crate::types::ProxyQuery;

/// Returns the named query parameter when it is present and non-empty.
pub fn query_value<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

pub fn require_profile_query(params: &HashMap<String, String>) -> Option<ProxyQuery> {
    Some(ProxyQuery {
        period_from: query_value(params, "periodFrom")?.to_string(),
        period_to: query_value(params, "periodTo")?.to_string(),
        network_area_id: query_value(params, "networkAreaIdString")?.to_string(),
    })
}

/// Upper bound for `expires_in`, in seconds.
pub const MAX_EXPIRES_IN: i64 = i32::MAX as i64;

/// `expires_in` arrives as a number from most providers and as a numeric
/// string from some. Absent or `null` reads as 0; values beyond
/// [`MAX_EXPIRES_IN`] in either direction are capped.
///
/// # Errors
///
/// Returns the offending value when it is present but not an integer.
pub fn parse_expires_in(value: Option<&Value>) -> Result<i64, String> {
    let secs = match value {
        None | Some(Value::Null) => return Ok(0),
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match secs {
        Some(secs) => Ok(secs.clamp(-MAX_EXPIRES_IN, MAX_EXPIRES_IN)),
        None => Err(value.map(Value::to_string).unwrap_or_default()),
    }
}

/// Zero means the provider did not set an expiry.
pub fn expiry_from(expires_in: i64, obtained_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if expires_in == 0 {
        return None;
    }

    let secs = expires_in.clamp(-MAX_EXPIRES_IN, MAX_EXPIRES_IN);
    obtained_at.checked_add_signed(Duration::seconds(secs))
}

pub fn render_env_script(client_id: &str, callback: &str) -> String {
    let pairs = [("OAUTH_CLIENT_ID", client_id), ("OAUTH_CALLBACK", callback)]
        .iter()
        .map(|(key, value)| format!("{}:{}", key, Value::from(*value)))
        .collect::<Vec<_>>()
        .join(", ");

    format!("window.env = {{{}}}", pairs)
}
