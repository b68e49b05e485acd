//! Cache Key Derivation
//!
//! Builds deterministic cache keys from request-identifying parameters.

use crate::error::{ElectionError, Result};

/// Derives the cache key for a request.
///
/// Parameter names are trimmed and lowercased, values are trimmed, and the
/// pairs are sorted so that the same logical request always maps to the same
/// key regardless of parameter order or incidental whitespace. The result
/// looks like `namespace?name=value&name=value`.
pub fn cache_key(namespace: &str, params: &[(&str, &str)]) -> Result<String> {
    let namespace = namespace.trim();
    if namespace.is_empty() {
        return Err(ElectionError::InvalidKey(
            "Cache key namespace cannot be empty".to_string(),
        ));
    }

    let mut pairs: Vec<(String, String)> = Vec::with_capacity(params.len());
    for (name, value) in params {
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(ElectionError::InvalidKey(
                "Cache key parameter name cannot be empty".to_string(),
            ));
        }
        pairs.push((escape(&name), escape(value.trim())));
    }
    pairs.sort();

    let query = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("&");

    Ok(format!("{}?{}", escape(namespace), query))
}

/// Escapes the separator characters so distinct parameter sets cannot
/// render to the same key.
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '=' => out.push_str("%3D"),
            '?' => out.push_str("%3F"),
            _ => out.push(ch),
        }
    }
    out
}
