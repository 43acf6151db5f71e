//! `${VAR}` expansion for configuration strings.
//!
//! Search credentials are usually injected by CI rather than committed, so
//! `docnav.toml` may reference the environment:
//!
//! - `${VAR}` - value of VAR, error if unset
//! - `${VAR:-default}` - value of VAR, or `default` if unset
//!
//! Any other `$`, including bare `$VAR`, is kept literally so URLs containing
//! `$` survive.

use crate::ConfigError;

/// Lookup failure carried through `shellexpand`.
struct MissingVar(String);

/// Expand `${...}` references in `value`, naming `field` in errors.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(&escape_bare_dollars(value), |name| {
        std::env::var(name)
            .map(Some)
            .map_err(|_| MissingVar(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Double every `$` outside a `${...}` reference so `shellexpand` keeps it.
fn escape_bare_dollars(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(idx) = rest.find('$') {
        escaped.push_str(&rest[..idx]);
        rest = &rest[idx..];
        let reference_end = rest
            .starts_with("${")
            .then(|| rest.find('}'))
            .flatten();
        match reference_end {
            Some(end) => {
                escaped.push_str(&rest[..=end]);
                rest = &rest[end + 1..];
            }
            None => {
                escaped.push_str("$$");
                rest = &rest[1..];
            }
        }
    }
    escaped.push_str(rest);
    escaped
}

/// Expand in place, leaving the string untouched on error.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    *value = expand_env(value, field)?;
    Ok(())
}
