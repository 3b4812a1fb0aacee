//! Boundary validation for composer inputs.
//!
//! The composer itself is total and never rewrites a value, so declaration
//! safety is enforced here instead: names must be CSS-ident-shaped, values
//! must not be able to terminate their declaration or escape the scoped
//! rule, and override URLs must not be able to escape their `url('…')`
//! wrapper.

use crate::config::PreviewConfig;
use crate::error::{PreviewError, PreviewResult};
use crate::vars::StyleVars;
use regex::Regex;
use std::sync::OnceLock;

/// Validate a custom-property name (letter first, then letters/digits/hyphens)
pub fn validate_var_name(name: &str) -> PreviewResult<()> {
    static VAR_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VAR_NAME_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z][A-Za-z0-9-]*$").unwrap());

    if re.is_match(name) {
        Ok(())
    } else {
        Err(PreviewError::InvalidVarName {
            name: name.to_string(),
        })
    }
}

/// Validate a custom-property value. Empty values are allowed (they are
/// simply not emitted).
pub fn validate_var_value(name: &str, value: &str) -> PreviewResult<()> {
    let reject = |reason: &str| {
        Err(PreviewError::InvalidVarValue {
            name: name.to_string(),
            reason: reason.to_string(),
        })
    };

    for ch in value.chars() {
        match ch {
            ';' => return reject("must not contain ';'"),
            '{' | '}' => return reject("must not contain '{' or '}'"),
            c if c.is_control() => return reject("must not contain control characters"),
            _ => {}
        }
    }
    if value.contains("/*") {
        return reject("must not contain comment sequences");
    }
    Ok(())
}

/// Validate every entry of a variable set
pub fn validate_vars(vars: &StyleVars) -> PreviewResult<()> {
    for (name, value) in vars.iter() {
        validate_var_name(name)?;
        validate_var_value(name, value)?;
    }
    Ok(())
}

/// Validate an override logo/background URL
pub fn validate_resource_url(value: &str) -> PreviewResult<()> {
    let reject = |reason: &str| {
        Err(PreviewError::InvalidResourceUrl {
            value: value.to_string(),
            reason: reason.to_string(),
        })
    };

    if value.is_empty() {
        return reject("must not be empty");
    }
    for ch in value.chars() {
        match ch {
            '\'' | '"' => return reject("must not contain quotes"),
            '(' | ')' => return reject("must not contain parentheses"),
            '\\' => return reject("must not contain backslashes"),
            c if c.is_whitespace() => return reject("must not contain whitespace"),
            c if c.is_control() => return reject("must not contain control characters"),
            _ => {}
        }
    }
    Ok(())
}

/// Validate a resource version used to build `/resources/{version}`
pub fn validate_resource_version(version: &str) -> PreviewResult<()> {
    static VERSION_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9._-]+$").unwrap());

    if re.is_match(version) {
        Ok(())
    } else {
        Err(PreviewError::InvalidResourceVersion {
            value: version.to_string(),
        })
    }
}

/// Validate a whole preview config before composing
pub fn validate_config(config: &PreviewConfig) -> PreviewResult<()> {
    validate_resource_version(&config.resource_version)?;
    if let Some(ref logo) = config.overrides.logo {
        validate_resource_url(logo)?;
    }
    if let Some(ref background) = config.overrides.background {
        validate_resource_url(background)?;
    }
    validate_vars(&config.vars)
}
