//! # Login Theme Preview Composer
//!
//! Composes deterministic, self-contained previews of a themed
//! identity-provider login page for an administration console.
//!
//! ## Features
//! - Pure composition: identical inputs yield byte-identical stylesheet and
//!   markup, suitable for snapshot tests
//! - CSS custom-property passthrough in insertion order, with conditional
//!   logo-dimension variables
//! - Versioned resource roots with default logo/background fallback
//! - Inert login-page markup (read-only fields, presentational password
//!   toggle, no scripts or handlers)
//! - Isolated output: all styles live under the preview scope and the
//!   standalone document is meant for an iframe-`srcdoc` boundary
//! - YAML preview configs with boundary validation
//!
//! ## Example
//! ```ignore
//! use login_preview::{compose, StyleVars};
//!
//! let mut vars = StyleVars::new();
//! vars.set("accent", "#123456");
//!
//! let preview = compose(&vars, None, Some("https://x/bg.png"), "/resources/v1");
//! let html = preview.to_document();
//! ```
//!
//! ## Example — from a YAML config
//! ```ignore
//! use login_preview::PreviewConfig;
//!
//! let config = PreviewConfig::from_yaml(yaml).expect("Failed to parse config");
//! let preview = config.compose().expect("Invalid preview inputs");
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod markup;
pub mod resources;
pub mod stylesheet;
pub mod template;
pub mod validator;
pub mod vars;

// --- Core types ---
pub use composer::{ComposedPreview, LOGO_HEIGHT_VAR, LOGO_WIDTH_VAR};
pub use config::PreviewConfig;
pub use error::{PreviewError, PreviewResult};
pub use markup::{Element, Node};
pub use resources::{ResourceOverrides, ResourceRoot};
pub use stylesheet::{CssRule, Stylesheet};
pub use template::LoginTemplate;
pub use vars::StyleVars;

/// Compose a preview with the default login template.
///
/// Never fails: absent overrides fall back to default theme assets under
/// `resource_root`.
pub fn compose(
    vars: &StyleVars,
    logo_override: Option<&str>,
    background_override: Option<&str>,
    resource_root: &str,
) -> ComposedPreview {
    composer::compose(vars, logo_override, background_override, resource_root)
}

/// Compose a preview against a caller-supplied structural template
pub fn compose_with_template(
    vars: &StyleVars,
    logo_override: Option<&str>,
    background_override: Option<&str>,
    resource_root: &str,
    template: &LoginTemplate,
) -> ComposedPreview {
    composer::compose_with_template(
        vars,
        logo_override,
        background_override,
        resource_root,
        template,
    )
}
