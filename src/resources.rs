use serde::{Deserialize, Serialize};

/// Directory of the login theme under the resource root
const LOGIN_THEME_DIR: &str = "login/keycloak.v2";

/// Vendored PatternFly v5 stylesheets shared by all themes
const VENDOR_PF5_DIR: &str = "common/keycloak/vendor/patternfly-v5";

const DEFAULT_LOGO_IMG: &str = "img/keycloak-logo-text.svg";
const DEFAULT_BG_IMG: &str = "img/keycloak-bg-darken.svg";

/// Versioned base path under which theme assets are served.
///
/// All default asset and stylesheet URLs are derived from this root, so a
/// preview composed against `/resources/v1` resolves every resource under
/// that version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceRoot {
    base: String,
}

impl ResourceRoot {
    /// Wrap an already-built root path (e.g. `/resources/v1`)
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Build the root from a resource version: `/resources/{version}`
    pub fn from_version(version: &str) -> Self {
        Self {
            base: format!("/resources/{}", version),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.base
    }

    /// Base path of the login theme: `{root}/login/keycloak.v2`
    pub fn login_theme(&self) -> String {
        format!("{}/{}", self.base, LOGIN_THEME_DIR)
    }

    /// Default logo shown when no override is uploaded
    pub fn default_logo(&self) -> String {
        format!("{}/{}", self.login_theme(), DEFAULT_LOGO_IMG)
    }

    /// Default page background shown when no override is uploaded
    pub fn default_background(&self) -> String {
        format!("{}/{}", self.login_theme(), DEFAULT_BG_IMG)
    }

    /// External stylesheets the preview document links, in load order:
    /// base PatternFly CSS, PatternFly addons, then the theme's own styles.
    pub fn stylesheets(&self) -> Vec<String> {
        let vendor = format!("{}/{}", self.base, VENDOR_PF5_DIR);
        vec![
            format!("{}/patternfly.min.css", vendor),
            format!("{}/patternfly-addons.css", vendor),
            format!("{}/css/styles.css", self.login_theme()),
        ]
    }
}

/// Optional logo/background replacements supplied by the upload
/// collaborators. Each side is independently absent; absence falls back to
/// the [`ResourceRoot`] defaults and never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourceOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
}
