use crate::composer::{compose, ComposedPreview};
use crate::error::PreviewResult;
use crate::resources::{ResourceOverrides, ResourceRoot};
use crate::validator::validate_config;
use crate::vars::StyleVars;
use serde::{Deserialize, Serialize};

/// Serializable description of one preview's inputs.
///
/// Mirrors the collaborator contracts: the environment supplies
/// `resourceVersion`, the upload contexts supply optional `logo` and
/// `background` URLs, and the theme form supplies `vars`.
///
/// ```yaml
/// resourceVersion: v1
/// background: https://x/bg.png
/// vars:
///   accent: "#123456"
///   logoWidth: 120px
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    #[serde(rename = "resourceVersion")]
    pub resource_version: String,
    #[serde(flatten)]
    pub overrides: ResourceOverrides,
    #[serde(default)]
    pub vars: StyleVars,
}

impl PreviewConfig {
    /// Deserialize a config from YAML. `vars` order is preserved.
    pub fn from_yaml(yaml: &str) -> PreviewResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The resource root this config composes against
    pub fn resource_root(&self) -> ResourceRoot {
        ResourceRoot::from_version(&self.resource_version)
    }

    /// Validate and compose
    pub fn compose(&self) -> PreviewResult<ComposedPreview> {
        validate_config(self)?;
        Ok(compose(
            &self.vars,
            self.overrides.logo.as_deref(),
            self.overrides.background.as_deref(),
            self.resource_root().as_str(),
        ))
    }
}
