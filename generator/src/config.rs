use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::GenerateError;

/// Site configuration, read from an optional `site.toml` at the site
/// root. Every field has a default, so the file may be partial or
/// missing entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Directory of Markdown sources.
    #[serde(default = "default_content")]
    pub content: String,

    /// Directory of static assets copied into the output as-is.
    #[serde(default = "default_static", rename = "static")]
    pub static_dir: String,

    /// Page template with `{{ Title }}` and `{{ Content }}` slots.
    #[serde(default = "default_template")]
    pub template: String,

    /// Output directory. Deleted and recreated on every build.
    #[serde(default = "default_output")]
    pub output: String,

    /// Prefix substituted for root-relative `href="/` and `src="/`.
    #[serde(default = "default_basepath")]
    pub basepath: String,
}

fn default_content() -> String {
    "content".to_string()
}

fn default_static() -> String {
    "static".to_string()
}

fn default_template() -> String {
    "template.html".to_string()
}

fn default_output() -> String {
    "public".to_string()
}

fn default_basepath() -> String {
    "/".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            content: default_content(),
            static_dir: default_static(),
            template: default_template(),
            output: default_output(),
            basepath: default_basepath(),
        }
    }
}

impl SiteConfig {
    /// Load `site.toml` from `root`, falling back to defaults when the
    /// file does not exist.
    pub fn load(root: &Path) -> Result<Self, GenerateError> {
        let path = root.join("site.toml");
        if !path.exists() {
            return Ok(SiteConfig::default());
        }
        let raw = fs::read_to_string(&path).map_err(|e| GenerateError::io(&path, e))?;
        toml::from_str(&raw).map_err(|e| GenerateError::Config {
            path: path.clone(),
            message: e.to_string(),
        })
    }
}
