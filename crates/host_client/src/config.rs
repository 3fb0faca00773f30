use std::{collections::HashMap, fs};

use anyhow::{Context, Result};
use url::Url;

pub const CONFIG_FILE: &str = "newspaper.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host_url: "https://newspaper/".into(),
            log_filter: "info".into(),
        }
    }
}

impl Settings {
    pub fn base_url(&self) -> Result<Url> {
        normalize_host_url(&self.host_url)
    }
}

/// Defaults, then `newspaper.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string(CONFIG_FILE).ok();
    resolve_settings(file.as_deref(), |key| std::env::var(key).ok())
}

pub(crate) fn resolve_settings(
    file: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = file {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) {
            if let Some(v) = file_cfg.get("resource_name") {
                settings.host_url = resource_url(v);
            }
            if let Some(v) = file_cfg.get("host_url") {
                settings.host_url = v.clone();
            }
            if let Some(v) = file_cfg.get("log_filter") {
                settings.log_filter = v.clone();
            }
        }
    }

    if let Some(v) = env("NEWSPAPER_RESOURCE") {
        settings.host_url = resource_url(&v);
    }
    if let Some(v) = env("NEWSPAPER_HOST_URL") {
        settings.host_url = v;
    }
    if let Some(v) = env("APP__HOST_URL") {
        settings.host_url = v;
    }

    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    settings
}

fn resource_url(resource: &str) -> String {
    format!("https://{}/", resource.trim())
}

/// Parses a host base url, adding a scheme when missing and a trailing slash
/// so that endpoint names join onto it.
pub fn normalize_host_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return normalize_host_url(&Settings::default().host_url);
    }

    let mut candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    if !candidate.ends_with('/') {
        candidate.push('/');
    }

    Url::parse(&candidate).with_context(|| format!("invalid host url '{raw}'"))
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
