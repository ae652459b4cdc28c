//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--output`)
//! 2. Environment variables (`FACTURE_*`)
//! 3. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use directories::UserDirs;
use facture_render::{RenderStyle, INVOICE_FILENAME};
use serde::Serialize;

pub const ENV_BRAND: &str = "FACTURE_BRAND";
pub const ENV_OUTPUT_DIR: &str = "FACTURE_OUTPUT_DIR";

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Text inside the invoice badge.
    /// Default: "AS SHABIL"
    pub brand_text: String,

    /// Directory the invoice is written to
    pub output_dir: PathBuf,

    /// Invoice file name, always `facture.pdf` unless overridden by `--output`
    pub filename: String,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Brand: "AS SHABIL"
    /// - Output: the user's download directory, else the working directory
    /// - File: facture.pdf
    fn default() -> Self {
        ConfigState {
            brand_text: RenderStyle::default().brand_text,
            output_dir: default_output_dir(),
            filename: INVOICE_FILENAME.to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FACTURE_BRAND`: Override the badge text
    /// - `FACTURE_OUTPUT_DIR`: Override the output directory
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConfigState::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(brand) = lookup(ENV_BRAND).filter(|b| !b.trim().is_empty()) {
            config.brand_text = brand;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR).filter(|d| !d.is_empty()) {
            config.output_dir = PathBuf::from(dir);
        }

        config
    }

    /// Applies an explicit `--output` path: a directory keeps the default
    /// file name, anything else replaces both. A trailing separator names a
    /// directory even before it exists.
    pub fn with_output(mut self, output: Option<&Path>) -> Self {
        let Some(path) = output else {
            return self;
        };

        if path.is_dir() || ends_with_separator(path) {
            self.output_dir = path.to_path_buf();
        } else {
            self.output_dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            if let Some(name) = path.file_name() {
                self.filename = name.to_string_lossy().into_owned();
            }
        }
        self
    }

    /// Where the next invoice is written.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.filename)
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle::with_brand(self.brand_text.clone())
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .chars()
        .next_back()
        .is_some_and(std::path::is_separator)
}

fn default_output_dir() -> PathBuf {
    UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::from_lookup(|_| None);
        assert_eq!(config.brand_text, "AS SHABIL");
        assert_eq!(config.filename, "facture.pdf");
        assert!(config.output_path().ends_with("facture.pdf"));
    }

    #[test]
    fn test_env_overrides() {
        let config = ConfigState::from_lookup(|key| match key {
            ENV_BRAND => Some("LIBRAIRIE".to_string()),
            ENV_OUTPUT_DIR => Some("/tmp/invoices".to_string()),
            _ => None,
        });

        assert_eq!(config.brand_text, "LIBRAIRIE");
        assert_eq!(config.output_path(), PathBuf::from("/tmp/invoices/facture.pdf"));
        assert_eq!(config.render_style().brand_text, "LIBRAIRIE");
    }

    #[test]
    fn test_blank_brand_is_ignored() {
        let config = ConfigState::from_lookup(|key| (key == ENV_BRAND).then(|| "  ".to_string()));
        assert_eq!(config.brand_text, "AS SHABIL");
    }

    #[test]
    fn test_output_directory_keeps_filename() {
        let dir = std::env::temp_dir();
        let config = ConfigState::from_lookup(|_| None).with_output(Some(&dir));
        assert_eq!(config.output_path(), dir.join("facture.pdf"));
    }

    #[test]
    fn test_output_file_replaces_name() {
        let config = ConfigState::from_lookup(|_| None)
            .with_output(Some(Path::new("out/client-42.pdf")));
        assert_eq!(config.output_path(), PathBuf::from("out/client-42.pdf"));

        let bare = ConfigState::from_lookup(|_| None).with_output(Some(Path::new("x.pdf")));
        assert_eq!(bare.output_path(), PathBuf::from("./x.pdf"));
    }

    #[test]
    fn test_trailing_separator_means_directory() {
        let config = ConfigState::from_lookup(|_| None)
            .with_output(Some(Path::new("not-created-yet/")));
        assert_eq!(config.filename, "facture.pdf");
        assert_eq!(
            config.output_path(),
            Path::new("not-created-yet").join("facture.pdf")
        );
    }
}
