//! Prettier scaffolding.
//!
//! Writes the fixed `.prettierrc` configuration and installs prettier as a
//! dev dependency through the selected package manager.

use crate::{Error, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::str::FromStr;

/// File name the configuration is written to.
pub const CONFIG_FILE: &str = ".prettierrc";

/// The fixed prettier configuration object.
///
/// Keys are serialized in camelCase, the format prettier reads. The values
/// are not configurable; this is a scaffold, not a settings surface.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PrettierConfig {
    arrow_parens: &'static str,
    bracket_spacing: bool,
    end_of_line: &'static str,
    jsx_single_quote: bool,
    print_width: u32,
    semi: bool,
    single_quote: bool,
    tab_width: u32,
    trailing_comma: &'static str,
}

impl Default for PrettierConfig {
    fn default() -> Self {
        Self {
            arrow_parens: "always",
            bracket_spacing: true,
            end_of_line: "lf",
            jsx_single_quote: false,
            print_width: 100,
            semi: false,
            single_quote: true,
            tab_width: 2,
            trailing_comma: "es5",
        }
    }
}

impl PrettierConfig {
    /// Serialize the configuration with two-space indentation.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self).map_err(Error::Serialize)
    }

    /// Write the configuration to `<dir>/.prettierrc`.
    ///
    /// Returns the path of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteFile`] if the file cannot be written.
    pub fn write_config(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        let data = self.to_json()?;

        std::fs::write(&path, data).map_err(|source| Error::WriteFile {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "Wrote prettier config");
        Ok(path)
    }
}

/// Supported package managers for installing prettier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    /// `npm install -D prettier`
    Npm,
    /// `pnpm add -D prettier`
    Pnpm,
}

impl FromStr for PackageManager {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "npm" => Ok(Self::Npm),
            "pnpm" => Ok(Self::Pnpm),
            other => Err(Error::UnknownPackageManager(other.to_string())),
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.bin())
    }
}

impl PackageManager {
    /// Binary name on PATH.
    #[must_use]
    pub fn bin(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
        }
    }

    /// Arguments for installing prettier as a dev dependency.
    #[must_use]
    pub fn install_args(self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["install", "-D", "prettier"],
            Self::Pnpm => &["add", "-D", "prettier"],
        }
    }

    /// Install prettier as a dev dependency in the current directory.
    ///
    /// The subprocess inherits stdout and stderr, so the package manager's
    /// own progress output is passed through to the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the binary is not on PATH, cannot be spawned, or
    /// exits non-zero.
    pub fn install_prettier(self) -> Result<()> {
        let name = self.bin();
        let bin = which::which(name).map_err(|source| Error::ToolNotFound { name, source })?;

        tracing::debug!(bin = %bin.display(), args = ?self.install_args(), "Installing prettier");

        let status = Command::new(bin)
            .args(self.install_args())
            .status()
            .map_err(|source| Error::Spawn { name, source })?;

        if status.success() {
            Ok(())
        } else {
            Err(Error::InstallFailed {
                name,
                code: status.code(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::panic)]
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_serializes_fixed_values() {
        let json = PrettierConfig::default().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();

        assert_eq!(value["semi"], serde_json::json!(false));
        assert_eq!(value["singleQuote"], serde_json::json!(true));
        assert_eq!(value["tabWidth"], serde_json::json!(2));
        assert_eq!(value["trailingComma"], serde_json::json!("es5"));
        assert_eq!(value["printWidth"], serde_json::json!(100));
        assert_eq!(value["bracketSpacing"], serde_json::json!(true));
        assert_eq!(value["jsxSingleQuote"], serde_json::json!(false));
        assert_eq!(value["arrowParens"], serde_json::json!("always"));
        assert_eq!(value["endOfLine"], serde_json::json!("lf"));
        assert_eq!(value.as_object().unwrap().len(), 9);
    }

    #[test]
    fn test_config_uses_two_space_indent() {
        let json = String::from_utf8(PrettierConfig::default().to_json().unwrap()).unwrap();
        assert!(json.starts_with("{\n  \""));
    }

    #[test]
    fn test_write_config_creates_prettierrc() {
        let temp = TempDir::new().unwrap();
        let path = PrettierConfig::default().write_config(temp.path()).unwrap();

        assert_eq!(path, temp.path().join(".prettierrc"));
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, PrettierConfig::default().to_json().unwrap());
    }

    #[test]
    fn test_write_config_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");

        let err = PrettierConfig::default().write_config(&missing).unwrap_err();
        assert!(matches!(err, Error::WriteFile { .. }));
    }

    #[test]
    fn test_package_manager_from_str() {
        assert_eq!("npm".parse::<PackageManager>().unwrap(), PackageManager::Npm);
        assert_eq!(
            "pnpm".parse::<PackageManager>().unwrap(),
            PackageManager::Pnpm
        );
    }

    #[test]
    fn test_package_manager_rejects_unknown() {
        let err = "yarn".parse::<PackageManager>().unwrap_err();
        assert!(matches!(err, Error::UnknownPackageManager(_)));
        assert!(err.to_string().contains("yarn"));
    }

    #[test]
    fn test_install_args() {
        assert_eq!(
            PackageManager::Npm.install_args(),
            &["install", "-D", "prettier"]
        );
        assert_eq!(PackageManager::Pnpm.install_args(), &["add", "-D", "prettier"]);
    }
}
