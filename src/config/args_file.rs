//! YAML file with default option values

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::args::RawArgs;

/// Option defaults read from a YAML file.
///
/// Keys mirror the long option names. A value given on the command line
/// always replaces the file's value for that option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ArgsFile {
    /// `group/version` tokens, each possibly a comma list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub input: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_base: Option<String>,

    /// `group/version=Type1,Type2` tokens
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_types_overrides: Vec<String>,

    /// `Type:PluralType` definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plural_exceptions: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_package: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_base: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub go_header_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioned_clientset_package: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_clientset_package: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub listers_package: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_directory: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_only: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub require_groups: Option<bool>,
}

impl ArgsFile {
    /// Load defaults from a YAML file; an empty file yields no defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Save defaults to a YAML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Fill every option the command line left unset
    pub fn fill(&self, raw: &mut RawArgs) {
        if raw.inputs.is_empty() {
            raw.inputs = self.input.clone();
        }
        if raw.included_types_overrides.is_empty() {
            raw.included_types_overrides = self.included_types_overrides.clone();
        }

        fill_option(&mut raw.input_base, &self.input_base);
        fill_option(&mut raw.plural_exceptions, &self.plural_exceptions);
        fill_option(&mut raw.output_package, &self.output_package);
        fill_option(&mut raw.output_base, &self.output_base);
        fill_option(&mut raw.go_header_file, &self.go_header_file);
        fill_option(&mut raw.versioned_clientset_package, &self.versioned_clientset_package);
        fill_option(&mut raw.internal_clientset_package, &self.internal_clientset_package);
        fill_option(&mut raw.listers_package, &self.listers_package);
        fill_option(&mut raw.single_directory, &self.single_directory);
        fill_option(&mut raw.verify_only, &self.verify_only);
        fill_option(&mut raw.require_groups, &self.require_groups);
    }
}

fn fill_option<T: Clone>(target: &mut Option<T>, default: &Option<T>) {
    if target.is_none() {
        target.clone_from(default);
    }
}
