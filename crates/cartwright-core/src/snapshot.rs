use std::collections::{BTreeMap, HashSet};

use anyhow::{anyhow, Context};
use semver::{Version, VersionReq};
use serde::{Deserialize, Serialize};

use crate::types::PackageType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledSnapshot {
    pub root: RootPackage,
    #[serde(default)]
    pub packages: Vec<InstalledPackage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RootPackage {
    pub name: String,
    #[serde(default)]
    pub require: BTreeMap<String, VersionReq>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledPackage {
    pub name: String,
    pub version: Version,
    #[serde(rename = "type", default)]
    pub package_type: PackageType,
    #[serde(default)]
    pub require: BTreeMap<String, VersionReq>,
    #[serde(default)]
    pub parent_theme: Option<String>,
}

impl InstalledSnapshot {
    pub fn from_json_str(input: &str) -> anyhow::Result<Self> {
        let snapshot: Self =
            serde_json::from_str(input).context("failed to parse installed snapshot")?;

        let mut seen_names = HashSet::new();
        for package in &snapshot.packages {
            if package.name.trim().is_empty() {
                return Err(anyhow!("installed package name must not be empty"));
            }
            if !seen_names.insert(package.name.as_str()) {
                return Err(anyhow!(
                    "duplicate installed package '{}' in snapshot",
                    package.name
                ));
            }
            if package.require.contains_key(&package.name) {
                return Err(anyhow!("package '{}' requires itself", package.name));
            }
            if package.parent_theme.as_deref() == Some(package.name.as_str()) {
                return Err(anyhow!(
                    "theme '{}' declares itself as its parent",
                    package.name
                ));
            }
        }

        Ok(snapshot)
    }

    pub fn package(&self, name: &str) -> Option<&InstalledPackage> {
        self.packages.iter().find(|package| package.name == name)
    }

    pub fn root_required_package_types_by_name(&self) -> BTreeMap<String, PackageType> {
        self.root
            .require
            .keys()
            .filter_map(|name| {
                self.package(name)
                    .map(|package| (name.clone(), package.package_type))
            })
            .collect()
    }
}
