use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use cartwright_core::{InstalledSnapshot, PackageType};

use crate::dependency::check_dependencies;
use crate::theme::check_child_themes_by_package_names;

// Implicit dependents of every installed package; never reported as blockers.
pub const ROOT_DEPENDENCIES: [&str; 2] = ["cartwright/cartwright-ce", "cartwright/cartwright-ee"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UninstallReadiness {
    pub success: bool,
    pub error: Option<String>,
}

impl UninstallReadiness {
    fn ready() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn blocked(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
        }
    }
}

pub fn run_uninstall_readiness_check(
    snapshot: &InstalledSnapshot,
    packages: &[String],
) -> UninstallReadiness {
    run_uninstall_readiness_check_with_checkers(
        &snapshot.root_required_package_types_by_name(),
        packages,
        |requested, reverse| Ok(check_dependencies(snapshot, requested, reverse)),
        |themes| Ok(check_child_themes_by_package_names(snapshot, themes)),
    )
}

pub fn run_uninstall_readiness_check_with_checkers<DependencyCheck, ThemeCheck>(
    root_required_types: &BTreeMap<String, PackageType>,
    packages: &[String],
    dependency_check: DependencyCheck,
    theme_check: ThemeCheck,
) -> UninstallReadiness
where
    DependencyCheck: FnOnce(&[String], bool) -> Result<BTreeMap<String, Vec<String>>>,
    ThemeCheck: FnOnce(&[String]) -> Result<Vec<String>>,
{
    match readiness_findings(root_required_types, packages, dependency_check, theme_check) {
        Ok(findings) if findings.is_empty() => UninstallReadiness::ready(),
        Ok(findings) => UninstallReadiness::blocked(findings.join("\n")),
        Err(err) => UninstallReadiness::blocked(format!("{err:#}")),
    }
}

fn readiness_findings<DependencyCheck, ThemeCheck>(
    root_required_types: &BTreeMap<String, PackageType>,
    packages: &[String],
    dependency_check: DependencyCheck,
    theme_check: ThemeCheck,
) -> Result<Vec<String>>
where
    DependencyCheck: FnOnce(&[String], bool) -> Result<BTreeMap<String, Vec<String>>>,
    ThemeCheck: FnOnce(&[String]) -> Result<Vec<String>>,
{
    if packages.is_empty() {
        return Err(anyhow!("no packages requested for uninstall"));
    }

    let mut dependents = dependency_check(packages, true)?;
    exclude_root_dependencies(&mut dependents);

    let mut findings = Vec::new();
    let mut themes = Vec::new();

    for package in packages {
        let Some(package_type) = root_required_types.get(package) else {
            return Err(anyhow!("package {package} not found in the system"));
        };

        match package_type {
            PackageType::Metapackage => {
                dependents.remove(package);
            }
            PackageType::Theme => themes.push(package.clone()),
            _ => {}
        }

        if let Some(blockers) = dependents.get(package) {
            if !blockers.is_empty() {
                findings.push(format!(
                    "{package} has the following dependent package(s): {}",
                    blockers.join(", ")
                ));
            }
        }
    }

    if !themes.is_empty() {
        findings.extend(theme_check(&themes)?);
    }

    Ok(findings)
}

fn exclude_root_dependencies(dependents: &mut BTreeMap<String, Vec<String>>) {
    for blockers in dependents.values_mut() {
        blockers.retain(|name| !ROOT_DEPENDENCIES.contains(&name.as_str()));
    }
}
