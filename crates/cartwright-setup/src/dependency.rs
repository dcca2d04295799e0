use std::collections::{BTreeMap, HashSet};

use cartwright_core::InstalledSnapshot;

pub fn check_dependencies(
    snapshot: &InstalledSnapshot,
    packages: &[String],
    reverse: bool,
) -> BTreeMap<String, Vec<String>> {
    let requested: HashSet<&str> = packages.iter().map(String::as_str).collect();

    packages
        .iter()
        .map(|package| {
            let related = if reverse {
                direct_dependents(snapshot, package, &requested)
            } else {
                direct_dependencies(snapshot, package)
            };
            (package.clone(), related)
        })
        .collect()
}

fn direct_dependents(
    snapshot: &InstalledSnapshot,
    package: &str,
    requested: &HashSet<&str>,
) -> Vec<String> {
    snapshot
        .packages
        .iter()
        .filter(|candidate| candidate.name != package)
        .filter(|candidate| !requested.contains(candidate.name.as_str()))
        .filter(|candidate| candidate.require.contains_key(package))
        .map(|candidate| candidate.name.clone())
        .collect()
}

fn direct_dependencies(snapshot: &InstalledSnapshot, package: &str) -> Vec<String> {
    let Some(installed) = snapshot.package(package) else {
        return Vec::new();
    };
    installed
        .require
        .keys()
        .filter(|name| snapshot.package(name).is_some())
        .cloned()
        .collect()
}
