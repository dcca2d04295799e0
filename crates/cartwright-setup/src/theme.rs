use cartwright_core::{InstalledSnapshot, PackageType};

pub fn check_child_themes_by_package_names(
    snapshot: &InstalledSnapshot,
    themes: &[String],
) -> Vec<String> {
    themes
        .iter()
        .filter_map(|theme| {
            let children = child_themes_of(snapshot, theme);
            if children.is_empty() {
                None
            } else {
                Some(format!(
                    "{theme} has child theme(s): {}",
                    children.join(", ")
                ))
            }
        })
        .collect()
}

fn child_themes_of(snapshot: &InstalledSnapshot, theme: &str) -> Vec<String> {
    snapshot
        .packages
        .iter()
        .filter(|candidate| candidate.package_type == PackageType::Theme)
        .filter(|candidate| candidate.parent_theme.as_deref() == Some(theme))
        .map(|candidate| candidate.name.clone())
        .collect()
}
