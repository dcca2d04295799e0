mod dependency;
mod html;
mod theme;
mod uninstall_check;

pub use dependency::check_dependencies;
pub use html::error_as_html_fragment;
pub use theme::check_child_themes_by_package_names;
pub use uninstall_check::{
    run_uninstall_readiness_check, run_uninstall_readiness_check_with_checkers,
    UninstallReadiness, ROOT_DEPENDENCIES,
};
