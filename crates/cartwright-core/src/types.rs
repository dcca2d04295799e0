use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PackageType {
    Metapackage,
    Theme,
    Module,
    Language,
    #[default]
    Library,
    Other,
}

impl PackageType {
    pub fn as_str(self) -> &'static str {
        match self {
            PackageType::Metapackage => "metapackage",
            PackageType::Theme => "theme",
            PackageType::Module => "module",
            PackageType::Language => "language",
            PackageType::Library => "library",
            PackageType::Other => "other",
        }
    }
}

impl From<String> for PackageType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "metapackage" => PackageType::Metapackage,
            "theme" => PackageType::Theme,
            "module" => PackageType::Module,
            "language" => PackageType::Language,
            "library" => PackageType::Library,
            _ => PackageType::Other,
        }
    }
}

impl From<PackageType> for String {
    fn from(value: PackageType) -> Self {
        value.as_str().to_string()
    }
}
