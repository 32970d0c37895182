use serde::{Deserialize, Serialize};

/// A single extension entry from the dataset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionRecord {
    pub id: u32,
    pub name: String,
    pub logo: String,
    pub description: String,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

impl ExtensionRecord {
    pub fn new(id: u32, name: impl Into<String>, is_active: bool) -> Self {
        ExtensionRecord {
            id,
            name: name.into(),
            logo: String::new(),
            description: String::new(),
            is_active,
        }
    }

    /// Short label shown in place of the logo image
    pub fn logo_label(&self) -> String {
        logo_label(&self.logo, &self.name)
    }
}

/// Derives a two-letter badge from a logo path, falling back to the name
pub fn logo_label(logo: &str, name: &str) -> String {
    let stem = logo
        .rsplit('/')
        .next()
        .unwrap_or(logo)
        .trim_start_matches("logo-")
        .split('.')
        .next()
        .unwrap_or("");

    let source = if stem.is_empty() { name } else { stem };
    let mut label: String = source
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();

    if label.chars().count() < 2 {
        label = source.chars().filter(|c| c.is_alphanumeric()).take(2).collect();
    }
    label.to_uppercase()
}

/// Which subset of extensions is shown
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterValue {
    #[default]
    All,
    Active,
    Inactive,
}

impl FilterValue {
    /// Selector order
    pub const ALL: [FilterValue; 3] = [FilterValue::All, FilterValue::Active, FilterValue::Inactive];

    pub fn as_str(&self) -> &str {
        match self {
            FilterValue::All => "all",
            FilterValue::Active => "active",
            FilterValue::Inactive => "inactive",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FilterValue::All => "All",
            FilterValue::Active => "Active",
            FilterValue::Inactive => "Inactive",
        }
    }

    pub fn next(&self) -> FilterValue {
        match self {
            FilterValue::All => FilterValue::Active,
            FilterValue::Active => FilterValue::Inactive,
            FilterValue::Inactive => FilterValue::All,
        }
    }

    pub fn prev(&self) -> FilterValue {
        match self {
            FilterValue::All => FilterValue::Inactive,
            FilterValue::Active => FilterValue::All,
            FilterValue::Inactive => FilterValue::Active,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            FilterValue::All => 0,
            FilterValue::Active => 1,
            FilterValue::Inactive => 2,
        }
    }
}

/// Stored theme preference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(&self) -> &str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

/// Concrete appearance after resolving `System`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

impl ResolvedTheme {
    pub fn opposite(&self) -> ResolvedTheme {
        match self {
            ResolvedTheme::Light => ResolvedTheme::Dark,
            ResolvedTheme::Dark => ResolvedTheme::Light,
        }
    }
}

impl From<ResolvedTheme> for ThemePreference {
    fn from(theme: ResolvedTheme) -> Self {
        match theme {
            ResolvedTheme::Light => ThemePreference::Light,
            ResolvedTheme::Dark => ThemePreference::Dark,
        }
    }
}
