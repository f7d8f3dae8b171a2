//! Effective settings: the config file mapped onto engine types.

use std::path::Path;

use anyhow::{Context, Result};
use lingua_markup_config::{Config, KeywordOverrides, Palette};
use lingua_markup_engine::{SectionCategory, SectionKeywords};

#[derive(Debug)]
pub struct Settings {
    pub palette: Palette,
    pub keywords: SectionKeywords,
}

impl Settings {
    /// Loads from `explicit` if given, otherwise from the default location.
    /// A missing file means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let loaded = match explicit {
            Some(path) => {
                let path = Config::resolve_path(path);
                Config::load_from_path(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?
            }
            None => Config::load().context("loading config")?,
        };

        let config = loaded.unwrap_or_else(|| {
            log::debug!("no config file, using defaults");
            Config::default()
        });
        Ok(Self::from_config(&config))
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            palette: config.palette,
            keywords: keyword_table(&config.keywords),
        }
    }
}

/// The built-in keyword table extended with configured variants.
pub fn keyword_table(overrides: &KeywordOverrides) -> SectionKeywords {
    let mut table = SectionKeywords::default();
    for (category, extra) in [
        (SectionCategory::Vocabulary, &overrides.vocabulary),
        (SectionCategory::Important, &overrides.important),
        (SectionCategory::Example, &overrides.example),
        (SectionCategory::Grammar, &overrides.grammar),
        (SectionCategory::Cultural, &overrides.cultural),
        (SectionCategory::Warning, &overrides.warning),
    ] {
        if !extra.is_empty() {
            log::debug!("adding {} keyword(s) for {category:?}", extra.len());
        }
        table.extend(category, extra.iter().cloned());
    }
    table
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn no_overrides_is_the_default_table() {
        assert_eq!(
            keyword_table(&KeywordOverrides::default()),
            SectionKeywords::default()
        );
    }

    #[rstest]
    #[case("WORTSCHATZ", SectionCategory::Vocabulary)]
    #[case("GRAMMAIRE", SectionCategory::Grammar)]
    #[case("VOCABULARIO", SectionCategory::Vocabulary)]
    fn overrides_extend_the_default_table(#[case] header: &str, #[case] expected: SectionCategory) {
        let table = keyword_table(&KeywordOverrides {
            vocabulary: vec!["WORTSCHATZ".into()],
            grammar: vec!["GRAMMAIRE".into()],
            ..KeywordOverrides::default()
        });
        assert_eq!(table.resolve(header), expected);
    }

    #[test]
    fn missing_explicit_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(Some(temp_dir.path().join("absent.toml").as_path())).unwrap();

        assert_eq!(settings.palette, Palette::Lesson);
        assert_eq!(settings.keywords, SectionKeywords::default());
    }

    #[test]
    fn explicit_file_is_used() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "palette = \"arena\"\n[keywords]\nwarning = [\"ACHTUNG\"]\n").unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();

        assert_eq!(settings.palette, Palette::Arena);
        assert_eq!(settings.keywords.resolve("ACHTUNG"), SectionCategory::Warning);
    }

    #[test]
    fn broken_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "palette = 3\n").unwrap();

        let err = Settings::load(Some(path.as_path())).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
