//! Static config source backed by the built-in lists.

use vitrine_core::{
    application::ports::ConfigSource,
    domain::Category,
    error::VitrineResult,
};

use crate::builtin_config;

/// `ConfigSource` over the compiled-in categories and palette.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConfigSource;

impl StaticConfigSource {
    pub fn new() -> Self {
        Self
    }

    /// The category offered when the user does not pick one.
    pub fn default_category(&self) -> VitrineResult<Category> {
        // The built-in list is never empty; first entry is the default.
        Ok(builtin_config::categories().remove(0))
    }

    /// Look a category up by name, case-insensitively.
    pub fn category_by_name(&self, name: &str) -> VitrineResult<Option<Category>> {
        Ok(builtin_config::categories()
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name)))
    }
}

impl ConfigSource for StaticConfigSource {
    fn categories(&self) -> VitrineResult<Vec<Category>> {
        Ok(builtin_config::categories())
    }

    fn palette(&self) -> VitrineResult<Vec<String>> {
        Ok(builtin_config::palette())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_category_is_the_first_entry() {
        let source = StaticConfigSource::new();
        let default = source.default_category().unwrap();
        assert_eq!(default, source.categories().unwrap()[0]);
    }

    #[test]
    fn lookup_ignores_case() {
        let source = StaticConfigSource::new();
        assert!(source.category_by_name("shoes").unwrap().is_some());
        assert!(source.category_by_name("SHOES").unwrap().is_some());
        assert!(source.category_by_name("hats").unwrap().is_none());
    }
}
