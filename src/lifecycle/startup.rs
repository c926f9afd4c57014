//! Startup orchestration.
//!
//! Builds the menu store from configuration. Any failure here is fatal.

use crate::config::StoreConfig;
use crate::menu::seed::{self, SeedError};
use crate::menu::InMemoryMenuStore;

/// Construct the store the server will own for its lifetime.
///
/// A seed file takes precedence over the built-in menu.
pub fn build_store(config: &StoreConfig) -> Result<InMemoryMenuStore, SeedError> {
    let items = match (&config.seed_path, config.seed_defaults) {
        (Some(path), _) => {
            let items = seed::load_seed_file(path)?;
            tracing::info!(path = %path.display(), items = items.len(), "Loaded seed file");
            items
        }
        (None, true) => seed::default_menu(),
        (None, false) => Vec::new(),
    };

    Ok(InMemoryMenuStore::seeded(items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuStore;

    #[test]
    fn test_default_store_has_house_menu() {
        let store = build_store(&StoreConfig::default()).unwrap();
        assert_eq!(store.len().unwrap(), 6);
    }

    #[test]
    fn test_empty_store_when_defaults_disabled() {
        let config = StoreConfig {
            seed_defaults: false,
            seed_path: None,
        };
        assert!(build_store(&config).unwrap().is_empty().unwrap());
    }

    #[test]
    fn test_seed_file_replaces_defaults() {
        let path = std::env::temp_dir().join(format!("menu-seed-{}.json", std::process::id()));
        std::fs::write(
            &path,
            r#"[{"name": "Espresso", "description": "Double shot of espresso",
                 "price": 3, "category": "beverage", "ingredients": ["coffee"]}]"#,
        )
        .unwrap();

        let config = StoreConfig {
            seed_defaults: true,
            seed_path: Some(path.clone()),
        };
        let store = build_store(&config).unwrap();
        let items = store.list_all().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
        assert_eq!(items[0].name, "Espresso");
        std::fs::remove_file(path).unwrap();
    }
}
