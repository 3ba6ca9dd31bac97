use std::path::PathBuf;

use agora_core::{Catalog, CatalogError, Listing, Result, Taxonomy};
use tracing::debug;

/// Where a catalog comes from. Implementations own all I/O; the engine
/// never loads anything itself.
pub trait CatalogSource: Send + Sync {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Catalog>;
}

/// JSON file holding an array of listings, the on-disk equivalent of
/// the built-in seed data. Loaded listings are validated and checked
/// against the taxonomy before a catalog is handed out.
pub struct JsonFileSource {
    path: PathBuf,
    taxonomy: Taxonomy,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_taxonomy(path, Taxonomy::standard())
    }

    pub fn with_taxonomy(path: impl Into<PathBuf>, taxonomy: Taxonomy) -> Self {
        Self {
            path: path.into(),
            taxonomy,
        }
    }
}

impl CatalogSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Catalog> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| CatalogError::Source(format!("{}: {e}", self.path.display())))?;
        let listings: Vec<Listing> = serde_json::from_str(&raw)
            .map_err(|e| CatalogError::Source(format!("{}: {e}", self.path.display())))?;
        let catalog = Catalog::new(listings)?;
        catalog.check_taxonomy(&self.taxonomy)?;
        debug!(path = %self.path.display(), listings = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

/// The built-in sample catalog.
pub struct SeedSource;

impl CatalogSource for SeedSource {
    fn describe(&self) -> String {
        "built-in seed".to_string()
    }

    fn load(&self) -> Result<Catalog> {
        Ok(crate::seed::catalog())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_json(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("agora-{}-{name}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_a_listing_array_from_disk() {
        let path = temp_json(
            "ok",
            r#"[{
                "id": "1",
                "title": "Desk lamp",
                "description": "Warm white, barely used",
                "price": 12.5,
                "category": "Home & Garden",
                "location": "Palo Alto",
                "rating": 4.0,
                "verified": false,
                "image": "/images/lamp.jpg",
                "postedAt": "2024-02-01T09:30:00Z"
            }]"#,
        );
        let catalog = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("1").unwrap().category, "Home & Garden");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn rejects_unknown_categories_at_load_time() {
        let path = temp_json(
            "badcat",
            r#"[{
                "id": "1",
                "title": "Mystery",
                "description": "???",
                "price": 1.0,
                "category": "Rocketry",
                "location": "Stanford",
                "rating": 3.0,
                "verified": false,
                "image": "/images/x.jpg",
                "postedAt": "2024-02-01T09:30:00Z"
            }]"#,
        );
        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory { .. }));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn surfaces_missing_files_and_bad_json_as_source_errors() {
        let missing = JsonFileSource::new("/nonexistent/agora-catalog.json");
        assert!(matches!(missing.load(), Err(CatalogError::Source(_))));

        let path = temp_json("garbled", "not json at all");
        let err = JsonFileSource::new(&path).load().unwrap_err();
        assert!(matches!(err, CatalogError::Source(_)));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn seed_passes_its_own_validation() {
        let catalog = SeedSource.load().unwrap();
        assert!(!catalog.is_empty());
        catalog.check_taxonomy(&Taxonomy::standard()).unwrap();
    }
}
