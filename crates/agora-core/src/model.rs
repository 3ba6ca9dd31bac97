use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::errors::{CatalogError, Result};
use crate::taxonomy::Taxonomy;

pub type ListingId = String;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub location: String,
    pub rating: f64,
    pub verified: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub image: String,
    pub posted_at: DateTime<Utc>,
}

impl Listing {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| CatalogError::InvalidListing {
            id: self.id.clone(),
            reason: reason.to_string(),
        };
        if self.id.trim().is_empty() {
            return Err(invalid("empty id"));
        }
        if self.title.trim().is_empty() {
            return Err(invalid("empty title"));
        }
        if self.description.trim().is_empty() {
            return Err(invalid("empty description"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(invalid("price must be a non-negative number"));
        }
        if !self.rating.is_finite() || !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid("rating must be within [0, 5]"));
        }
        Ok(())
    }
}

/// The immutable, ordered collection every query evaluates against.
/// Loaded once per session; updates re-supply a whole new catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Validates field constraints and id uniqueness; listing order is
    /// preserved as supplied.
    pub fn new(listings: Vec<Listing>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(listings.len());
        for listing in &listings {
            listing.validate()?;
            if !seen.insert(listing.id.as_str()) {
                return Err(CatalogError::DuplicateId(listing.id.clone()));
            }
        }
        drop(seen);
        Ok(Self { listings })
    }

    /// Every listing category must resolve against the taxonomy
    /// (case/spacing-insensitively). Kept separate from `new` so callers
    /// without a taxonomy in hand can still construct a catalog.
    pub fn check_taxonomy(&self, taxonomy: &Taxonomy) -> Result<()> {
        for listing in &self.listings {
            if !taxonomy.is_known(&listing.category) {
                return Err(CatalogError::UnknownCategory {
                    id: listing.id.clone(),
                    category: listing.category.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Listing> {
        self.listings.iter()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn listing(id: &str, category: &str) -> Listing {
        Listing {
            id: id.to_string(),
            title: format!("Listing {id}"),
            description: "A perfectly ordinary item.".to_string(),
            price: 25.0,
            category: category.to_string(),
            location: "Stanford".to_string(),
            rating: 4.5,
            verified: true,
            tags: vec![],
            image: "/images/placeholder.jpg".to_string(),
            posted_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn catalog_preserves_order_and_looks_up_by_id() {
        let catalog = Catalog::new(vec![
            listing("a", "Books"),
            listing("b", "Electronics"),
            listing("c", "Vehicles"),
        ])
        .unwrap();
        let ids: Vec<&str> = catalog.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert_eq!(catalog.get("b").unwrap().category, "Electronics");
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![listing("a", "Books"), listing("a", "Books")]).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "a"));
    }

    #[test]
    fn field_constraints_are_enforced() {
        let mut bad = listing("a", "Books");
        bad.price = -1.0;
        assert!(Catalog::new(vec![bad]).is_err());

        let mut bad = listing("b", "Books");
        bad.rating = 5.5;
        assert!(Catalog::new(vec![bad]).is_err());

        let mut bad = listing("c", "Books");
        bad.title = "  ".to_string();
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn taxonomy_check_flags_unknown_categories() {
        let taxonomy = Taxonomy::standard();
        let catalog = Catalog::new(vec![listing("a", "Books"), listing("b", "Rocketry")]).unwrap();
        let err = catalog.check_taxonomy(&taxonomy).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownCategory { id, category } if id == "b" && category == "Rocketry"
        ));
    }

    #[test]
    fn listing_json_uses_camel_case_posted_at() {
        let json = serde_json::to_value(listing("a", "Books")).unwrap();
        assert!(json.get("postedAt").is_some());
        let back: Listing = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, "a");
    }
}
