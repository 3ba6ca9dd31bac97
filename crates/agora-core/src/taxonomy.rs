use serde::{Deserialize, Serialize};

/// The additional category that behaves as its own feed, filtered by
/// tag instead of price/verified status.
pub const COMMUNITY: &str = "Community";

const PRIMARY: &[&str] = &[
    "Electronics",
    "Clothing",
    "Books",
    "Home & Garden",
    "Vehicles",
    "Services",
];

const ADDITIONAL: &[&str] = &["Campus Job", "Community"];

const COMMUNITY_TAGS: &[&str] = &[
    "about 1 hour",
    "activities",
    "childcare",
    "classes",
    "lost+found",
    "news+views",
    "rideshare",
    "volunteers",
    "general",
];

/// Fixed, ordered category vocabulary: primary categories shown in the
/// sidebar, additional ones below the divider. Read-only after
/// construction; passed explicitly, never held as process-global state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    primary: Vec<String>,
    additional: Vec<String>,
}

impl Taxonomy {
    pub fn new(primary: Vec<String>, additional: Vec<String>) -> Self {
        Self {
            primary,
            additional,
        }
    }

    /// The stock marketplace vocabulary.
    pub fn standard() -> Self {
        Self::new(
            PRIMARY.iter().map(|s| s.to_string()).collect(),
            ADDITIONAL.iter().map(|s| s.to_string()).collect(),
        )
    }

    pub fn primary(&self) -> &[String] {
        &self.primary
    }

    pub fn additional(&self) -> &[String] {
        &self.additional
    }

    /// All category names, primary first, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.primary
            .iter()
            .chain(self.additional.iter())
            .map(String::as_str)
    }

    pub fn is_known(&self, category: &str) -> bool {
        let slug = normalize(category);
        self.names().any(|name| name.to_lowercase() == slug)
    }

    /// Map a loosely formatted category reference (route segment, form
    /// value) to its canonical entry: URL-decode, hyphens to spaces,
    /// case-insensitive lookup. Unmatched input is returned normalized
    /// as a pass-through label; filtering on it simply yields nothing.
    pub fn resolve(&self, raw: &str) -> String {
        let slug = normalize(raw);
        self.names()
            .find(|name| name.to_lowercase() == slug)
            .map(|name| name.to_string())
            .unwrap_or(slug)
    }

    pub fn is_community(&self, category: &str) -> bool {
        category.eq_ignore_ascii_case(COMMUNITY)
    }
}

/// Sub-filter vocabulary for the community feed. `all` is not listed;
/// it is the pass-through sentinel, not a tag.
pub fn community_tags() -> &'static [&'static str] {
    COMMUNITY_TAGS
}

/// Route-segment form of a category name: lower-case, whitespace runs
/// collapsed to single hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

fn normalize(raw: &str) -> String {
    let decoded = urlencoding::decode(raw)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| raw.to_string());
    decoded.replace('-', " ").trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_hyphenated_route_segments() {
        let taxonomy = Taxonomy::standard();
        assert_eq!(taxonomy.resolve("home-&-garden"), "Home & Garden");
        assert_eq!(taxonomy.resolve("campus-job"), "Campus Job");
        assert_eq!(taxonomy.resolve("electronics"), "Electronics");
    }

    #[test]
    fn resolves_url_encoded_segments() {
        let taxonomy = Taxonomy::standard();
        assert_eq!(taxonomy.resolve("home-%26-garden"), "Home & Garden");
        assert_eq!(taxonomy.resolve("Home%20%26%20Garden"), "Home & Garden");
    }

    #[test]
    fn resolution_is_case_insensitive() {
        let taxonomy = Taxonomy::standard();
        for raw in ["ELECTRONICS", "Electronics", "eLeCtRoNiCs"] {
            assert_eq!(taxonomy.resolve(raw), "Electronics");
        }
    }

    #[test]
    fn unmatched_input_passes_through_normalized() {
        let taxonomy = Taxonomy::standard();
        // Not an error: the engine treats it as a literal category value.
        assert_eq!(taxonomy.resolve("Rocketry"), "rocketry");
        assert_eq!(taxonomy.resolve("yard-sales"), "yard sales");
    }

    #[test]
    fn is_known_ignores_case_and_separators() {
        let taxonomy = Taxonomy::standard();
        assert!(taxonomy.is_known("Home & Garden"));
        assert!(taxonomy.is_known("home-&-garden"));
        assert!(taxonomy.is_known("COMMUNITY"));
        assert!(!taxonomy.is_known("Rocketry"));
    }

    #[test]
    fn slugs_round_trip_through_resolution() {
        let taxonomy = Taxonomy::standard();
        for name in taxonomy.names() {
            assert_eq!(taxonomy.resolve(&slug(name)), name);
        }
        assert_eq!(slug("Home & Garden"), "home-&-garden");
    }

    #[test]
    fn community_vocabulary_is_fixed() {
        assert!(community_tags().contains(&"volunteers"));
        assert!(community_tags().contains(&"lost+found"));
        assert!(!community_tags().contains(&"all"));
        let taxonomy = Taxonomy::standard();
        assert!(taxonomy.is_community("community"));
        assert!(!taxonomy.is_community("Books"));
    }
}
