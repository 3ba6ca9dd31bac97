use std::ops::Bound;

/// A named, boundary-defined price range. Bounds are explicit so the
/// two shipped vocabularies (which disagree at 50/100/500/1000) can
/// both be expressed without special cases.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBucket {
    label: String,
    lower: Bound<f64>,
    upper: Bound<f64>,
}

impl PriceBucket {
    pub fn new(label: impl Into<String>, lower: Bound<f64>, upper: Bound<f64>) -> Self {
        Self {
            label: label.into(),
            lower,
            upper,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn contains(&self, price: f64) -> bool {
        let above = match self.lower {
            Bound::Unbounded => true,
            Bound::Included(lo) => price >= lo,
            Bound::Excluded(lo) => price > lo,
        };
        let below = match self.upper {
            Bound::Unbounded => true,
            Bound::Included(hi) => price <= hi,
            Bound::Excluded(hi) => price < hi,
        };
        above && below
    }
}

/// An ordered bucket vocabulary. The engine takes one of these as
/// configuration; call sites pick the vocabulary their surface uses
/// instead of hard-coding boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct BucketTable {
    name: String,
    buckets: Vec<PriceBucket>,
}

impl BucketTable {
    pub fn new(name: impl Into<String>, buckets: Vec<PriceBucket>) -> Self {
        Self {
            name: name.into(),
            buckets,
        }
    }

    /// Vocabulary of the home feed and category pages.
    pub fn browse() -> Self {
        use Bound::{Excluded, Included, Unbounded};
        Self::new(
            "browse",
            vec![
                PriceBucket::new("under 100", Unbounded, Excluded(100.0)),
                PriceBucket::new("100-500", Included(100.0), Included(500.0)),
                PriceBucket::new("500-1000", Excluded(500.0), Included(1000.0)),
                PriceBucket::new("1000+", Excluded(1000.0), Unbounded),
            ],
        )
    }

    /// Vocabulary of the dedicated search surface. Adjacent buckets
    /// share their dollar boundaries; classification picks the first
    /// match, membership keeps the boundaries as written.
    pub fn search() -> Self {
        use Bound::{Excluded, Included, Unbounded};
        Self::new(
            "search",
            vec![
                PriceBucket::new("Under $50", Unbounded, Excluded(50.0)),
                PriceBucket::new("$50-$100", Included(50.0), Included(100.0)),
                PriceBucket::new("$100-$500", Included(100.0), Included(500.0)),
                PriceBucket::new("$500-$1000", Included(500.0), Included(1000.0)),
                PriceBucket::new("Over $1000", Excluded(1000.0), Unbounded),
            ],
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn buckets(&self) -> &[PriceBucket] {
        &self.buckets
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buckets.iter().map(PriceBucket::label)
    }

    /// Exact label lookup. Labels outside the vocabulary are not an
    /// error here; the engine maps them to an empty match set.
    pub fn get(&self, label: &str) -> Option<&PriceBucket> {
        self.buckets.iter().find(|b| b.label == label)
    }

    /// First bucket in declaration order containing `price`. Total for
    /// non-negative prices in both shipped vocabularies.
    pub fn classify(&self, price: f64) -> Option<&PriceBucket> {
        self.buckets.iter().find(|b| b.contains(price))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browse_vocabulary_is_a_total_partition() {
        let table = BucketTable::browse();
        // No gaps and no overlaps, including at the boundary prices.
        for price in [
            0.0, 1.0, 99.99, 100.0, 100.01, 250.0, 500.0, 500.01, 999.99, 1000.0, 1000.01, 5000.0,
        ] {
            let matching: Vec<&str> = table
                .buckets()
                .iter()
                .filter(|b| b.contains(price))
                .map(PriceBucket::label)
                .collect();
            assert_eq!(matching.len(), 1, "price {price} matched {matching:?}");
        }
    }

    #[test]
    fn browse_boundary_placement() {
        let table = BucketTable::browse();
        assert_eq!(table.classify(99.99).unwrap().label(), "under 100");
        assert_eq!(table.classify(100.0).unwrap().label(), "100-500");
        assert_eq!(table.classify(500.0).unwrap().label(), "100-500");
        assert_eq!(table.classify(500.01).unwrap().label(), "500-1000");
        assert_eq!(table.classify(1000.0).unwrap().label(), "500-1000");
        assert_eq!(table.classify(1000.01).unwrap().label(), "1000+");
    }

    #[test]
    fn search_classification_is_total_and_first_match_wins() {
        let table = BucketTable::search();
        for price in [0.0, 49.99, 50.0, 100.0, 500.0, 1000.0, 1000.01] {
            assert!(table.classify(price).is_some(), "price {price} unclassified");
        }
        // Shared dollar boundaries classify into the earlier bucket...
        assert_eq!(table.classify(100.0).unwrap().label(), "$50-$100");
        assert_eq!(table.classify(500.0).unwrap().label(), "$100-$500");
        // ...while membership keeps both buckets' boundaries as written.
        assert!(table.get("$100-$500").unwrap().contains(100.0));
        assert!(table.get("$500-$1000").unwrap().contains(500.0));
    }

    #[test]
    fn boundary_price_100_lands_in_the_100_buckets() {
        assert!(BucketTable::browse().get("100-500").unwrap().contains(100.0));
        assert!(BucketTable::search().get("$100-$500").unwrap().contains(100.0));
        assert!(!BucketTable::browse().get("under 100").unwrap().contains(100.0));
        assert!(!BucketTable::search().get("Under $50").unwrap().contains(100.0));
    }

    #[test]
    fn unknown_labels_resolve_to_none() {
        assert!(BucketTable::browse().get("Under $50").is_none());
        assert!(BucketTable::search().get("under 100").is_none());
        assert!(BucketTable::browse().get("free").is_none());
    }

    #[test]
    fn vocabularies_stay_distinct() {
        let browse = BucketTable::browse();
        let search = BucketTable::search();
        assert_eq!(browse.labels().count(), 4);
        assert_eq!(search.labels().count(), 5);
        // The same price can classify differently per vocabulary.
        assert_eq!(browse.classify(75.0).unwrap().label(), "under 100");
        assert_eq!(search.classify(75.0).unwrap().label(), "$50-$100");
    }
}
