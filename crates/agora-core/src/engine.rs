use crate::buckets::{BucketTable, PriceBucket};
use crate::criteria::{Criteria, ResultOrder};
use crate::model::{Catalog, Listing};
use crate::taxonomy::Taxonomy;
use crate::util::fold;

/// The one filter engine behind every browsing surface. Holds the
/// taxonomy and the bucket vocabulary its call site uses; evaluation is
/// a pure function of (catalog, criteria) with no hidden state, so it
/// is safe to call on every input change from any number of callers.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    taxonomy: Taxonomy,
    buckets: BucketTable,
}

impl QueryEngine {
    pub fn new(taxonomy: Taxonomy, buckets: BucketTable) -> Self {
        Self { taxonomy, buckets }
    }

    /// Engine for the home feed and category pages.
    pub fn browse() -> Self {
        Self::new(Taxonomy::standard(), BucketTable::browse())
    }

    /// Engine for the dedicated search surface.
    pub fn search() -> Self {
        Self::new(Taxonomy::standard(), BucketTable::search())
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn buckets(&self) -> &BucketTable {
        &self.buckets
    }

    /// Ordered subsequence of `catalog` satisfying every specified
    /// criterion (predicates AND together). Never fails: malformed
    /// values degrade to empty matches per criterion, not errors.
    pub fn filter(&self, catalog: &Catalog, criteria: &Criteria) -> Vec<Listing> {
        let text = non_blank(criteria.text.as_deref()).map(|q| fold(q));
        let category = non_blank(criteria.category.as_deref())
            .map(|c| fold(&self.taxonomy.resolve(c)));
        // Some(None): a label outside the vocabulary, which matches nothing.
        let bucket: Option<Option<&PriceBucket>> = match non_blank(criteria.price.as_deref()) {
            None => None,
            Some(label) if label.eq_ignore_ascii_case("all") => None,
            Some(label) => Some(self.buckets.get(label)),
        };
        let location = non_blank(criteria.location.as_deref()).map(|l| fold(l));
        let tag = non_blank(criteria.tag.as_deref()).filter(|t| !t.eq_ignore_ascii_case("all"));

        let mut out: Vec<Listing> = catalog
            .iter()
            .filter(|l| {
                text.as_deref()
                    .map_or(true, |q| fold(&l.title).contains(q) || fold(&l.description).contains(q))
            })
            .filter(|l| category.as_deref().map_or(true, |c| fold(&l.category) == c))
            .filter(|l| match bucket {
                None => true,
                Some(Some(b)) => b.contains(l.price),
                Some(None) => false,
            })
            .filter(|l| criteria.verified.matches(l.verified))
            .filter(|l| location.as_deref().map_or(true, |loc| fold(&l.location) == loc))
            .filter(|l| tag.map_or(true, |t| l.has_tag(t)))
            .cloned()
            .collect();

        if criteria.order == ResultOrder::Newest {
            // sort_by is stable, so equal timestamps keep catalog order
            out.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        }
        if let Some(limit) = criteria.limit {
            out.truncate(limit);
        }
        out
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
