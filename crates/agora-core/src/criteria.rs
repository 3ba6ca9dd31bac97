use serde::{Deserialize, Serialize};

/// Tri-state verification filter. Serialized with the vocabulary the
/// filter selects use on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VerifiedFilter {
    #[default]
    #[serde(rename = "all")]
    Any,
    #[serde(rename = "verified")]
    Verified,
    #[serde(rename = "not verified")]
    NotVerified,
}

impl VerifiedFilter {
    /// Parse a form/query value. Unknown values fall back to `Any`, the
    /// same way an unrecognized select option would.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "verified" => Self::Verified,
            "not verified" | "not-verified" | "unverified" => Self::NotVerified,
            _ => Self::Any,
        }
    }

    pub fn matches(self, verified: bool) -> bool {
        match self {
            Self::Any => true,
            Self::Verified => verified,
            Self::NotVerified => !verified,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultOrder {
    /// Stable filter: results keep the catalog's relative order.
    #[default]
    Catalog,
    /// Opt-in recency sort by `posted_at` descending; catalog order
    /// breaks ties.
    Newest,
}

/// One evaluation's worth of filter parameters. Ephemeral: rebuilt from
/// input state on every evaluation, no identity, no persistence.
/// Unset, blank, or `all` fields pass everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub text: Option<String>,
    /// Raw category reference; the engine resolves it against its
    /// taxonomy before matching.
    pub category: Option<String>,
    /// Bucket label in the engine's vocabulary. Labels outside the
    /// vocabulary match nothing.
    pub price: Option<String>,
    pub verified: VerifiedFilter,
    pub location: Option<String>,
    /// Community feed sub-filter. The literal `all` matches every
    /// listing, tagged or not.
    pub tag: Option<String>,
    pub order: ResultOrder,
    /// Maximum result count, always taken from the front of the ordered
    /// sequence.
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verified_filter_parses_select_vocabulary() {
        assert_eq!(VerifiedFilter::parse("verified"), VerifiedFilter::Verified);
        assert_eq!(
            VerifiedFilter::parse("not verified"),
            VerifiedFilter::NotVerified
        );
        assert_eq!(
            VerifiedFilter::parse("Not-Verified"),
            VerifiedFilter::NotVerified
        );
        assert_eq!(VerifiedFilter::parse("all"), VerifiedFilter::Any);
        assert_eq!(VerifiedFilter::parse("gibberish"), VerifiedFilter::Any);
    }

    #[test]
    fn verified_filter_matches_tristate() {
        assert!(VerifiedFilter::Any.matches(true));
        assert!(VerifiedFilter::Any.matches(false));
        assert!(VerifiedFilter::Verified.matches(true));
        assert!(!VerifiedFilter::Verified.matches(false));
        assert!(VerifiedFilter::NotVerified.matches(false));
        assert!(!VerifiedFilter::NotVerified.matches(true));
    }

    #[test]
    fn criteria_deserializes_sparse_json() {
        let criteria: Criteria =
            serde_json::from_str(r#"{"category":"Electronics","verified":"verified"}"#).unwrap();
        assert_eq!(criteria.category.as_deref(), Some("Electronics"));
        assert_eq!(criteria.verified, VerifiedFilter::Verified);
        assert_eq!(criteria.order, ResultOrder::Catalog);
        assert!(criteria.text.is_none() && criteria.limit.is_none());
    }
}
