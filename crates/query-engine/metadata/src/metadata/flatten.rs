//! How nested result rows are turned into flat records.

use super::campaign::CAMPAIGN_NAMESPACES;

/// A strategy for flattening one nested result row into one flat record.
///
/// The campaign operations and custom queries use different strategies, so
/// a field like `campaign.id` comes out as `id` from the former and `campaign_id` from
/// the latter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlattenStrategy {
    /// Shallow merge of the listed namespaces without prefixing their keys. Namespaces
    /// later in the list overwrite earlier ones on key collisions, and top-level entries
    /// outside the list are dropped.
    NamespaceMerge { namespaces: Vec<String> },
    /// One level of flattening: entries of a nested object are emitted as
    /// `<topKey>_<nestedKey>`, every other value is kept as is. Deeper nesting is left
    /// untouched.
    PrefixFlatten,
}

impl FlattenStrategy {
    /// The merge used for campaign records: `campaign`, then `metrics`, then
    /// `campaign_budget`.
    pub fn campaign() -> Self {
        FlattenStrategy::NamespaceMerge {
            namespaces: CAMPAIGN_NAMESPACES
                .iter()
                .map(|namespace| (*namespace).to_string())
                .collect(),
        }
    }
}
