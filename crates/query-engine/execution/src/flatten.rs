//! Turn nested result rows into flat records.

use serde_json::Value;

use query_engine_metadata::metadata::FlattenStrategy;

use crate::executor::Row;

/// Flatten a row according to the strategy of its execution plan.
pub fn flatten(strategy: &FlattenStrategy, row: Row) -> Row {
    match strategy {
        FlattenStrategy::NamespaceMerge { namespaces } => namespace_merge(namespaces, row),
        FlattenStrategy::PrefixFlatten => prefix_flatten(row),
    }
}

/// Merge the entries of the named namespaces into one record, later namespaces
/// overwriting earlier ones. An overwritten key keeps the position it was first seen at.
pub fn namespace_merge(namespaces: &[String], mut row: Row) -> Row {
    let mut record = Row::new();
    for namespace in namespaces {
        if let Some(Value::Object(fields)) = row.remove(namespace) {
            record.extend(fields);
        }
    }
    record
}

/// Flatten one level of nesting: `{"a": {"b": 1}, "c": 2}` becomes `{"a_b": 1, "c": 2}`.
pub fn prefix_flatten(row: Row) -> Row {
    let mut record = Row::new();
    for (key, value) in row {
        match value {
            Value::Object(nested) => {
                for (nested_key, nested_value) in nested {
                    record.insert(format!("{key}_{nested_key}"), nested_value);
                }
            }
            other => {
                record.insert(key, other);
            }
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(value: Value) -> Row {
        match value {
            Value::Object(row) => row,
            _ => panic!("expected an object"),
        }
    }

    fn campaign_row() -> Row {
        row(json!({
            "campaign": {"id": 1, "name": "A"},
            "metrics": {"impressions": 10},
            "campaign_budget": {"amount_micros": 500}
        }))
    }

    #[test]
    fn namespace_merge_drops_the_namespaces() {
        similar_asserts::assert_eq!(
            Value::Object(flatten(&FlattenStrategy::campaign(), campaign_row())),
            json!({"id": 1, "name": "A", "impressions": 10, "amount_micros": 500})
        );
    }

    #[test]
    fn prefix_flatten_keeps_the_namespaces_as_prefixes() {
        similar_asserts::assert_eq!(
            Value::Object(flatten(&FlattenStrategy::PrefixFlatten, campaign_row())),
            json!({
                "campaign_id": 1,
                "campaign_name": "A",
                "metrics_impressions": 10,
                "campaign_budget_amount_micros": 500
            })
        );
    }

    #[test]
    fn the_two_strategies_disagree_on_the_same_row() {
        // campaign operations and custom queries shape identical rows differently
        let merged = flatten(&FlattenStrategy::campaign(), campaign_row());
        let prefixed = flatten(&FlattenStrategy::PrefixFlatten, campaign_row());
        assert!(merged.contains_key("id"));
        assert!(!prefixed.contains_key("id"));
        assert!(prefixed.contains_key("campaign_id"));
        assert_ne!(merged, prefixed);
    }

    #[test]
    fn later_namespaces_win_collisions() {
        let merged = flatten(
            &FlattenStrategy::campaign(),
            row(json!({
                "campaign_budget": {"resource_name": "budget"},
                "metrics": {"clicks": 3},
                "campaign": {"resource_name": "campaign", "id": 7}
            })),
        );
        similar_asserts::assert_eq!(
            Value::Object(merged),
            json!({"resource_name": "budget", "id": 7, "clicks": 3})
        );
    }

    #[test]
    fn namespace_merge_ignores_missing_and_foreign_entries() {
        let merged = flatten(
            &FlattenStrategy::campaign(),
            row(json!({"campaign": {"id": 1}, "segments": {"date": "2024-01-01"}, "x": 1})),
        );
        similar_asserts::assert_eq!(Value::Object(merged), json!({"id": 1}));
    }

    #[test]
    fn prefix_flatten_is_one_level_deep() {
        let flat = prefix_flatten(row(json!({
            "ad_group_ad": {"ad": {"id": 5}, "status": "ENABLED"},
            "customer_id": 12,
            "labels": ["a", "b"],
            "missing": null
        })));
        similar_asserts::assert_eq!(
            Value::Object(flat),
            json!({
                "ad_group_ad_ad": {"id": 5},
                "ad_group_ad_status": "ENABLED",
                "customer_id": 12,
                "labels": ["a", "b"],
                "missing": null
            })
        );
    }
}
