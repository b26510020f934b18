//! Bonus aggregation across all worn sets.

use crate::registry::SetRegistry;
use crate::scan::PieceCounts;
use crate::set::AttributeDescriptor;

/// Collects every descriptor earned by the worn piece counts.
///
/// For each set in `counts`, every threshold at or below the worn count
/// contributes its descriptors, lowest threshold first. Sets missing from the
/// registry (e.g. removed by a reload) contribute nothing.
///
/// # Example
///
/// ```
/// # use armorset_core::{aggregate, PieceCounts, SetDefinition, SetId, SetRegistry};
/// let mut registry = SetRegistry::new();
/// registry
///     .insert(
///         SetDefinition::builder("dragon")
///             .name("Dragon Set")
///             .threshold(2, ["desc_A"])
///             .threshold(4, ["desc_B"])
///             .build()
///             .unwrap(),
///     )
///     .unwrap();
///
/// let counts: PieceCounts = [(SetId::new("dragon"), 4)].into_iter().collect();
/// let earned: Vec<String> = aggregate(&counts, &registry)
///     .into_iter()
///     .map(|d| d.into_string())
///     .collect();
/// assert_eq!(earned, ["desc_A", "desc_B"]);
/// ```
pub fn aggregate(counts: &PieceCounts, registry: &SetRegistry) -> Vec<AttributeDescriptor> {
    counts
        .iter()
        .filter_map(|(id, count)| registry.get(id.as_str()).map(|def| (def, count)))
        .flat_map(|(definition, count)| definition.earned(count).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::set::{SetDefinition, SetId};

    fn registry() -> SetRegistry {
        let mut registry = SetRegistry::new();
        registry
            .insert(
                SetDefinition::builder("dragon")
                    .name("Dragon Set")
                    .threshold(4, ["desc_B"])
                    .threshold(2, ["desc_A"])
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
            .insert(
                SetDefinition::builder("shadow")
                    .name("Shadow Garb")
                    .threshold(1, ["stealth_1"])
                    .threshold(3, ["stealth_3a", "stealth_3b"])
                    .build()
                    .unwrap(),
            )
            .unwrap();
        registry
    }

    fn raw(descriptors: Vec<AttributeDescriptor>) -> Vec<String> {
        descriptors.into_iter().map(AttributeDescriptor::into_string).collect()
    }

    #[test]
    fn below_lowest_threshold_earns_nothing() {
        let counts: PieceCounts = [(SetId::new("dragon"), 1)].into_iter().collect();
        assert!(aggregate(&counts, &registry()).is_empty());
    }

    #[test]
    fn thresholds_are_cumulative_and_ascending() {
        let registry = registry();

        let two: PieceCounts = [(SetId::new("dragon"), 2)].into_iter().collect();
        assert_eq!(raw(aggregate(&two, &registry)), ["desc_A"]);

        let four: PieceCounts = [(SetId::new("dragon"), 4)].into_iter().collect();
        assert_eq!(raw(aggregate(&four, &registry)), ["desc_A", "desc_B"]);
    }

    #[test]
    fn multiple_sets_contribute_independently() {
        let counts: PieceCounts = [(SetId::new("shadow"), 3), (SetId::new("dragon"), 2)]
            .into_iter()
            .collect();
        let earned = raw(aggregate(&counts, &registry()));

        assert_eq!(earned.len(), 4);
        assert!(earned.contains(&"desc_A".to_string()));
        let shadow: Vec<&String> = earned.iter().filter(|d| d.starts_with("stealth")).collect();
        assert_eq!(shadow, ["stealth_1", "stealth_3a", "stealth_3b"]);
    }

    #[test]
    fn result_does_not_depend_on_snapshot_insertion_order() {
        let registry = registry();
        let forward: PieceCounts = [(SetId::new("dragon"), 4), (SetId::new("shadow"), 1)]
            .into_iter()
            .collect();
        let backward: PieceCounts = [(SetId::new("shadow"), 1), (SetId::new("dragon"), 4)]
            .into_iter()
            .collect();

        assert_eq!(aggregate(&forward, &registry), aggregate(&backward, &registry));
    }

    #[test]
    fn stale_set_ids_are_ignored() {
        let counts: PieceCounts = [(SetId::new("removed"), 4), (SetId::new("dragon"), 2)]
            .into_iter()
            .collect();
        assert_eq!(raw(aggregate(&counts, &registry())), ["desc_A"]);
    }

    #[test]
    fn empty_snapshot_earns_nothing() {
        assert!(aggregate(&PieceCounts::new(), &registry()).is_empty());
    }
}
