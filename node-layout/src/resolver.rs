//! Layout plan resolution.
//!
//! The resolver assembles the per-kind plan providers into a lookup table
//! once at startup and serves plans per render. Lookup is total: a kind or
//! kind name with no explicit entry resolves to the fallback plan for the
//! requested mode rather than erroring.

use std::collections::HashMap;
use std::str::FromStr;

use graph_model::{NodeKind, ViewMode};

use crate::plan::LayoutPlan;
use crate::plans::{standard_providers, DefaultPlans, PlanProvider};

/// Resolves `(kind, mode)` to an immutable layout plan.
pub struct LayoutResolver {
    /// Plans by kind and mode
    plans: HashMap<(NodeKind, ViewMode), LayoutPlan>,
    /// Fallback plan for preview mode
    fallback_preview: LayoutPlan,
    /// Fallback plan for detail mode
    fallback_detail: LayoutPlan,
    /// Deterministic hash of the assembled table
    config_hash: String,
}

impl LayoutResolver {
    /// Build a resolver from the standard provider set.
    pub fn new() -> Self {
        Self::with_providers(standard_providers())
    }

    /// Build a resolver from a custom provider set.
    pub fn with_providers(providers: Vec<Box<dyn PlanProvider>>) -> Self {
        let mut plans = HashMap::new();

        for provider in providers {
            let kind = provider.kind();
            plans.insert((kind, ViewMode::Preview), provider.preview());
            plans.insert((kind, ViewMode::Detail), provider.detail());
        }

        let fallback_preview = DefaultPlans::preview();
        let fallback_detail = DefaultPlans::detail();
        let config_hash = Self::compute_config_hash(&plans, &fallback_preview, &fallback_detail);

        Self {
            plans,
            fallback_preview,
            fallback_detail,
            config_hash,
        }
    }

    /// Look up the plan for a kind and mode.
    ///
    /// Kinds without an explicit entry resolve to the fallback plan.
    pub fn resolve(&self, kind: NodeKind, mode: ViewMode) -> &LayoutPlan {
        self.plans.get(&(kind, mode)).unwrap_or_else(|| {
            tracing::debug!(kind = %kind, mode = mode.as_str(), "No plan entry, using fallback");
            self.fallback(mode)
        })
    }

    /// Look up a plan by unparsed kind name (as received from the host).
    ///
    /// Unknown names resolve to the fallback plan.
    pub fn resolve_name(&self, kind_name: &str, mode: ViewMode) -> &LayoutPlan {
        match NodeKind::from_str(kind_name) {
            Ok(kind) => self.resolve(kind, mode),
            Err(_) => {
                tracing::debug!(kind = kind_name, "Unknown kind name, using fallback");
                self.fallback(mode)
            }
        }
    }

    /// The fallback plan for a mode.
    pub fn fallback(&self, mode: ViewMode) -> &LayoutPlan {
        match mode {
            ViewMode::Preview => &self.fallback_preview,
            ViewMode::Detail => &self.fallback_detail,
        }
    }

    /// Deterministic hash of the assembled plan table.
    ///
    /// The host uses this as a cache key for rendered layouts.
    pub fn config_hash(&self) -> &str {
        &self.config_hash
    }

    /// Number of explicit plan entries.
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the table has no explicit entries.
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    fn compute_config_hash(
        plans: &HashMap<(NodeKind, ViewMode), LayoutPlan>,
        fallback_preview: &LayoutPlan,
        fallback_detail: &LayoutPlan,
    ) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();

        hash_plan(&mut hasher, "default", fallback_preview);
        hash_plan(&mut hasher, "default", fallback_detail);

        // Sort entries for deterministic hashing
        let mut keys: Vec<_> = plans.keys().collect();
        keys.sort_by_key(|(kind, mode)| (kind.as_str(), mode.as_str()));

        for key in keys {
            if let Some(plan) = plans.get(key) {
                hash_plan(&mut hasher, key.0.as_str(), plan);
            }
        }

        hex::encode(hasher.finalize())
    }
}

impl Default for LayoutResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn hash_plan(hasher: &mut sha2::Sha256, kind_name: &str, plan: &LayoutPlan) {
    use sha2::Digest;

    hasher.update(kind_name.as_bytes());
    hasher.update(plan.mode.as_str().as_bytes());
    hasher.update(plan.ratios.content_text.to_bits().to_be_bytes());
    hasher.update(plan.ratios.inclusion_voting.to_bits().to_be_bytes());
    hasher.update(plan.ratios.content_voting.to_bits().to_be_bytes());

    // BTreeMap iteration is already name-ordered
    for (name, anchor) in &plan.anchors {
        hasher.update(name.as_bytes());
        hasher.update(anchor.region.as_str().as_bytes());
        hasher.update(anchor.fraction.to_bits().to_be_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detail_ratio() {
        let resolver = LayoutResolver::new();
        let plan = resolver.resolve(NodeKind::Quantity, ViewMode::Detail);
        assert_eq!(plan.ratios.content_voting, 0.70);
    }

    #[test]
    fn test_unknown_name_falls_back() {
        let resolver = LayoutResolver::new();
        let plan = resolver.resolve_name("no-such-kind", ViewMode::Detail);
        assert_eq!(plan.kind, None);
        assert_eq!(plan.mode, ViewMode::Detail);
    }

    #[test]
    fn test_resolve_without_entry_falls_back() {
        let resolver = LayoutResolver::with_providers(vec![]);
        let plan = resolver.resolve(NodeKind::Word, ViewMode::Preview);
        assert_eq!(plan.kind, None);
    }

    #[test]
    fn test_every_kind_resolves_in_both_modes() {
        let resolver = LayoutResolver::new();
        for kind in NodeKind::all() {
            for mode in [ViewMode::Preview, ViewMode::Detail] {
                let plan = resolver.resolve(kind, mode);
                assert!(plan.ratios.sum() <= 1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn test_config_hash_deterministic() {
        let a = LayoutResolver::new();
        let b = LayoutResolver::new();
        assert_eq!(a.config_hash(), b.config_hash());
        assert_eq!(a.config_hash().len(), 64);
    }

    #[test]
    fn test_config_hash_tracks_table_changes() {
        let full = LayoutResolver::new();
        let empty = LayoutResolver::with_providers(vec![]);
        assert_ne!(full.config_hash(), empty.config_hash());
    }
}
