use crate::{CandidateIdSet, StringHashMap};

/// Case-insensitive index from any spelling of an id to its canonical form.
///
/// The canonical form is the casing under which the id was first seen. An id that differs from an
/// already indexed one only by case is shadowed and never becomes canonical.
#[derive(Debug, Default, Clone)]
pub struct IdResolver {
    index: StringHashMap,
}

impl IdResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `id` unless a case variant of it is already known. Returns whether it was added.
    pub fn insert(&mut self, id: &str) -> bool {
        let key: String = id.to_uppercase();

        if self.index.contains_key(&key) {
            false
        } else {
            self.index.insert(key, id.to_owned());
            true
        }
    }

    pub fn resolve_one(&self, candidate: &str) -> Option<&str> {
        self.index.get(&candidate.to_uppercase()).map(String::as_str)
    }

    /// Canonical id of the first candidate that has one.
    pub fn resolve(&self, candidates: &CandidateIdSet) -> Option<&str> {
        candidates.iter().find_map(|candidate: &str| self.resolve_one(candidate))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(ids: &[&str]) -> IdResolver {
        let mut resolver = IdResolver::new();
        for id in ids {
            resolver.insert(id);
        }
        resolver
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let resolver = resolver(&["item_NameBOMB_S03", "ITEM_NAME_X"]);

        assert_eq!(resolver.resolve_one("ITEM_NAMEBOMB_S03"), Some("item_NameBOMB_S03"));
        assert_eq!(resolver.resolve_one("item_name_x"), Some("ITEM_NAME_X"));
        assert_eq!(resolver.resolve_one("ITEM_NAME_Y"), None);
    }

    #[test]
    fn test_first_casing_wins() {
        let mut resolver = resolver(&["Item_A"]);

        assert!(!resolver.insert("ITEM_A"));
        assert_eq!(resolver.resolve_one("item_a"), Some("Item_A"));
        assert_eq!(resolver.len(), 1);
    }

    #[test]
    fn test_resolve_prefers_earlier_candidates() {
        let resolver = resolver(&["ITEM_NAME_X", "ITEM_NAME_X_SCITEM"]);
        let candidates =
            CandidateIdSet::new(["ITEM_NAMEX", "ITEM_NAME_X_SCITEM", "ITEM_NAME_X"]).unwrap();

        assert_eq!(resolver.resolve(&candidates), Some("ITEM_NAME_X_SCITEM"));
        assert_eq!(resolver.resolve(&CandidateIdSet::single("missing")), None);
    }
}
