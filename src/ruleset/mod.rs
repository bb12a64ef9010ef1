//! Rulesets decide which ids they cover and how the final text of those ids reads.

mod bomb;
pub mod cstone;
mod food;
mod missile;
mod replace;
mod ship_parts;
mod template;

pub use bomb::{Bomb, BombStat};
pub use cstone::{CstoneClient, JsonSource};
pub use food::{FoodAndDrink, FoodStat};
pub use missile::{Missile, MissileStat};
pub use replace::GeneralReplace;
pub use ship_parts::{ShipPartStat, ShipParts};
pub use template::Template;

use crate::{
    error::{Error, Result},
    functions::{prefixed_candidates, read_id_list, read_key_value_file},
    CandidateIdSet, StringHashMap, StringHashSet, Xxh3Builder,
};
use indexmap::IndexSet;
use std::path::Path;

pub type IdSetCollection = IndexSet<CandidateIdSet, Xxh3Builder>;

/// A closed set of ruleset variants, applied by the generation driver in caller order.
#[derive(Debug)]
pub enum Ruleset {
    ShipParts(ShipParts),
    Missile(Missile),
    FoodAndDrink(FoodAndDrink),
    Bomb(Bomb),
    GeneralReplace(GeneralReplace),
    Template(Template),
}

impl Ruleset {
    pub fn name(&self) -> &'static str {
        match self {
            Ruleset::ShipParts(_) => "ShipParts",
            Ruleset::Missile(_) => "Missile",
            Ruleset::FoodAndDrink(_) => "FoodAndDrink",
            Ruleset::Bomb(_) => "Bomb",
            Ruleset::GeneralReplace(_) => "GeneralReplace",
            Ruleset::Template(_) => "Template",
        }
    }

    /// Every candidate id set this ruleset can translate, in discovery order.
    pub fn candidate_id_sets(&self) -> &IdSetCollection {
        match self {
            Ruleset::ShipParts(ruleset) => ruleset.stats.sets(),
            Ruleset::Missile(ruleset) => ruleset.stats.sets(),
            Ruleset::FoodAndDrink(ruleset) => ruleset.stats.sets(),
            Ruleset::Bomb(ruleset) => ruleset.stats.sets(),
            Ruleset::GeneralReplace(ruleset) => ruleset.sets(),
            Ruleset::Template(ruleset) => ruleset.sets(),
        }
    }

    /// Renders the display text for `ids` from its CN and EN source text.
    pub fn translate(&self, ids: &CandidateIdSet, cn: Option<&str>, en: Option<&str>) -> Result<String> {
        match self {
            Ruleset::ShipParts(ruleset) => ruleset.translate(ids, cn, en),
            Ruleset::Missile(ruleset) => ruleset.translate(ids, cn, en),
            Ruleset::FoodAndDrink(ruleset) => ruleset.translate(ids, cn, en),
            Ruleset::Bomb(ruleset) => ruleset.translate(ids, cn, en),
            Ruleset::GeneralReplace(ruleset) => ruleset.translate(ids),
            Ruleset::Template(ruleset) => ruleset.translate(ids, en),
        }
    }
}

/// Stats keyed by candidate id set, built once during a ruleset's grab phase.
#[derive(Debug)]
pub struct StatTable<T> {
    sets: IdSetCollection,
    stats: Vec<T>,
}

impl<T> Default for StatTable<T> {
    fn default() -> Self {
        Self { sets: IdSetCollection::default(), stats: Vec::new() }
    }
}

impl<T> StatTable<T> {
    /// Stores `stat` for `ids`, replacing the stat of an identical set grabbed earlier.
    pub fn insert(&mut self, ids: CandidateIdSet, stat: T) {
        let (index, inserted) = self.sets.insert_full(ids);

        if inserted {
            self.stats.push(stat);
        } else {
            self.stats[index] = stat;
        }
    }

    pub fn get(&self, ids: &CandidateIdSet) -> Result<&T> {
        self.sets
            .get_index_of(ids)
            .map(|index: usize| &self.stats[index])
            .ok_or_else(|| Error::MissingStat { ids: ids.clone() })
    }

    pub fn sets(&self) -> &IdSetCollection {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

/// Per-category hand-maintained data that corrects what the remote API returns.
#[derive(Debug, Default, Clone)]
pub struct RulesetOverrides {
    /// Base id to the exact canonical id it should translate.
    pub special_ids: StringHashMap,
    /// Remote category names to their display abbreviation.
    pub replace_map: StringHashMap,
    pub ignore_ids: StringHashSet,
}

impl RulesetOverrides {
    /// Reads `direct_id/`, `replace_map/` and `ignore/` files named `<category>.txt` under `custom_dir`.
    pub fn load(custom_dir: &Path, category: &str) -> Result<Self> {
        let filename: String = format!("{category}.txt");

        Ok(Self {
            special_ids: read_key_value_file(&custom_dir.join("direct_id").join(&filename))?,
            replace_map: read_key_value_file(&custom_dir.join("replace_map").join(&filename))?,
            ignore_ids: read_id_list(&custom_dir.join("ignore").join(&filename))?,
        })
    }

    pub fn replace<'a>(&'a self, name: &'a str) -> &'a str {
        self.replace_map.get(name).map_or(name, String::as_str)
    }

    pub fn is_ignored(&self, codename: &str, base_id: &str) -> bool {
        self.ignore_ids.contains(base_id) || self.ignore_ids.contains(&codename.to_uppercase())
    }

    /// Candidate spellings for `base_id`, or the one special id it is mapped to.
    ///
    /// When `short_id` is given the same pattern is appended for it as a fallback.
    pub fn candidates(&self, base_id: &str, prefixes: &[&str], short_id: Option<&str>) -> CandidateIdSet {
        let mut candidates: Vec<String> = match self.special_ids.get(base_id) {
            Some(special) => vec![special.clone()],
            None => prefixes
                .iter()
                .flat_map(|prefix: &&str| prefixed_candidates(prefix, base_id))
                .collect(),
        };

        if let Some(short_id) = short_id {
            candidates.extend(
                prefixes
                    .iter()
                    .flat_map(|prefix: &&str| prefixed_candidates(prefix, short_id)),
            );
        }

        CandidateIdSet::new(candidates).unwrap_or_else(|| CandidateIdSet::single(base_id))
    }
}

/// Fails with [`Error::MissingText`] unless both sides are present.
pub(crate) fn require_texts<'a>(
    ids: &CandidateIdSet,
    cn: Option<&'a str>,
    en: Option<&'a str>,
) -> Result<(&'a str, &'a str)> {
    match (cn, en) {
        (Some(cn), Some(en)) => Ok((cn, en)),
        _ => Err(Error::MissingText { id: ids.to_string() }),
    }
}
