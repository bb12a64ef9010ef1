use super::{
    cstone::{JsonSource, Record},
    require_texts, RulesetOverrides, StatTable,
};
use crate::{error::Result, statics::PREFIX_ITEM_NAME, CandidateIdSet};
use sonic_rs::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipPartStat {
    /// S1/S2/S3/S4
    pub size: i64,
    /// Display abbreviation of the item class (military, civilian, industrial...).
    pub class: String,
    /// A/B/C/D
    pub grade: String,
    pub kind: String,
}

/// Coolers, power plants, quantum drives and shields, annotated with size, class and grade.
#[derive(Debug)]
pub struct ShipParts {
    pub(super) stats: StatTable<ShipPartStat>,
    overrides: RulesetOverrides,
}

impl ShipParts {
    pub const CATEGORY: &'static str = "ship_parts";
    // Jump modules and mining heads come back with wrong names and stats, so they are not fetched.
    pub const APIS: [&'static str; 4] = ["GetCoolers", "GetPowers", "GetDrives", "GetShields"];

    pub fn new(overrides: RulesetOverrides) -> Self {
        Self { stats: StatTable::default(), overrides }
    }

    /// Builds the ruleset and runs its grab phase against `source`.
    pub fn grab(source: &dyn JsonSource, overrides: RulesetOverrides) -> Result<Self> {
        let mut ruleset: ShipParts = ShipParts::new(overrides);

        for api in Self::APIS {
            let records: Vec<Value> = source.fetch(api)?;
            ruleset.ingest(&records)?;
            tracing::debug!("{api}: {} ship parts known so far", ruleset.stats.len());
        }

        Ok(ruleset)
    }

    pub fn ingest(&mut self, records: &[Value]) -> Result<()> {
        for value in records {
            let record: Record = Record::new(value)?;
            let base_id: String = record.base_id();

            if self.overrides.is_ignored(record.codename, &base_id) {
                continue;
            }

            let size: i64 = record.int("Size");

            if size == 0 {
                tracing::debug!("{} has no size, dropped", record.codename);
                continue;
            }

            let ids: CandidateIdSet = self.overrides.candidates(&base_id, &[PREFIX_ITEM_NAME], None);
            let stat: ShipPartStat = ShipPartStat {
                size,
                class: self.overrides.replace(&record.text("ItemClass")).to_owned(),
                grade: record.text("Grade"),
                kind: self.overrides.replace(&record.text("Type")).to_owned(),
            };

            self.stats.insert(ids, stat);
        }

        Ok(())
    }

    pub fn translate(&self, ids: &CandidateIdSet, cn: Option<&str>, en: Option<&str>) -> Result<String> {
        let (cn, en) = require_texts(ids, cn, en)?;
        let stat: &ShipPartStat = self.stats.get(ids)?;

        Ok(format!(
            "{en} [S{}{}{} {cn}]({})",
            stat.size, stat.class, stat.grade, stat.kind
        ))
    }
}
