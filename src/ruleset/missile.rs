use super::{
    cstone::{JsonSource, Record},
    require_texts, RulesetOverrides, StatTable,
};
use crate::{
    error::Result,
    functions::format_int,
    statics::{NEW_LINE, PREFIX_ITEM_NAME},
    CandidateIdSet,
};
use sonic_rs::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissileStat {
    pub size: i64,
    /// Display abbreviation of the tracking signal (infrared, electromagnetic, cross section).
    pub tracking: String,
    pub damage: i64,
    pub speed: i64,
}

/// Missiles, annotated with size, tracking signal, total damage and speed.
#[derive(Debug)]
pub struct Missile {
    pub(super) stats: StatTable<MissileStat>,
    overrides: RulesetOverrides,
}

impl Missile {
    pub const CATEGORY: &'static str = "missile";
    pub const APIS: [&'static str; 1] = ["GetMissiles"];

    pub fn new(overrides: RulesetOverrides) -> Self {
        Self { stats: StatTable::default(), overrides }
    }

    pub fn grab(source: &dyn JsonSource, overrides: RulesetOverrides) -> Result<Self> {
        let mut ruleset: Missile = Missile::new(overrides);

        for api in Self::APIS {
            let records: Vec<Value> = source.fetch(api)?;
            ruleset.ingest(&records)?;
        }

        tracing::debug!("{} missiles grabbed", ruleset.stats.len());
        Ok(ruleset)
    }

    pub fn ingest(&mut self, records: &[Value]) -> Result<()> {
        for value in records {
            let record: Record = Record::new(value)?;
            let base_id: String = record.base_id();

            if self.overrides.is_ignored(record.codename, &base_id) {
                continue;
            }

            let damage: i64 = record.int("Damage");
            let speed: i64 = record.int("Speed");

            if damage == 0 && speed == 0 {
                continue;
            }

            let ids: CandidateIdSet = self.overrides.candidates(&base_id, &[PREFIX_ITEM_NAME], None);
            let stat: MissileStat = MissileStat {
                size: record.int("Size"),
                tracking: self.overrides.replace(&record.text("Tracking")).to_owned(),
                damage,
                speed,
            };

            self.stats.insert(ids, stat);
        }

        Ok(())
    }

    pub fn translate(&self, ids: &CandidateIdSet, cn: Option<&str>, en: Option<&str>) -> Result<String> {
        let (cn, en) = require_texts(ids, cn, en)?;
        let stat: &MissileStat = self.stats.get(ids)?;

        let mut result: String = format!(
            "{en} [S{}{} {cn}]{NEW_LINE}伤害{}",
            stat.size,
            stat.tracking,
            format_int(stat.damage)
        );

        if stat.speed != 0 {
            result.push_str(&format!(" 速度{}", format_int(stat.speed)));
        }

        Ok(result)
    }
}
