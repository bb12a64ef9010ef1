use super::{require_texts, StatTable};
use crate::{error::Result, functions::format_int, statics::NEW_LINE, CandidateIdSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BombStat {
    pub size: i64,
    pub damage: i64,
}

/// Hand-written stats for the bombs, which the remote database does not list yet.
#[derive(Debug)]
pub struct Bomb {
    pub(super) stats: StatTable<BombStat>,
}

impl Default for Bomb {
    fn default() -> Self {
        Self::new()
    }
}

impl Bomb {
    pub const TABLE: [(&'static str, BombStat); 3] = [
        ("item_NameBOMB_S03_FSKI_Thunderball", BombStat { size: 3, damage: 27000 }),
        ("item_NameBOMB_S05_FSKI_Stormburst", BombStat { size: 5, damage: 46702 }),
        ("item_NameBOMB_S10_FSKI_Colossus", BombStat { size: 10, damage: 568297 }),
    ];

    pub fn new() -> Self {
        let mut stats: StatTable<BombStat> = StatTable::default();

        for (id, stat) in Self::TABLE {
            stats.insert(CandidateIdSet::single(id), stat);
        }

        Self { stats }
    }

    pub fn translate(&self, ids: &CandidateIdSet, cn: Option<&str>, en: Option<&str>) -> Result<String> {
        let (cn, en) = require_texts(ids, cn, en)?;
        let stat: &BombStat = self.stats.get(ids)?;

        Ok(format!(
            "{en} [{cn}]{NEW_LINE}S{} 伤害{}",
            stat.size,
            format_int(stat.damage)
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_translate() {
        let bomb = Bomb::new();
        let ids = CandidateIdSet::single("item_NameBOMB_S03_FSKI_Thunderball");

        assert_eq!(bomb.stats.len(), 3);
        assert_eq!(
            bomb.translate(&ids, Some("雷霆万钧 炸弹"), Some("Thunderball Bomb")).unwrap(),
            r"Thunderball Bomb [雷霆万钧 炸弹]\nS3 伤害27,000"
        );
    }
}
