use super::{
    cstone::{JsonSource, Record},
    require_texts, RulesetOverrides, StatTable,
};
use crate::{
    error::Result,
    functions::format_int,
    statics::{EFFECTS_RE, NEW_LINE, PREFIX_COMMODITIES, PREFIX_HARVESTABLE, PREFIX_ITEM_NAME},
    CandidateIdSet,
};
use sonic_rs::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoodStat {
    /// NDR, nutritional density rating.
    pub hunger: i64,
    /// HEI, hydration efficacy index.
    pub thirst: i64,
    pub effects: Vec<String>,
}

impl FoodStat {
    pub fn is_empty(&self) -> bool {
        self.hunger == 0 && self.thirst == 0 && self.effects.is_empty()
    }
}

/// Food and drinks, annotated with hunger/thirst values and their effects.
#[derive(Debug)]
pub struct FoodAndDrink {
    pub(super) stats: StatTable<FoodStat>,
    overrides: RulesetOverrides,
}

impl FoodAndDrink {
    pub const CATEGORY: &'static str = "food_and_drink";
    pub const APIS: [&'static str; 2] = ["GetFoods", "GetDrinks"];
    const PREFIXES: [&'static str; 2] = [PREFIX_ITEM_NAME, PREFIX_COMMODITIES];

    pub fn new(overrides: RulesetOverrides) -> Self {
        Self { stats: StatTable::default(), overrides }
    }

    pub fn grab(source: &dyn JsonSource, overrides: RulesetOverrides) -> Result<Self> {
        let mut ruleset: FoodAndDrink = FoodAndDrink::new(overrides);

        for api in Self::APIS {
            let records: Vec<Value> = source.fetch(api)?;
            ruleset.ingest(&records)?;
            tracing::debug!("{api}: {} consumables known so far", ruleset.stats.len());
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

            let stat: FoodStat = FoodStat {
                hunger: record.int("Hunger"),
                thirst: record.int("Thirst"),
                effects: record
                    .str("Description")
                    .map(|description: &str| self.parse_effects(description))
                    .unwrap_or_default(),
            };

            // Props and containers come back as consumables without any effect.
            if stat.is_empty() {
                continue;
            }

            let short_id: Option<&str> = base_id.strip_prefix(PREFIX_HARVESTABLE);
            let ids: CandidateIdSet = self.overrides.candidates(&base_id, &Self::PREFIXES, short_id);

            self.stats.insert(ids, stat);
        }

        Ok(())
    }

    /// Effect names listed after the `Effects:` label of a description, with display names applied.
    pub fn parse_effects(&self, description: &str) -> Vec<String> {
        let Some(captures) = EFFECTS_RE.captures(description) else {
            return Vec::new();
        };

        captures[1]
            .split(',')
            .map(str::trim)
            .filter(|effect: &&str| !effect.is_empty() && *effect != "None")
            .map(|effect: &str| self.overrides.replace(effect).to_owned())
            .collect()
    }

    pub fn translate(&self, ids: &CandidateIdSet, cn: Option<&str>, en: Option<&str>) -> Result<String> {
        let (cn, en) = require_texts(ids, cn, en)?;
        let stat: &FoodStat = self.stats.get(ids)?;

        let mut numbers: Vec<String> = Vec::with_capacity(2);

        if stat.hunger != 0 {
            numbers.push(format!("NDR:{}", format_int(stat.hunger)));
        }

        if stat.thirst != 0 {
            numbers.push(format!("HEI:{}", format_int(stat.thirst)));
        }

        let mut result: String = format!("{en}{NEW_LINE}{cn}");

        if !numbers.is_empty() {
            result.push(' ');
            result.push_str(&numbers.join(" "));
        }

        if !stat.effects.is_empty() {
            result.push_str(if numbers.is_empty() { " " } else { " | " });
            result.push_str(&stat.effects.join(","));
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ruleset::cstone::tests::StaticSource;
    use pretty_assertions::assert_eq;

    fn overrides() -> RulesetOverrides {
        let mut overrides = RulesetOverrides::default();
        overrides.replace_map.insert(String::from("Hydrating"), String::from("补水"));
        overrides.replace_map.insert(String::from("Energizing"), String::from("活力"));
        overrides
    }

    fn ruleset() -> FoodAndDrink {
        let source = StaticSource::default()
            .with(
                "GetFoods",
                r#"[
                    {"ItemCodeName": "Food_burrito_01", "Hunger": 30, "Thirst": 0, "Description": "Type: Food\\nEffects: Energizing, None\\nA burrito."},
                    {"ItemCodeName": "harvestable_fruit_SCItem", "Hunger": "5", "Thirst": "5"},
                    {"ItemCodeName": "Food_plate", "Hunger": 0, "Thirst": 0, "Description": "Effects: None\\n"}
                ]"#,
            )
            .with(
                "GetDrinks",
                r#"[
                    {"ItemCodeName": "Drink_bottle_water_01", "Hunger": 0, "Thirst": 40, "Description": "Effects: Hydrating\\n"},
                    {"ItemCodeName": "Drink_pill", "Hunger": 0, "Thirst": 0, "Description": "Effects: Energizing, Hydrating\\n"}
                ]"#,
            );

        FoodAndDrink::grab(&source, overrides()).unwrap()
    }

    fn find(ruleset: &FoodAndDrink, needle: &str) -> CandidateIdSet {
        ruleset
            .stats
            .sets()
            .iter()
            .find(|ids| ids.first().contains(needle))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_effectless_items_are_dropped() {
        let ruleset = ruleset();

        assert_eq!(ruleset.stats.len(), 4);
        assert!(ruleset.stats.sets().iter().all(|ids| !ids.first().contains("PLATE")));
    }

    #[test]
    fn test_harvestable_items_get_short_candidates() {
        let ids = find(&ruleset(), "HARVESTABLE_FRUIT");

        assert_eq!(ids.len(), 16);
        assert_eq!(ids.as_slice()[1], "ITEM_NAME_HARVESTABLE_FRUIT");
        assert_eq!(ids.as_slice()[4], "items_commoditiesHARVESTABLE_FRUIT");
        assert_eq!(ids.as_slice()[9], "ITEM_NAME_FRUIT");
    }

    #[test]
    fn test_parse_effects() {
        let ruleset = FoodAndDrink::new(overrides());

        assert_eq!(
            ruleset.parse_effects(r"Effects: Hydrating, Muscle Cramps, None\nMore text"),
            vec!["补水", "Muscle Cramps"]
        );
        assert_eq!(ruleset.parse_effects("Effect: Energizing"), vec!["活力"]);
        assert!(ruleset.parse_effects("No effect label here").is_empty());
    }

    #[test]
    fn test_translate_omits_empty_sections() {
        let ruleset = ruleset();

        assert_eq!(
            ruleset
                .translate(&find(&ruleset, "BURRITO"), Some("墨西哥卷"), Some("Burrito"))
                .unwrap(),
            r"Burrito\n墨西哥卷 NDR:30 | 活力"
        );
        assert_eq!(
            ruleset
                .translate(&find(&ruleset, "HARVESTABLE_FRUIT"), Some("果"), Some("Fruit"))
                .unwrap(),
            r"Fruit\n果 NDR:5 HEI:5"
        );
        assert_eq!(
            ruleset
                .translate(&find(&ruleset, "WATER"), Some("水"), Some("Water"))
                .unwrap(),
            r"Water\n水 HEI:40 | 补水"
        );
        assert_eq!(
            ruleset.translate(&find(&ruleset, "PILL"), Some("药"), Some("Pill")).unwrap(),
            r"Pill\n药 活力,补水"
        );
    }
}
