use pretty_assertions::assert_eq;
use scloc_lib::{
    ruleset::{cstone::parse_records, JsonSource},
    CandidateIdSet, Error, GenerationDriver, Result, Ruleset, Settings, TextField,
};
use sonic_rs::Value;
use std::{
    collections::HashMap,
    fs::{create_dir_all, read_to_string, write},
    io::{self, ErrorKind},
    path::Path,
};
use tempfile::TempDir;

/// Answers API calls with fixed bodies, empty arrays for everything else.
struct FixtureSource {
    bodies: HashMap<&'static str, &'static str>,
    unreachable: Option<&'static str>,
}

impl JsonSource for FixtureSource {
    fn fetch(&self, api: &str) -> Result<Vec<Value>> {
        if self.unreachable.is_some_and(|unreachable| unreachable == api) {
            return Err(Error::Body {
                url: api.to_owned(),
                source: io::Error::new(ErrorKind::TimedOut, "timed out"),
            });
        }

        parse_records(self.bodies.get(api).copied().unwrap_or("[]"), api)
    }
}

fn fixture_source() -> FixtureSource {
    let bodies = HashMap::from([
        (
            "GetShields",
            r#"[
                {"ItemCodeName": "X_SCITEM", "Size": 2, "ItemClass": "Military", "Grade": "A", "Type": "Shield"},
                {"ItemCodeName": "SHLD_SECRET_SCItem", "Size": 1, "ItemClass": "Civilian", "Grade": "D", "Type": "Shield"}
            ]"#,
        ),
        (
            "GetFoods",
            r#"[
                {"ItemCodeName": "Food_empty_tray", "Hunger": 0, "Thirst": 0},
                {"ItemCodeName": "Food_bar", "Hunger": 12, "Thirst": 0, "Description": "Effects: None\\n"}
            ]"#,
        ),
    ]);

    FixtureSource { bodies, unreachable: None }
}

fn write_file(path: &Path, content: &str) {
    create_dir_all(path.parent().unwrap()).unwrap();
    write(path, content).unwrap();
}

fn workspace() -> (TempDir, Settings) {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("text_files").join("4.4.0");
    let custom_dir = dir.path().join("custom");

    write_file(
        &input_dir.join("en.ini"),
        "\u{feff}ITEM_NAME_X=Widget\nITEM_NAME_SHLD_SECRET=Secret\nitem_NameFOOD_BAR=Bar\nitem_namefood_empty_tray=Tray\nPLAIN=Plain en\nONLY_EN=Only en\n",
    );
    write_file(
        &input_dir.join("cn.ini"),
        "ITEM_NAME_X=小工具\nITEM_NAME_SHLD_SECRET=秘密\nitem_NameFOOD_BAR=能量棒\nPLAIN=普通\nONLY_CN=仅中文\n",
    );
    write_file(
        &input_dir.join("global.ini"),
        "PLAIN=普通 Plain\n_starcitizen_doctor_localization_version=4.4.0_v1\nRENAMED=Old\n",
    );

    for category in ["ship_parts", "missile", "food_and_drink"] {
        write_file(&custom_dir.join("direct_id").join(format!("{category}.txt")), "");
        write_file(&custom_dir.join("ignore").join(format!("{category}.txt")), "");
        write_file(&custom_dir.join("replace_map").join(format!("{category}.txt")), "");
    }
    write_file(
        &custom_dir.join("replace_map").join("ship_parts.txt"),
        "Military=军\nCivilian=民\nShield=护盾\n",
    );
    write_file(&custom_dir.join("ignore").join("ship_parts.txt"), "SHLD_SECRET\n");
    write_file(
        &custom_dir.join("general_replace").join("fixes.ini"),
        "# renamed in this patch\nrenamed=New name\n",
    );

    let settings = Settings::default()
        .input_dir(input_dir)
        .custom_dir(custom_dir);

    (dir, settings)
}

fn run(settings: &Settings) -> (GenerationDriver, Vec<Ruleset>, String) {
    let mut driver =
        GenerationDriver::load(&settings.en_path(), &settings.cn_path(), &settings.ref_path()).unwrap();
    let rulesets = settings.rulesets(&fixture_source()).unwrap();
    driver.apply_all(&rulesets);

    let extra = [settings.version_entry(&driver)];
    driver.generate(&settings.output_path, &[], &extra).unwrap();

    let output = read_to_string(&settings.output_path).unwrap();
    (driver, rulesets, output)
}

#[test]
fn generates_merged_file() {
    let (_dir, settings) = workspace();
    let (_, _, output) = run(&settings);

    assert_eq!(
        output,
        [
            "ITEM_NAME_X=Widget [S2军A 小工具](护盾)",
            "ITEM_NAME_SHLD_SECRET=秘密",
            r"item_NameFOOD_BAR=Bar\n能量棒 NDR:12",
            "item_namefood_empty_tray=Tray",
            "PLAIN=普通 Plain",
            "ONLY_EN=Only en",
            "ONLY_CN=仅中文",
            "_starcitizen_doctor_localization_version=4.4.0_v1",
            "RENAMED=New name",
            "_starcitizen_doctor_localization_version=4.4.0_v1_ZapAug",
            "",
        ]
        .join("\n")
    );
}

#[test]
fn ignored_and_empty_items_never_become_candidates() {
    let (_dir, settings) = workspace();
    let (driver, rulesets, _) = run(&settings);

    let all_candidates: Vec<&str> = rulesets
        .iter()
        .flat_map(|ruleset| ruleset.candidate_id_sets())
        .flat_map(CandidateIdSet::iter)
        .collect();

    assert!(all_candidates.iter().all(|id| !id.contains("SHLD_SECRET")));
    assert!(all_candidates.iter().all(|id| !id.contains("EMPTY_TRAY")));
    assert_eq!(driver.corpus().result("ITEM_NAME_SHLD_SECRET"), None);
    assert_eq!(driver.corpus().result("item_namefood_empty_tray"), None);
}

#[test]
fn every_loaded_id_resolves_to_itself() {
    let (_dir, settings) = workspace();
    let driver =
        GenerationDriver::load(&settings.en_path(), &settings.cn_path(), &settings.ref_path()).unwrap();
    let resolver = driver.corpus().resolver();

    for id in driver.corpus().ids() {
        let ids = CandidateIdSet::single(id.to_lowercase());
        assert_eq!(resolver.resolve(&ids), Some(id));
        assert_eq!(resolver.resolve(&ids), resolver.resolve(&CandidateIdSet::single(id)));
    }
}

#[test]
fn reapplying_rulesets_changes_nothing() {
    let (_dir, settings) = workspace();
    let (mut driver, rulesets, _) = run(&settings);
    let results = driver.corpus().results().clone();

    let reports = driver.apply_all(&rulesets);

    assert_eq!(driver.corpus().results(), &results);
    assert!(reports.iter().all(|report| report.translated.is_empty()));
}

#[test]
fn lookup_reads_reference_text() {
    let (_dir, settings) = workspace();
    let (driver, _, _) = run(&settings);

    assert_eq!(
        driver.lookup("_STARCITIZEN_DOCTOR_LOCALIZATION_VERSION", TextField::Ref),
        Some("4.4.0_v1")
    );
    assert_eq!(driver.lookup("plain", TextField::En), Some("Plain en"));
}

#[test]
fn missing_override_file_aborts_ruleset_construction() {
    let (dir, settings) = workspace();
    std::fs::remove_file(dir.path().join("custom").join("ignore").join("missile.txt")).unwrap();

    assert!(matches!(
        settings.rulesets(&fixture_source()),
        Err(Error::Io { .. })
    ));
}

#[test]
fn unreachable_endpoint_aborts_ruleset_construction() {
    let (_dir, settings) = workspace();
    let source = FixtureSource { unreachable: Some("GetDrives"), ..fixture_source() };

    assert!(matches!(
        settings.rulesets(&source),
        Err(Error::Body { url, .. }) if url == "GetDrives"
    ));
}
