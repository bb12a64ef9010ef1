use crate::{
    error::Result,
    ruleset::{Bomb, FoodAndDrink, GeneralReplace, JsonSource, Missile, Ruleset, RulesetOverrides, ShipParts},
    statics::DEFAULT_BASE_URL,
    GenerationDriver, TextField,
};
use std::path::{Path, PathBuf};

pub const VERSION: &str = "4.4.0";
pub const VERSION_KEY: &str = "_starcitizen_doctor_localization_version";
pub const VERSION_SUFFIX: &str = "_ZapAug";

pub const EN_FILE_NAME: &str = "en.ini";
pub const CN_FILE_NAME: &str = "cn.ini";
pub const REF_FILE_NAME: &str = "global.ini";
pub const OUTPUT_FILE_NAME: &str = "output.ini";

/// Everything one generation run needs to know. The defaults describe the current game version.
#[derive(Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub input_dir: PathBuf,
    pub output_path: PathBuf,
    pub custom_dir: PathBuf,
    pub base_url: String,
    pub suffix_files: Vec<PathBuf>,
    pub version_key: String,
    pub version_suffix: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(VERSION)
    }
}

impl Settings {
    pub fn new(version: &str) -> Self {
        let input_dir: PathBuf = Path::new("text_files").join(version);

        Self {
            version: version.to_owned(),
            output_path: input_dir.join(OUTPUT_FILE_NAME),
            input_dir,
            custom_dir: PathBuf::from("custom"),
            base_url: DEFAULT_BASE_URL.to_owned(),
            suffix_files: Vec::new(),
            version_key: VERSION_KEY.to_owned(),
            version_suffix: VERSION_SUFFIX.to_owned(),
        }
    }

    /// Sets the input directory; the output follows it unless it was set explicitly afterwards.
    pub fn input_dir(mut self, input_dir: PathBuf) -> Self {
        self.output_path = input_dir.join(OUTPUT_FILE_NAME);
        self.input_dir = input_dir;
        self
    }

    pub fn output_path(mut self, output_path: PathBuf) -> Self {
        self.output_path = output_path;
        self
    }

    pub fn custom_dir(mut self, custom_dir: PathBuf) -> Self {
        self.custom_dir = custom_dir;
        self
    }

    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn suffix_files(mut self, suffix_files: Vec<PathBuf>) -> Self {
        self.suffix_files = suffix_files;
        self
    }

    pub fn en_path(&self) -> PathBuf {
        self.input_dir.join(EN_FILE_NAME)
    }

    pub fn cn_path(&self) -> PathBuf {
        self.input_dir.join(CN_FILE_NAME)
    }

    pub fn ref_path(&self) -> PathBuf {
        self.input_dir.join(REF_FILE_NAME)
    }

    /// Builds the rulesets of a full run in the order they take priority.
    ///
    /// Every remote category is grabbed here, so any network failure aborts the whole list.
    pub fn rulesets(&self, source: &dyn JsonSource) -> Result<Vec<Ruleset>> {
        Ok(vec![
            Ruleset::GeneralReplace(GeneralReplace::load(&self.custom_dir.join(GeneralReplace::FOLDER))?),
            Ruleset::FoodAndDrink(FoodAndDrink::grab(
                source,
                RulesetOverrides::load(&self.custom_dir, FoodAndDrink::CATEGORY)?,
            )?),
            Ruleset::Missile(Missile::grab(
                source,
                RulesetOverrides::load(&self.custom_dir, Missile::CATEGORY)?,
            )?),
            Ruleset::ShipParts(ShipParts::grab(
                source,
                RulesetOverrides::load(&self.custom_dir, ShipParts::CATEGORY)?,
            )?),
            Ruleset::Bomb(Bomb::new()),
        ])
    }

    /// The trailing entry that tags the output with the reference version plus our suffix.
    pub fn version_entry(&self, driver: &GenerationDriver) -> (String, String) {
        let reference: &str = driver.lookup(&self.version_key, TextField::Ref).unwrap_or(self.version.as_str());
        (self.version_key.clone(), format!("{reference}{}", self.version_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TextCorpus;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_paths() {
        let settings = Settings::default();

        assert_eq!(settings.en_path(), Path::new("text_files/4.4.0/en.ini"));
        assert_eq!(settings.ref_path(), Path::new("text_files/4.4.0/global.ini"));
        assert_eq!(settings.output_path, Path::new("text_files/4.4.0/output.ini"));
    }

    #[test]
    fn test_input_dir_moves_output() {
        let settings = Settings::default().input_dir(PathBuf::from("elsewhere"));

        assert_eq!(settings.cn_path(), Path::new("elsewhere/cn.ini"));
        assert_eq!(settings.output_path, Path::new("elsewhere/output.ini"));
    }

    #[test]
    fn test_version_entry() {
        let settings = Settings::default();
        let tagged = GenerationDriver::new(TextCorpus::from_sources(
            "",
            "",
            "_starcitizen_doctor_localization_version=4.4.0_v2\n",
        ));
        let untagged = GenerationDriver::new(TextCorpus::default());

        assert_eq!(
            settings.version_entry(&tagged),
            (String::from(VERSION_KEY), String::from("4.4.0_v2_ZapAug"))
        );
        assert_eq!(settings.version_entry(&untagged).1, "4.4.0_ZapAug");
    }
}
