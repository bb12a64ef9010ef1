use once_cell::sync::Lazy;
use regex::Regex;

/// Captures the comma-separated effect list of a consumable description, which ends at the escaped newline
/// (a real newline or the end of the text also terminate it).
pub static EFFECTS_RE: Lazy<Regex> =
    Lazy::new(|| unsafe { Regex::new(r"Effects?\s*:\s*(.*?)(?:\\n|\r?\n|$)").unwrap_unchecked() });

/// Line break as it is written inside the game's text values, not a real newline.
pub static NEW_LINE: &str = r"\n";
pub static BOM: char = '\u{feff}';
pub static PLACEHOLDER_CHAR: char = ' ';

pub static PREFIX_ITEM_NAME: &str = "ITEM_NAME";
pub static PREFIX_COMMODITIES: &str = "items_commodities";
pub static PREFIX_HARVESTABLE: &str = "HARVESTABLE_";
pub static SUFFIX_SCITEM: &str = "SCITEM";

pub static DEFAULT_BASE_URL: &str = "https://finder.cstone.space";
