use super::IdSetCollection;
use crate::{
    error::{Error, Result},
    functions::{read_text_lossy, split_entry},
    CandidateIdSet, StringHashMap,
};
use std::{
    ffi::OsStr,
    fs::read_dir,
    path::{Path, PathBuf},
};

/// Literal `id=text` overrides read from a folder of `.ini` files.
#[derive(Debug, Default)]
pub struct GeneralReplace {
    sets: IdSetCollection,
    texts: StringHashMap,
}

impl GeneralReplace {
    pub const FOLDER: &'static str = "general_replace";

    /// Reads every `.ini` file of `folder` in file name order. Later files win on duplicate ids.
    pub fn load(folder: &Path) -> Result<Self> {
        let mut files: Vec<PathBuf> = Vec::new();

        for entry in read_dir(folder).map_err(|err| Error::io(folder, err))? {
            let path: PathBuf = entry.map_err(|err| Error::io(folder, err))?.path();

            if path.is_file() && path.extension() == Some(OsStr::new("ini")) {
                files.push(path);
            }
        }

        files.sort();

        let mut ruleset: GeneralReplace = GeneralReplace::default();

        for file in files {
            let content: String = read_text_lossy(&file)?;
            ruleset.extend(&content);
            tracing::debug!("read replacements from {}", file.display());
        }

        Ok(ruleset)
    }

    /// Registers the entries of one file's content.
    pub fn extend(&mut self, content: &str) {
        for line in content.lines() {
            // Whole-line comments only: an id starting with `#` still counts once it has an `=`.
            if (line.starts_with('#') || line.is_empty()) && !line.contains('=') {
                continue;
            }

            let (id, text) = split_entry(line).unwrap_or((line, ""));
            self.insert(id, text);
        }
    }

    pub fn insert(&mut self, id: &str, text: &str) {
        let key: String = id.to_uppercase();

        self.sets.insert(CandidateIdSet::single(key.clone()));
        self.texts.insert(key, text.to_owned());
    }

    pub fn sets(&self) -> &IdSetCollection {
        &self.sets
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.texts.get(&id.to_uppercase()).map(String::as_str)
    }

    /// The stored text of the first candidate. Source texts play no part.
    pub fn translate(&self, ids: &CandidateIdSet) -> Result<String> {
        self.get(ids.first())
            .map(str::to_owned)
            .ok_or_else(|| Error::UnregisteredId(ids.first().to_owned()))
    }
}
