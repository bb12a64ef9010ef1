use crate::{
    corpus::{GenerateReport, TextCorpus},
    error::{Error, Result},
    ruleset::Ruleset,
    CandidateIdSet, StringHashSet, TextField,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Outcome of applying one ruleset.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub ruleset: &'static str,
    /// Canonical ids that received a result, in application order.
    pub translated: Vec<String>,
    /// Candidate sets that matched no id of the corpus.
    pub unresolved: Vec<CandidateIdSet>,
    /// Canonical ids left alone because an earlier application already translated them.
    pub skipped: Vec<String>,
    pub failed: Vec<(String, Error)>,
}

/// Owns the corpus for one generation run and is the only writer of its results.
#[derive(Debug)]
pub struct GenerationDriver {
    corpus: TextCorpus,
    processed: StringHashSet,
}

impl GenerationDriver {
    pub fn new(corpus: TextCorpus) -> Self {
        Self { corpus, processed: StringHashSet::default() }
    }

    pub fn load(en_path: &Path, cn_path: &Path, ref_path: &Path) -> Result<Self> {
        Ok(Self::new(TextCorpus::load(en_path, cn_path, ref_path)?))
    }

    pub fn corpus(&self) -> &TextCorpus {
        &self.corpus
    }

    pub fn is_processed(&self, canonical_id: &str) -> bool {
        self.processed.contains(canonical_id)
    }

    /// Translates every id the ruleset covers that no earlier application has translated.
    ///
    /// Failures are collected in the report; they never stop the remaining ids.
    pub fn apply(&mut self, ruleset: &Ruleset) -> ApplyReport {
        let mut report: ApplyReport = ApplyReport { ruleset: ruleset.name(), ..Default::default() };

        for ids in ruleset.candidate_id_sets() {
            let canonical: String = match self.corpus.resolver().resolve(ids) {
                Some(canonical) => canonical.to_owned(),
                None => {
                    report.unresolved.push(ids.clone());
                    continue;
                }
            };

            if self.is_processed(&canonical) {
                report.skipped.push(canonical);
                continue;
            }

            let translated: Result<String> = ruleset.translate(
                ids,
                self.corpus.get(&canonical, TextField::Cn),
                self.corpus.get(&canonical, TextField::En),
            );

            match translated {
                Ok(text) => {
                    tracing::debug!("{ids} -> {canonical}: {text}");
                    self.corpus.record_result(&canonical, text);
                    self.processed.insert(canonical.clone());
                    report.translated.push(canonical);
                }
                Err(err) => report.failed.push((canonical, err)),
            }
        }

        report
    }

    /// Applies rulesets in the given order. The first ruleset to translate an id keeps it.
    pub fn apply_all(&mut self, rulesets: &[Ruleset]) -> Vec<ApplyReport> {
        rulesets.iter().map(|ruleset: &Ruleset| self.apply(ruleset)).collect()
    }

    /// Writes the merged file to `output_path`.
    pub fn generate(
        &self,
        output_path: &Path,
        suffix_files: &[PathBuf],
        extra: &[(String, String)],
    ) -> Result<GenerateReport> {
        let file: File = File::create(output_path).map_err(|err| Error::io(output_path, err))?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        let report: GenerateReport = self
            .corpus
            .serialize(&mut writer, suffix_files, extra)
            .and_then(|report: GenerateReport| writer.flush().map(|()| report))
            .map_err(|err| Error::io(output_path, err))?;

        Ok(report)
    }

    /// Source text of an id by any casing, falling back to the id exactly as given.
    pub fn lookup(&self, id: &str, field: TextField) -> Option<&str> {
        let canonical: &str = self.corpus.resolver().resolve_one(id).unwrap_or(id);
        self.corpus.get(canonical, field)
    }
}
