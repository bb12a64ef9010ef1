use crate::{
    error::{Error, Result},
    functions::{read_text_lossy, split_entry},
    IdResolver, StringHashMap, StringHashSet, TextField,
};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

/// What happened while the corpus was written out.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Number of `id=text` lines written for corpus ids.
    pub written: usize,
    /// Ids that had neither a result nor any source text.
    pub omitted: Vec<String>,
    pub skipped_suffix_files: Vec<(PathBuf, Error)>,
}

/// All loaded EN/CN/reference text plus the results rendered by rulesets.
#[derive(Debug, Default)]
pub struct TextCorpus {
    ids: StringHashSet,
    resolver: IdResolver,
    en: StringHashMap,
    cn: StringHashMap,
    reference: StringHashMap,
    results: StringHashMap,
}

impl TextCorpus {
    /// Loads the three sources from disk in EN, CN, reference order.
    pub fn load(en_path: &Path, cn_path: &Path, ref_path: &Path) -> Result<Self> {
        let mut corpus: TextCorpus = TextCorpus::default();

        for (field, path) in [
            (TextField::En, en_path),
            (TextField::Cn, cn_path),
            (TextField::Ref, ref_path),
        ] {
            let content: String = read_text_lossy(path)?;
            let count: usize = corpus.extend(field, &content);
            tracing::debug!("loaded {count} entries from {}", path.display());
        }

        Ok(corpus)
    }

    /// Builds a corpus from already decoded source texts.
    pub fn from_sources(en: &str, cn: &str, reference: &str) -> Self {
        let mut corpus: TextCorpus = TextCorpus::default();

        corpus.extend(TextField::En, en);
        corpus.extend(TextField::Cn, cn);
        corpus.extend(TextField::Ref, reference);

        corpus
    }

    /// Adds every `id=text` line of `content` to the given source and returns how many were read.
    fn extend(&mut self, field: TextField, content: &str) -> usize {
        let mut count: usize = 0;

        for line in content.lines() {
            let Some((id, text)) = split_entry(line) else {
                continue;
            };

            if self.resolver.insert(id) {
                self.ids.insert(id.to_owned());
            }

            let canonical: String = match self.resolver.resolve_one(id) {
                Some(canonical) => canonical.to_owned(),
                None => continue,
            };

            let source: &mut StringHashMap = self.source_mut(field);

            // A case variant never replaces text that its canonical spelling already provided.
            if id == canonical || !source.contains_key(&canonical) {
                source.insert(canonical, text.to_owned());
            }

            count += 1;
        }

        count
    }

    fn source(&self, field: TextField) -> &StringHashMap {
        match field {
            TextField::En => &self.en,
            TextField::Cn => &self.cn,
            TextField::Ref => &self.reference,
        }
    }

    fn source_mut(&mut self, field: TextField) -> &mut StringHashMap {
        match field {
            TextField::En => &mut self.en,
            TextField::Cn => &mut self.cn,
            TextField::Ref => &mut self.reference,
        }
    }

    pub fn resolver(&self) -> &IdResolver {
        &self.resolver
    }

    /// Canonical ids in load order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn get(&self, canonical_id: &str, field: TextField) -> Option<&str> {
        self.source(field).get(canonical_id).map(String::as_str)
    }

    pub fn result(&self, canonical_id: &str) -> Option<&str> {
        self.results.get(canonical_id).map(String::as_str)
    }

    pub fn results(&self) -> &StringHashMap {
        &self.results
    }

    pub fn record_result(&mut self, canonical_id: &str, text: String) {
        self.results.insert(canonical_id.to_owned(), text);
    }

    /// Text emitted for an id: its result, else the reference text, else whatever source has it.
    pub fn output_text(&self, canonical_id: &str) -> Option<&str> {
        self.result(canonical_id).or_else(|| {
            [TextField::Ref, TextField::Cn, TextField::En]
                .into_iter()
                .find_map(|field: TextField| self.get(canonical_id, field))
        })
    }

    /// Writes one line per id in load order, then suffix file contents, then `extra` entries.
    ///
    /// Unreadable suffix files are reported and skipped.
    pub fn serialize<W: Write>(
        &self,
        writer: &mut W,
        suffix_files: &[PathBuf],
        extra: &[(String, String)],
    ) -> io::Result<GenerateReport> {
        let mut report: GenerateReport = GenerateReport::default();

        for id in &self.ids {
            match self.output_text(id) {
                Some(text) => {
                    writeln!(writer, "{id}={text}")?;
                    report.written += 1;
                }
                None => report.omitted.push(id.clone()),
            }
        }

        for suffix_file in suffix_files {
            match read_text_lossy(suffix_file) {
                Ok(content) => writer.write_all(content.as_bytes())?,
                Err(err) => report.skipped_suffix_files.push((suffix_file.clone(), err)),
            }
        }

        for (id, text) in extra {
            writeln!(writer, "{id}={text}")?;
        }

        Ok(report)
    }
}
