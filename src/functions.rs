use crate::{
    error::{Error, Result},
    statics::{BOM, PLACEHOLDER_CHAR, SUFFIX_SCITEM},
    StringHashMap, StringHashSet,
};
use encoding_rs::{Decoder, DecoderResult};
use std::{fs::read, path::Path};

/// Groups the digits of an integer by thousands, `27000` becomes `27,000`.
pub fn format_int(number: i64) -> String {
    let digits: String = number.unsigned_abs().to_string();
    let mut result: String = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if number < 0 {
        result.push('-');
    }

    for (i, char) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }

        result.push(char);
    }

    result
}

/// Reads a whole text file as UTF-8 without ever failing on its contents.
///
/// A leading BOM is dropped and every malformed sequence ends up as a single [`PLACEHOLDER_CHAR`].
pub fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes: Vec<u8> = read(path).map_err(|err| Error::io(path, err))?;
    let (text, malformed) = decode_lossy(&bytes);

    if malformed != 0 {
        tracing::debug!("{} contains {malformed} malformed UTF-8 sequences", path.display());
    }

    Ok(text)
}

/// Decodes UTF-8, substituting [`PLACEHOLDER_CHAR`] for each malformed sequence only.
/// `U+FFFD` characters that are validly encoded in the input are kept.
fn decode_lossy(bytes: &[u8]) -> (String, usize) {
    let mut decoder: Decoder = encoding_rs::UTF_8.new_decoder_with_bom_removal();
    let mut text: String = String::with_capacity(bytes.len());
    let mut input: &[u8] = bytes;
    let mut malformed: usize = 0;

    loop {
        let (result, read) = decoder.decode_to_string_without_replacement(input, &mut text, true);
        input = &input[read..];

        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => text.reserve(
                decoder
                    .max_utf8_buffer_length_without_replacement(input.len())
                    .unwrap_or(input.len()),
            ),
            DecoderResult::Malformed(..) => {
                malformed += 1;
                text.push(PLACEHOLDER_CHAR);
            }
        }
    }

    (text, malformed)
}

/// Splits an `id=text` line on its first `=`. The id loses any BOM it carries.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once('=')
        .map(|(id, text): (&str, &str)| (id.trim_start_matches(BOM), text))
}

/// Reads a `key=value` file (special ids, replace maps) into an ordered map. Later keys win.
pub fn read_key_value_file(path: &Path) -> Result<StringHashMap> {
    let content: String = read_text_lossy(path)?;
    let mut map: StringHashMap = StringHashMap::default();

    for line in content.lines() {
        if let Some((key, value)) = split_entry(line) {
            map.insert(key.to_owned(), value.to_owned());
        }
    }

    Ok(map)
}

/// Reads a file holding one id per line, blank lines excluded.
pub fn read_id_list(path: &Path) -> Result<StringHashSet> {
    let content: String = read_text_lossy(path)?;

    Ok(content
        .lines()
        .map(|line: &str| line.trim_start_matches(BOM).trim_end())
        .filter(|line: &&str| !line.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Turns a remote item code name into the base id every candidate spelling is built from.
pub fn normalize_codename(codename: &str) -> String {
    let upper: String = codename.to_uppercase();
    let trimmed: &str = upper.strip_suffix(SUFFIX_SCITEM).unwrap_or(&upper);
    trimmed.strip_suffix('_').unwrap_or(trimmed).to_owned()
}

/// The four spellings the game uses for an item name with the given prefix.
pub fn prefixed_candidates(prefix: &str, base_id: &str) -> [String; 4] {
    [
        format!("{prefix}{base_id}"),
        format!("{prefix}_{base_id}"),
        format!("{prefix}{base_id}_{SUFFIX_SCITEM}"),
        format!("{prefix}_{base_id}_{SUFFIX_SCITEM}"),
    ]
}
