use wortwirbel_core::CoreError;

/// Umlaut and eszett transliterations, applied in order after lowercasing.
/// The uppercase pairs can no longer match at that point; they are kept so
/// the table stays identical to the published mapping.
const REPLACEMENTS: &[(char, &str)] = &[
    ('ä', "ae"),
    ('ö', "oe"),
    ('ü', "ue"),
    ('ß', "ss"),
    ('Ä', "Ae"),
    ('Ö', "Oe"),
    ('Ü', "Ue"),
];

/// Map a headword to a lowercase ASCII identifier usable as a file name.
pub fn filename_stem(word: &str) -> Result<String, CoreError> {
    let mut stem = word.to_lowercase();
    for (from, to) in REPLACEMENTS {
        stem = stem.replace(*from, to);
    }

    stem.retain(|c| c.is_ascii_lowercase() || c.is_ascii_digit());

    if stem.is_empty() {
        return Err(CoreError::EmptyFilename(word.to_string()));
    }

    Ok(stem)
}
