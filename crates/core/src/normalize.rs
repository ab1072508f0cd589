use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Folds text into the form used for every catalog and keyword comparison:
/// lowercase, compatibility-decomposed, combining marks removed, trimmed.
pub fn normalize_text(input: &str) -> String {
    let folded = input
        .trim()
        .nfkd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .filter(|ch| !is_combining_mark(*ch))
        .collect::<String>();

    folded.trim().to_string()
}

pub(crate) fn contains_any<S: AsRef<str>>(input: &str, needles: &[S]) -> bool {
    needles.iter().any(|needle| input.contains(needle.as_ref()))
}
