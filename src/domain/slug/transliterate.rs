use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

const GREEK: &str = "ΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩαβγδεζηθικλμνξοπρστυφχψω";
// Index aligned with GREEK. Θ→8 and Η,Ι→I are kept for URL compatibility.
const LATIN: &str = "ABGDEZI8IKLMNJOPRSTUFXYWabgdezi8iklmnjoprstufxyw";

static GREEK_TO_LATIN: Lazy<HashMap<char, char>> =
    Lazy::new(|| GREEK.chars().zip(LATIN.chars()).collect());

static NON_SPACING_MARK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Mn}").expect("non-spacing mark pattern is valid"));

/// Strips diacritics and replaces Greek letters with their Latin
/// counterparts. Characters outside the Greek alphabet pass through.
pub fn transliterate(input: &str) -> String {
    let decomposed: String = input.nfd().collect();
    let stripped = NON_SPACING_MARK.replace_all(&decomposed, "");

    stripped
        .nfc()
        .map(|ch| GREEK_TO_LATIN.get(&ch).copied().unwrap_or(ch))
        .collect()
}
