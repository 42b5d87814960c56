/// Returns `true` for characters that may appear in a slug.
pub const fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || is_separator(ch)
}

pub const fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_')
}

/// Reduces `input` to a URL safe token.
///
/// Spaces become dashes, anything outside `A-Z a-z 0-9 - _` is dropped, and
/// a separator is suppressed when the raw input repeats at its index.
///
/// The index used for that comparison is the position in the *filtered*
/// sequence while the characters compared come from `input` as given, before
/// spaces are replaced. When nothing is filtered and there are no spaces the
/// two line up and runs of the same separator collapse to one. Otherwise
/// separators can survive side by side: `"a-!-b"` gives `"a--b"` and
/// `"a - b"` gives `"a---b"`.
pub fn slugify(input: &str) -> String {
    let raw: Vec<char> = input.chars().collect();

    raw.iter()
        .map(|&ch| if ch == ' ' { '-' } else { ch })
        .filter(|&ch| is_allowed(ch))
        .enumerate()
        .filter(|&(index, ch)| !(is_separator(ch) && repeats_at(&raw, index)))
        .map(|(_, ch)| ch)
        .collect()
}

fn repeats_at(source: &[char], index: usize) -> bool {
    matches!(
        (source.get(index), source.get(index + 1)),
        (Some(current), Some(next)) if current == next
    )
}
