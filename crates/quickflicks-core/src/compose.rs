use std::sync::LazyLock;

use regex::Regex;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?] +").expect("static regex is valid"));

/// Join chunk summaries and split the result into flashcard sentences.
///
/// A sentence ends at `.`, `!` or `?` followed by one or more spaces. The
/// punctuation stays with its sentence, the spaces are dropped. Pieces are
/// trimmed and empty ones discarded; order is kept as given.
pub fn compose<I, S>(summaries: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut joined = String::new();
    for (index, summary) in summaries.into_iter().enumerate() {
        if index > 0 {
            joined.push(' ');
        }
        joined.push_str(summary.as_ref());
    }

    split_sentences(&joined)
        .into_iter()
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(str::to_string)
        .collect()
}

fn split_sentences(text: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        // the terminator is a single ASCII byte and stays with its sentence
        pieces.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    pieces.push(&text[start..]);

    pieces
}
