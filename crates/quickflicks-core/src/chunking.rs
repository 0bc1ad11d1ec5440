use std::num::NonZeroUsize;
use std::str::SplitWhitespace;

/// Lazily splits text into chunks of at most `max_words` words.
///
/// Holds only a cursor into the borrowed text. Calling [`chunk_words`] again
/// re-derives the same partition, and clones continue independently.
#[derive(Debug, Clone)]
pub struct WordChunks<'a> {
    words: SplitWhitespace<'a>,
    max_words: usize,
}

impl Iterator for WordChunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let mut chunk = String::new();
        for word in self.words.by_ref().take(self.max_words) {
            if !chunk.is_empty() {
                chunk.push(' ');
            }
            chunk.push_str(word);
        }
        (!chunk.is_empty()).then_some(chunk)
    }
}

/// Split `text` on whitespace into consecutive windows of `max_words` words.
///
/// The last chunk may be shorter. Empty text yields no chunks.
pub fn chunk_words(text: &str, max_words: NonZeroUsize) -> WordChunks<'_> {
    WordChunks {
        words: text.split_whitespace(),
        max_words: max_words.get(),
    }
}
