use crate::types::Flashcards;

/// Format flashcards as human-readable markdown
pub fn format_flashcards(flashcards: &Flashcards) -> String {
    let mut output = String::new();

    output.push_str(&format!("# Flashcard Summary ({})\n\n", flashcards.video_id));
    output.push_str(&format!("**Thumbnail:** {}\n\n", flashcards.thumbnail_url));

    if flashcards.sentences.is_empty() {
        output.push_str("_No summary could be produced for this transcript._\n");
        return output;
    }

    let total = flashcards.sentences.len();
    for (i, sentence) in flashcards.sentences.iter().enumerate() {
        output.push_str(&format!("## Card {}/{}\n\n", i + 1, total));
        output.push_str(&format!("{}\n\n", sentence));
    }

    output
}
