mod mocks;

use std::num::NonZeroUsize;

use mocks::{summarizer::MockSummarizer, transcript_source::MockTranscriptSource};
use quickflicks_core::{Pipeline, PipelineConfig, QuickflicksError, SummaryParams, VideoId};

const URL: &str = "https://www.youtube.com/watch?v=qYNweeDHiyU&t=5";

fn build_pipeline(
    transcripts: MockTranscriptSource,
    summarizer: MockSummarizer,
    max_words: usize,
) -> Pipeline<MockTranscriptSource, MockSummarizer> {
    Pipeline::new(
        transcripts,
        summarizer,
        PipelineConfig {
            max_words: NonZeroUsize::new(max_words).unwrap(),
            summary: SummaryParams::default(),
        },
    )
}

// ─── Happy path ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_echo_model_returns_joined_transcript() {
    let transcripts = MockTranscriptSource::new(&["hello world", "foo bar"]);
    let summarizer = MockSummarizer::echo();
    let transcript_calls = transcripts.calls.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    let sentences = pipeline.summarize_video(URL).await.unwrap();

    assert_eq!(sentences, vec!["hello world foo bar"]);
    assert_eq!(
        *transcript_calls.lock().unwrap(),
        vec![VideoId::new("qYNweeDHiyU")]
    );
}

#[tokio::test]
async fn test_chunks_are_summarized_in_order() {
    let transcripts = MockTranscriptSource::new(&[
        "one two three.",
        "four five six!",
        "seven eight nine?",
    ]);
    let summarizer = MockSummarizer::echo();
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 3);
    let sentences = pipeline.summarize_video(URL).await.unwrap();

    assert_eq!(
        observer.chunks(),
        vec!["one two three.", "four five six!", "seven eight nine?"]
    );
    assert_eq!(
        sentences,
        vec!["one two three.", "four five six!", "seven eight nine?"]
    );
}

#[tokio::test]
async fn test_chunk_windows_cross_fragment_boundaries() {
    let transcripts = MockTranscriptSource::new(&["a b", "c d e", "f"]);
    let summarizer = MockSummarizer::echo();
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 4);
    pipeline.summarize_video(URL).await.unwrap();

    assert_eq!(observer.chunks(), vec!["a b c d", "e f"]);
}

#[tokio::test]
async fn test_summary_params_reach_the_model() {
    let transcripts = MockTranscriptSource::new(&["some words here"]);
    let summarizer = MockSummarizer::new("A summary.");
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    pipeline.summarize_video(URL).await.unwrap();

    let calls = observer.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0].1,
        SummaryParams {
            max_length: 100,
            min_length: 30,
            deterministic: true,
        }
    );
}

#[tokio::test]
async fn test_flashcards_carry_thumbnail() {
    let transcripts = MockTranscriptSource::new(&["ignored"]);
    let summarizer = MockSummarizer::new("Rust is fast. Rust is safe!");

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    let flashcards = pipeline
        .flashcards("https://youtu.be/qYNweeDHiyU")
        .await
        .unwrap();

    assert_eq!(flashcards.video_id, VideoId::new("qYNweeDHiyU"));
    assert_eq!(
        flashcards.thumbnail_url,
        "https://img.youtube.com/vi/qYNweeDHiyU/maxresdefault.jpg"
    );
    assert_eq!(flashcards.sentences, vec!["Rust is fast.", "Rust is safe!"]);
}

#[tokio::test]
async fn test_empty_transcript_makes_no_model_calls() {
    let transcripts = MockTranscriptSource::new(&[]);
    let summarizer = MockSummarizer::echo();
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    let sentences = pipeline.summarize_video(URL).await.unwrap();

    assert!(sentences.is_empty());
    assert!(observer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_pipeline_is_reusable_across_calls() {
    let transcripts = MockTranscriptSource::new(&["Same input. Same output."]);
    let summarizer = MockSummarizer::echo();

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    let first = pipeline.summarize_video(URL).await.unwrap();
    let second = pipeline.summarize_video(URL).await.unwrap();

    assert_eq!(first, second);
}

// ─── Failures ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_invalid_url_skips_transcript_fetch() {
    for url in ["not a url", "https://example.com/video"] {
        let transcripts = MockTranscriptSource::new(&["hello"]);
        let transcript_calls = transcripts.calls.clone();

        let pipeline = build_pipeline(transcripts, MockSummarizer::echo(), 500);
        let err = pipeline.summarize_video(url).await.unwrap_err();

        assert!(
            matches!(err, QuickflicksError::InvalidUrl { .. }),
            "unexpected error for {url}: {err:?}"
        );
        assert!(transcript_calls.lock().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_transcript_failure_skips_model() {
    let transcripts = MockTranscriptSource::failing("Transcripts are disabled for this video");
    let summarizer = MockSummarizer::echo();
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 500);
    let err = pipeline.summarize_video(URL).await.unwrap_err();

    match err {
        QuickflicksError::TranscriptUnavailable { video_id, reason } => {
            assert_eq!(video_id, "qYNweeDHiyU");
            assert!(reason.contains("disabled"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(observer.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_model_failure_aborts_without_partial_output() {
    let transcripts = MockTranscriptSource::new(&["a b c d e f"]);
    let summarizer = MockSummarizer::failing_on(1);
    let observer = summarizer.clone();

    let pipeline = build_pipeline(transcripts, summarizer, 2);
    let err = pipeline.summarize_video(URL).await.unwrap_err();

    assert!(matches!(err, QuickflicksError::Model { .. }));
    assert_eq!(
        observer.chunks(),
        vec!["a b", "c d"],
        "Chunks after the failing one must not be summarized"
    );
    assert!(err.to_string().contains("chunk 1"));
}
