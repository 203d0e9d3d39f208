use std::fs;
use std::path::PathBuf;

use tag_core::extract::{extract_tags, normalize_token, ExtractError, FrequencyMap, TagExtractor};
use tag_core::stopwords::StopWordSet;
use tag_core::types::SourceVersion;
use tempfile::tempdir;

fn write_doc(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn scenario_stop_words_and_punctuation_filtered() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "The Cat sat on the MAT.");
    let stops = StopWordSet::from_words(&["the", "on"]);

    let tags = extract_tags(&doc, &stops).unwrap();

    assert_eq!(tags.len(), 3);
    assert_eq!(tags.count("cat"), 1);
    assert_eq!(tags.count("sat"), 1);
    assert_eq!(tags.count("mat"), 1);
}

#[test]
fn scenario_case_and_punctuation_variants_collapse() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "dog dog DOG! dog?");
    let stops = StopWordSet::from_words(&[]);

    let tags = extract_tags(&doc, &stops).unwrap();

    assert_eq!(tags.len(), 1);
    assert_eq!(tags.count("dog"), 4);
}

#[test]
fn scenario_digits_and_punctuation_only_yield_empty_map() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "123 ... 456!");
    let stops = StopWordSet::from_words(&[]);

    let tags = extract_tags(&doc, &stops).unwrap();

    assert!(tags.is_empty());
}

#[test]
fn invariant_keys_are_nonempty_lowercase_ascii_and_not_stop_words() {
    let dir = tempdir().unwrap();
    let doc = write_doc(
        &dir,
        "doc.txt",
        "Hello, wörld! The answer is 42 -- isn't it? café\nSecond LINE here.\n",
    );
    let stops = StopWordSet::from_words(&["the", "is", "it"]);

    let tags = extract_tags(&doc, &stops).unwrap();

    for (tag, count) in tags.iter() {
        assert!(!tag.is_empty());
        assert!(tag.chars().all(|c| c.is_ascii_lowercase()), "bad tag {tag:?}");
        assert!(!stops.contains(tag), "stop word leaked: {tag:?}");
        assert!(*count >= 1);
    }
}

#[test]
fn invariant_total_count_equals_surviving_tokens() {
    let dir = tempdir().unwrap();
    // 9 whitespace-delimited tokens: "the"(stop) "cat"(kept) "sat"(kept)
    // "123"(empty) "on"(stop) "..."(empty) "the"(stop) "mat"(kept) "mat,"(kept)
    let doc = write_doc(&dir, "doc.txt", "the cat sat 123 on ... the mat mat,");
    let stops = StopWordSet::from_words(&["the", "on"]);

    let result = TagExtractor::new(&stops).extract(&doc).unwrap();

    assert_eq!(result.summary.tokens_seen, 9);
    assert_eq!(result.summary.tokens_stopped, 3);
    assert_eq!(result.summary.tokens_empty, 2);
    assert_eq!(result.summary.total_count, 4);
    assert_eq!(result.tags.total(), 4);
    assert_eq!(result.tags.count("mat"), 2);
}

#[test]
fn invariant_extraction_is_idempotent() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "alpha beta Alpha GAMMA beta beta\n");
    let stops = StopWordSet::from_words(&["gamma"]);

    let first = extract_tags(&doc, &stops).unwrap();
    let second = extract_tags(&doc, &stops).unwrap();

    assert_eq!(first, second);
}

#[test]
fn normalization_strips_everything_outside_ascii_letters() {
    assert_eq!(normalize_token("don't"), "dont");
    assert_eq!(normalize_token("123"), "");
    assert_eq!(normalize_token("Cat."), "cat");
    assert_eq!(normalize_token("café"), "caf");
    assert_eq!(normalize_token("naïve"), "nave");
    assert_eq!(normalize_token("..."), "");
    assert_eq!(normalize_token("MiXeD42cAsE"), "mixedcase");
}

#[test]
fn empty_tokens_are_discarded_even_when_stop_set_has_empty_entry() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "... 42 cat");
    // A blank stop-word line produces an empty entry; it must not matter.
    let stops = StopWordSet::from_content("the\n\n");
    assert!(stops.contains(""));

    let result = TagExtractor::new(&stops).extract(&doc).unwrap();

    assert_eq!(result.summary.tokens_empty, 2);
    assert_eq!(result.summary.tokens_stopped, 0);
    assert_eq!(result.tags.count("cat"), 1);
}

#[test]
fn stop_entry_with_punctuation_never_matches_a_tag() {
    let dir = tempdir().unwrap();
    let doc = write_doc(&dir, "doc.txt", "don't don't");
    // Stop words are folded line-verbatim, never ASCII-filtered, so this
    // entry cannot match the normalized tag "dont".
    let stops = StopWordSet::from_words(&["don't"]);

    let tags = extract_tags(&doc, &stops).unwrap();

    assert_eq!(tags.count("dont"), 2);
}

#[test]
fn summary_records_provenance_of_the_run() {
    let dir = tempdir().unwrap();
    let content = "one two\nthree\n";
    let doc = write_doc(&dir, "doc.txt", content);
    let stops = StopWordSet::from_words(&["two"]);

    let result = TagExtractor::new(&stops).extract(&doc).unwrap();

    assert_eq!(result.summary.document, doc.display().to_string());
    assert_eq!(
        result.summary.document_version,
        SourceVersion::from_content(content.as_bytes())
    );
    assert_eq!(result.summary.stop_words, 1);
    assert_eq!(result.summary.lines_read, 2);
    assert_eq!(result.summary.distinct_tags, 2);
}

#[test]
fn missing_document_fails_with_io_error() {
    let dir = tempdir().unwrap();
    let doc = dir.path().join("does_not_exist.txt");
    let stops = StopWordSet::from_words(&[]);

    let result = extract_tags(&doc, &stops);

    assert!(matches!(result, Err(ExtractError::Io(_))));
}

#[test]
fn merge_sums_counts_per_key() {
    let mut left = FrequencyMap::new();
    left.increment("cat");
    left.increment("cat");
    left.increment("dog");

    let mut right = FrequencyMap::new();
    right.increment("cat");
    right.increment("bird");

    left.merge(right);

    assert_eq!(left.count("cat"), 3);
    assert_eq!(left.count("dog"), 1);
    assert_eq!(left.count("bird"), 1);
    assert_eq!(left.total(), 5);
}
