//! Public API behaviour of `bazinga-types`, as consumed by other crates.

use bazinga_types::{
    Bazingafier, MARKER, Segment, VowelSet, bazingafy, bazingafy_with, count_vowel_runs,
    segments,
};

#[test]
fn documented_scenarios() {
    let cases = [
        ("", ""),
        ("t", "t"),
        ("a", "bazinga"),
        ("qa", "qbazinga"),
        ("her", "hbazingar"),
        ("bear", "bbazingar"),
        ("aeiou", "bazinga"),
    ];
    for (input, expected) in cases {
        assert_eq!(bazingafy(input), expected, "input: {input:?}");
    }
}

#[test]
fn markers_match_segment_runs() {
    let word = "onomatopoeia";
    let runs = count_vowel_runs(word, VowelSet::AsciiLowercase);
    assert_eq!(runs, 5);
    assert_eq!(bazingafy(word).matches(MARKER).count(), runs);
}

#[test]
fn segments_reassemble_input() {
    let word = "sequoia trees, über-cool";
    let rebuilt: String = segments(word, VowelSet::AsciiLowercase)
        .map(|seg| match seg {
            Segment::Literal(c) => c.to_string(),
            Segment::VowelRun(run) => run.to_string(),
        })
        .collect();
    assert_eq!(rebuilt, word);
}

#[test]
fn bazingafier_matches_free_functions() {
    let lower = Bazingafier::new(VowelSet::AsciiLowercase);
    let folded = Bazingafier::new(VowelSet::AsciiCaseInsensitive);
    for word in ["Idea", "OUTAGE", "strength", "aa bb"] {
        assert_eq!(lower.apply(word), bazingafy(word));
        assert_eq!(
            folded.apply(word),
            bazingafy_with(word, VowelSet::AsciiCaseInsensitive)
        );
    }
}

#[test]
fn safe_to_share_across_threads() {
    let bazingafier = Bazingafier::default();
    let handles: Vec<_> = ["bear", "her", "qa"]
        .into_iter()
        .map(|word| std::thread::spawn(move || bazingafier.apply(word).into_owned()))
        .collect();
    let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results, ["bbazingar", "hbazingar", "qbazinga"]);
}
