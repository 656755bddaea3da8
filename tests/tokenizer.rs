use rq::document::{display_width, is_word_separator, Document};

fn words(text: &[u8]) -> Vec<Vec<u8>> {
    let doc = Document::from_bytes(text.to_vec());
    (0..doc.len()).filter_map(|i| doc.text(i)).map(<[u8]>::to_vec).collect()
}

fn flags(text: &str) -> Vec<bool> {
    let doc = Document::from_bytes(text.as_bytes().to_vec());
    (0..doc.len()).filter_map(|i| doc.word(i)).map(|word| word.reverse_video()).collect()
}

/// Collapse every whitespace run to one space and trim the ends.
fn collapse(text: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    for chunk in text.split(|&b| is_word_separator(b)).filter(|c| !c.is_empty()) {
        if !out.is_empty() {
            out.push(b' ');
        }
        out.extend_from_slice(chunk);
    }
    out
}

#[test]
fn joined_words_match_collapsed_text() {
    let samples: &[&[u8]] = &[
        b"The quick  brown\tfox\n\njumps.",
        b"   leading and trailing   ",
        b"line\r\nbreaks\x0bvertical\x0cfeed",
        "ünïcödé wörds ¿qué?".as_bytes(),
        b"\x1b[31mred\x1b[0m text",
        b"single",
    ];

    for sample in samples {
        let joined = words(sample).join(&b' ');
        assert_eq!(joined, collapse(sample), "sample {:?}", String::from_utf8_lossy(sample));
    }
}

#[test]
fn blank_inputs_have_no_words() {
    for sample in [&b""[..], b" ", b"\n\n\n", b"\t \r\n\x0b\x0c"] {
        assert!(Document::from_bytes(sample.to_vec()).is_empty());
    }
}

#[test]
fn highlight_follows_adjacent_repeats() {
    assert_eq!(flags("a a a b a"), vec![false, true, false, false, false]);
    assert_eq!(flags("x x x x"), vec![false, true, false, true]);
    assert_eq!(flags("x y x y"), vec![false; 4]);
    assert_eq!(flags("the the\nthe"), vec![false, true, false]);
}

#[test]
fn first_word_is_never_highlighted() {
    for text in ["a", "a a", "b a a"] {
        assert_eq!(flags(text).first(), Some(&false));
    }
}

#[test]
fn escape_sequences_stay_inside_words() {
    let doc = Document::from_bytes(b"\x1b[7mbold".to_vec());
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.text(0), Some(&b"\x1b[7mbold"[..]));
}

#[test]
fn display_width_counts_code_points() {
    assert_eq!(display_width("naïve".as_bytes()), 5);
    assert_eq!(display_width("€".as_bytes()), 1);
}
