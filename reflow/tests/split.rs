use reflow::{split_massive_block, split_paragraphs};

#[test]
fn short_text_is_untouched() {
    assert_eq!(split_massive_block("short", 450), "short");
    let exactly = "x".repeat(450);
    assert_eq!(split_massive_block(&exactly, 450), exactly);
}

#[test]
fn splits_at_sentence_end() {
    let text = format!("{}. {}", "a".repeat(419), "b".repeat(179));
    assert_eq!(text.chars().count(), 600);

    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs, vec![format!("{}.", "a".repeat(419)), "b".repeat(179)]);
    assert_eq!(split.forced, 0);
}

#[test]
fn every_terminator_counts() {
    for (mark, gap) in [('.', ' '), ('!', ' '), ('?', ' '), ('.', '\n'), ('!', '\n'), ('?', '\n')] {
        let text = format!("{}{}{}{}", "a".repeat(299), mark, gap, "b".repeat(300));
        let split = split_paragraphs(&text, 450, 100);
        assert_eq!(
            split.paragraphs,
            vec![format!("{}{}", "a".repeat(299), mark), "b".repeat(300)],
            "terminator {:?}{:?}",
            mark,
            gap
        );
    }
}

#[test]
fn latest_terminator_wins() {
    let text = format!(
        "{}? {}! {}",
        "a".repeat(199),
        "b".repeat(199),
        "c".repeat(300)
    );
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs[0], format!("{}? {}!", "a".repeat(199), "b".repeat(199)));
    assert_eq!(split.paragraphs[1], "c".repeat(300));
}

#[test]
fn terminator_starting_at_threshold() {
    let text = format!("{}. {}", "a".repeat(450), "b".repeat(100));
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs, vec![format!("{}.", "a".repeat(450)), "b".repeat(100)]);
}

#[test]
fn repeated_splitting() {
    let sentence = format!("{}.", "x".repeat(98));
    let text = vec![sentence.as_str(); 12].join(" ");

    let split = split_paragraphs(&text, 450, 100);
    let paragraph = vec![sentence.as_str(); 4].join(" ");
    assert_eq!(split.paragraphs, vec![paragraph.clone(), paragraph.clone(), paragraph]);
    assert_eq!(split.cuts(), 2);
}

#[test]
fn falls_back_to_last_space() {
    let text = "word ".repeat(120);
    let text = text.trim_end();

    let split = split_paragraphs(text, 450, 100);
    assert_eq!(
        split.paragraphs,
        vec![
            "word ".repeat(90).trim_end().to_string(),
            "word ".repeat(30).trim_end().to_string()
        ]
    );
    assert_eq!(split.forced, 0);
}

#[test]
fn forced_split_without_spaces() {
    let text = "x".repeat(600);
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs, vec!["x".repeat(450), "x".repeat(150)]);
    assert_eq!(split.forced, 1);
}

#[test]
fn early_sentence_end_forces_split() {
    // The sentence end at index 3 is too early; the later space is not consulted.
    let text = format!("Hi. {} {}", "y".repeat(200), "z".repeat(400));
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(
        split.paragraphs[0],
        format!("Hi. {} {}", "y".repeat(200), "z".repeat(245))
    );
    assert_eq!(split.paragraphs[1], "z".repeat(155));
    assert_eq!(split.forced, 1);
}

#[test]
fn character_offsets_not_bytes() {
    let text = "é".repeat(600);
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs, vec!["é".repeat(450), "é".repeat(150)]);

    let text = "🦀".repeat(500);
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.paragraphs[0].chars().count(), 450);
    assert_eq!(split.paragraphs[1].chars().count(), 50);
}

#[test]
fn huge_input_terminates() {
    let text = "lorem ipsum dolor sit amet. ".repeat(80_000);
    let split = split_paragraphs(text.trim_end(), 450, 100);
    assert!(split.paragraphs.len() > 1000);
    assert!(split.paragraphs.iter().all(|p| p.chars().count() <= 450));
    assert_eq!(split.forced, 0);

    let text = "x".repeat(2_000_000);
    let split = split_paragraphs(&text, 450, 100);
    assert_eq!(split.forced, split.cuts());
    assert_eq!(split.paragraphs.concat(), text);
}

#[test]
fn zero_thresholds_still_progress() {
    let split = split_paragraphs("abc", 0, 0);
    assert_eq!(split.paragraphs, vec!["a", "b", "c"]);
}
