use reflow::{DocumentNode, ReflowOptions, Reflower, format_body};

fn sentences(sentence: &str, count: usize) -> String {
    vec![sentence; count].join(" ")
}

#[test]
fn empty_input() {
    assert_eq!(format_body(""), "");
    assert_eq!(format_body("  \n \n"), "");
    assert_eq!(format_body("\n\n\n"), "");
}

#[test]
fn heading_promotion() {
    assert_eq!(format_body("Risk: This is dangerous."), "### Risk\n\nThis is dangerous.");
    assert_eq!(
        format_body("Time: 10:30 standup"),
        "### Time\n\n10:30 standup"
    );
}

#[test]
fn existing_heading_is_not_promoted() {
    let out = format_body("# Risk: already a heading");
    assert!(out.starts_with("# Risk: already a heading"));
    assert!(!out.contains("###"));
}

#[test]
fn colon_needs_following_whitespace() {
    assert_eq!(
        format_body("https://example.com is where it lives"),
        "https://example.com is where it lives"
    );
    assert_eq!(format_body("Ratio:3 to 1"), "Ratio:3 to 1");
}

#[test]
fn label_length_bounds() {
    // One leading character plus at most 40 more.
    let longest = "x".repeat(41);
    assert_eq!(
        format_body(&format!("{}: body", longest)),
        format!("### {}\n\nbody", longest)
    );

    let too_long = "x".repeat(42);
    let input = format!("{}: body", too_long);
    assert_eq!(format_body(&input), input);

    // A single-character label is below the minimum.
    assert_eq!(format_body("A: body"), "A: body");
}

#[test]
fn one_heading_per_block() {
    assert_eq!(
        format_body("Note: first line\nTip: second line"),
        "### Note\n\nfirst line\nTip: second line"
    );
}

#[test]
fn short_lines_keep_single_newlines() {
    let list = "- apples\n- pears\n- plums";
    assert_eq!(format_body(list), list);

    let verse = "Roses are red\nViolets are blue";
    assert_eq!(format_body(verse), verse);
}

#[test]
fn long_line_becomes_paragraph() {
    let long = "x".repeat(60);
    assert_eq!(
        format_body(&format!("{}\nSecond line.", long)),
        format!("{}\n\nSecond line.", long)
    );

    let just_short = "x".repeat(59);
    let input = format!("{}\nSecond line.", just_short);
    assert_eq!(format_body(&input), input);
}

#[test]
fn long_line_then_label() {
    let long = "x".repeat(70);
    assert_eq!(
        format_body(&format!("{}\nRisk: high", long)),
        format!("{}\n\n### Risk\n\nhigh", long)
    );
}

#[test]
fn blank_line_runs_collapse() {
    assert_eq!(format_body("First.\n\n\n\nSecond."), "First.\n\nSecond.");
    assert_eq!(format_body("  First.  \n\n  Second.  "), "First.\n\nSecond.");
}

#[test]
fn plain_text_is_unchanged() {
    let text = "A short opening paragraph.\n\nThen a second one\nwith a wrapped line.";
    assert_eq!(format_body(text), text);
}

#[test]
fn long_block_splits_at_last_sentence() {
    let head = format!("{}.", "word ".repeat(83).trim_end());
    let tail = "more ".repeat(37);
    let input = format!("{} {}", head, tail.trim_end());
    assert!(input.chars().count() > 450);

    let out = format_body(&input);
    assert_eq!(out, format!("{}\n\n{}", head, tail.trim_end()));
}

#[test]
fn heading_remainder_is_split() {
    let body = sentences(&format!("{}.", "y".repeat(98)), 6);
    let out = format_body(&format!("Summary: {}", body));

    let paragraph = sentences(&format!("{}.", "y".repeat(98)), 4);
    let rest = sentences(&format!("{}.", "y".repeat(98)), 2);
    assert_eq!(out, format!("### Summary\n\n{}\n\n{}", paragraph, rest));
}

#[test]
fn output_has_no_outer_whitespace() {
    let inputs = [
        "  padded  ",
        "\n\nRisk: spaced out\n\n",
        "line one\nline two\n",
    ];
    for input in inputs {
        let out = format_body(input);
        assert_eq!(out, out.trim(), "input {:?}", input);
    }
}

#[test]
fn reflow_reports_changes() {
    let long = "z".repeat(80);
    let input = format!("{}\nRisk: high\n\n{}", long, "q".repeat(600));
    let reflowed = Reflower::default().reflow(&input);

    assert_eq!(reflowed.report.blocks, 3);
    assert_eq!(reflowed.report.paragraph_breaks, 1);
    assert_eq!(reflowed.report.promoted, vec!["Risk".to_string()]);
    assert_eq!(reflowed.report.split_blocks, 1);
    assert_eq!(reflowed.report.forced_splits, 1);
    assert_eq!(reflowed.markdown(), format_body(&input));

    assert_eq!(
        reflowed.document.nodes[1],
        DocumentNode::Heading {
            level: 3,
            text: "Risk".to_string()
        }
    );
}

#[test]
fn untouched_text_reports_nothing() {
    let reflowed = Reflower::default().reflow("Nothing to see here.");
    assert!(reflowed.report.is_unchanged());
    assert_eq!(reflowed.report.blocks, 1);
}

#[test]
fn custom_options() {
    let options = ReflowOptions {
        heading_level: 2,
        max_label_chars: 5,
        max_block_chars: 200,
        ..ReflowOptions::default()
    };
    let reflower = Reflower::new(options).unwrap();

    assert_eq!(reflower.format("Risk: high"), "## Risk\n\nhigh");
    assert_eq!(reflower.format("Warning: high"), "Warning: high");

    let out = reflower.format(&"x".repeat(500));
    let parts: Vec<&str> = out.split("\n\n").collect();
    assert_eq!(parts, vec!["x".repeat(200), "x".repeat(200), "x".repeat(100)]);
}

#[test]
fn shared_across_threads() {
    let reflower = std::sync::Arc::new(Reflower::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let reflower = reflower.clone();
            std::thread::spawn(move || reflower.format(&format!("Item{}: body", i)))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("### Item{}\n\nbody", i));
    }
}
