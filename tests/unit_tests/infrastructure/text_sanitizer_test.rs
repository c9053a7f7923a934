use lexiscan::infrastructure::text_processing::sanitize_extracted_text;

#[test]
fn given_ragged_whitespace_when_sanitizing_then_runs_collapse_to_single_spaces() {
    let raw = "The  Tenant\tshall   pay";

    assert_eq!(sanitize_extracted_text(raw), "The Tenant shall pay");
}

#[test]
fn given_hyphenated_line_break_when_sanitizing_then_word_is_rejoined() {
    let raw = "the obli-\ngations of the Tenant";

    assert_eq!(
        sanitize_extracted_text(raw),
        "the obligations of the Tenant"
    );
}

#[test]
fn given_blank_lines_when_sanitizing_then_paragraph_breaks_survive() {
    let raw = "Clause 1.\n\n\nClause 2.";

    assert_eq!(sanitize_extracted_text(raw), "Clause 1.\n\nClause 2.");
}

#[test]
fn given_only_whitespace_when_sanitizing_then_result_is_empty() {
    assert_eq!(sanitize_extracted_text("  \n\t \n"), "");
}

#[test]
fn given_ligatures_when_sanitizing_then_nfkc_folds_them() {
    // PDF extractors routinely emit the U+FB01 ligature for "fi".
    assert_eq!(sanitize_extracted_text("ﬁling deadline"), "filing deadline");
}
