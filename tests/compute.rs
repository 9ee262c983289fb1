use chemtext::{
    compute,
    elements::ElementSet,
    formula::{normalize::normalize, Error, Tag},
    markup::{stack, wrap_selection, DEFAULT_OPERATORS},
    session::FormulaSession,
};

fn compute_text(input: &str) -> String {
    FormulaSession::new(ElementSet::periodic_table()).compute_text(input)
}

#[test]
fn test_expected_inputs() {
    assert_eq!(compute_text("HO"), "{{H,1,O,1},0}");
    assert_eq!(compute_text("H<sub>2</sub>"), "{{H,2},0}");
    assert_eq!(compute_text("H<sub>2</sub>O"), "{{H,2,O,1},0}");
}

#[test]
fn test_error_inputs() {
    assert_eq!(compute_text(""), "Error: input text is empty");
    assert_eq!(compute_text("<sub></sub>"), "Error: input text is empty");
    assert_eq!(
        compute_text("H<sub>2</sub>O<sub>"),
        "Error: unclosed subscript tag"
    );
    assert_eq!(
        compute_text("<sub>2</sub>"),
        "Error: subscript without normal text"
    );
    assert_eq!(compute_text("be"), "Error: \"be\" not a valid element");
}

#[test]
fn test_adjacent_subscripts() {
    assert_eq!(compute_text("H<sub>2</sub><sub>2</sub>"), "{{H,22},0}");
    assert_eq!(compute_text("H<sub>2</sub><sub></sub>"), "{{H,2},0}");
}

#[test]
fn test_placeholders() {
    assert_eq!(compute_text("H<sub>&shy;</sub>"), "{{H,1},0}");
    assert_eq!(compute_text("H<sub>&shy;2</sub>"), "{{H,2},0}");
    assert_eq!(compute_text("H<sub>2&shy;</sub>"), "{{H,2},0}");
    assert_eq!(compute_text("H<sub>2&shy;3</sub>"), "{{H,23},0}");
    assert_eq!(compute_text("H<sub>&shy;</sub>C<sub>&shy;</sub>"), "{{H,1,C,1},0}");
    assert_eq!(
        compute_text("H<sub>&shy;</sub>C<sub>&shy;</sub"),
        "Error: unclosed subscript tag"
    );
}

#[test]
fn test_elements() {
    assert_eq!(compute_text("H"), "{{H,1},0}");
    assert_eq!(compute_text("HCr"), "{{H,1,Cr,1},0}");
    assert_eq!(compute_text("HCr<sub>2</sub>"), "{{H,1,Cr,2},0}");
    assert_eq!(compute_text("BeB"), "{{Be,1,B,1},0}");
    assert_eq!(compute_text("Be<sub>2</sub>Be"), "{{Be,2,Be,1},0}");
}

#[test]
fn test_superscripts() {
    assert_eq!(compute_text("Be<sup>0</sup>"), "{{Be,1},0}");
    assert_eq!(compute_text("Be<sup>1</sup>"), "{{Be,1},1}");
    assert_eq!(compute_text("Be<sup>2</sup>"), "{{Be,1},2}");
    assert_eq!(compute_text("Be<sup>2-</sup>"), "{{Be,1},-2}");
    assert_eq!(compute_text("Be<sup>1</sup>B<sup>2</sup>"), "{{Be,1,B,1},3}");
    assert_eq!(compute_text("Be<sup>1</sup>B<sup>-1</sup>"), "{{Be,1,B,1},0}");
    assert_eq!(compute_text("Be<sup>1</sup>B<sup>-2</sup>"), "{{Be,1,B,1},-1}");
}

#[test]
fn test_shorthand_charges() {
    assert_eq!(compute_text("Be<sup>+</sup>"), "{{Be,1},1}");
    assert_eq!(compute_text("Be<sup>-</sup>"), "{{Be,1},-1}");
    assert_eq!(compute_text("Be<sup>-</sup>B<sup>+</sup>"), "{{Be,1,B,1},0}");
    assert_eq!(compute_text("Be<sup>x</sup>"), "{{Be,1},0}");
}

#[test]
fn test_stacked_markup() {
    let input = format!("Fe{}", stack("3+ 2", &DEFAULT_OPERATORS));
    assert_eq!(compute_text(&input), "{{Fe,2},3}");

    let input = format!("S{}", stack("2- 4", &['+']));
    assert_eq!(
        normalize(&input),
        "S<sup>2-</sup><sub>4</sub> &shy;"
    );
    assert_eq!(compute_text(&input), "{{S,4},-2}");
}

#[test]
fn test_wrapped_markup() {
    let input = format!(
        "C{}O{}",
        wrap_selection(Tag::Sub, "", &DEFAULT_OPERATORS),
        wrap_selection(Tag::Sub, "2", &DEFAULT_OPERATORS)
    );
    assert_eq!(compute_text(&input), "{{C,1,O,2},0}");
}

#[test]
fn test_structured_result() {
    let elements = ElementSet::periodic_table();
    let formula = compute("N<sub>1</sub>H<sub>4</sub><sup>+</sup>", &elements).unwrap();
    assert_eq!(formula.pairs_text(), "{N,1,H,4}");
    assert_eq!(formula.charge, 1);
    assert_eq!(
        compute("H<sup>", &elements),
        Err(Error::UnclosedTag(Tag::Sup))
    );
}

#[test]
fn test_toggle_round_trip() {
    let mut session = FormulaSession::new(ElementSet::periodic_table());
    assert_eq!(session.compute_text("H<sub>2</sub>O"), "{{H,2,O,1},0}");
    assert_eq!(session.compute_text("{{H,2,O,1},0}"), "H<sub>2</sub>O");
    assert_eq!(session.compute_text("Be<sup>-</sup>"), "{{Be,1},-1}");
}
