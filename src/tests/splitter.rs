use crate::split::{
    find_top_level, split_addition, split_by_delimiter, split_let_tail, split_object_pairs,
};

#[test]
fn splits_at_top_level_commas_only() {
    let parts = split_object_pairs(r#""a": 1, "b": {"c": 2, "d": 3}, "e": [4, 5]"#);
    assert_eq!(
        parts,
        vec![r#""a": 1"#, r#""b": {"c": 2, "d": 3}"#, r#""e": [4, 5]"#]
    );
}

#[test]
fn commas_inside_strings_do_not_split() {
    let parts = split_object_pairs(r#""x": "a,b", "y": 'c,d'"#);
    assert_eq!(parts, vec![r#""x": "a,b""#, r#""y": 'c,d'"#]);
}

#[test]
fn parens_count_toward_depth() {
    let parts = split_by_delimiter("size(.a, .b), 2", ",");
    assert_eq!(parts, vec!["size(.a, .b)", "2"]);
}

#[test]
fn empty_parts_are_dropped() {
    assert_eq!(split_by_delimiter("1, 2,", ","), vec!["1", "2"]);
    assert_eq!(split_by_delimiter(", ,", ","), Vec::<String>::new());
}

#[test]
fn unsplit_input_comes_back_whole_and_trimmed() {
    assert_eq!(split_by_delimiter("  .a.b  ", ","), vec![".a.b"]);
}

#[test]
fn addition_splits_only_space_flanked_plus() {
    assert_eq!(split_addition("1 + 2 + 3"), vec!["1", "2", "3"]);
    assert_eq!(split_addition("1 +2"), vec!["1 +2"]);
    assert_eq!(split_addition("-1 + 2"), vec!["-1", "2"]);
}

#[test]
fn addition_skips_strings_and_brackets() {
    assert_eq!(split_addition(r#""a + b" + .x"#), vec![r#""a + b""#, ".x"]);
    assert_eq!(split_addition("size(.a) + 1"), vec!["size(.a)", "1"]);
}

#[test]
fn let_tail_stops_at_next_keyword() {
    assert_eq!(split_let_tail("5 let y = 6"), ("5", "let y = 6"));
    assert_eq!(
        split_let_tail("[1, 2] if ($x) .a else .b"),
        ("[1, 2]", "if ($x) .a else .b")
    );
}

#[test]
fn let_tail_ignores_keywords_inside_strings() {
    assert_eq!(split_let_tail(r#""stop if (x) now""#), (r#""stop if (x) now""#, ""));
}

#[test]
fn let_tail_without_keyword_is_all_value() {
    assert_eq!(split_let_tail(".a.b"), (".a.b", ""));
}

#[test]
fn top_level_search_skips_nesting() {
    assert_eq!(find_top_level(".a > 1", " > "), Some(2));
    assert_eq!(find_top_level("(1 > 2)", " > "), None);
    assert_eq!(find_top_level(r#"'a > b'"#, " > "), None);
    assert_eq!(find_top_level(r#"'a > b' > .x"#, " > "), Some(7));
}
