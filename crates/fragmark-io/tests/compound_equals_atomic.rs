//! Every compound operation must produce exactly what chaining the atomic
//! operations produces.

use fragmark_io::prelude::*;

const PAGE: &str = "<html><head><style>h1{font-weight:bold}</style></head>\
                    <body><h1>Title</h1><p>First</p><p>Second</p></body></html>";

#[test]
fn markup_to_markup_equals_decode_then_encode() {
    let tree = markup_to_tree(PAGE).unwrap().tree.unwrap();
    assert_eq!(markup_to_markup(PAGE).unwrap(), tree_to_markup(&tree));
}

#[test]
fn markup_to_lines_equals_decode_then_lines() {
    let tree = markup_to_tree(PAGE).unwrap().tree.unwrap();
    assert_eq!(markup_to_lines(PAGE).unwrap(), tree_to_lines(&tree));
}

#[test]
fn markup_to_fragments_equals_decode_then_extract() {
    let tree = markup_to_tree(PAGE).unwrap().tree.unwrap();
    let (_, chained) = tree_to_fragments(tree, DEFAULT_MAX_DEPTH);

    let compound = markup_to_fragments(PAGE, DEFAULT_MAX_DEPTH).unwrap();
    assert_eq!(compound, chained);
    assert_eq!(compound.total_fragments, 3);
}

#[test]
fn markup_to_hashed_markup_equals_extract_then_encode() {
    let tree = markup_to_tree(PAGE).unwrap().tree.unwrap();
    let (hashed_tree, _) = tree_to_fragments(tree, DEFAULT_MAX_DEPTH);

    assert_eq!(
        markup_to_hashed_markup(PAGE, DEFAULT_MAX_DEPTH).unwrap(),
        tree_to_markup(&hashed_tree)
    );
}

#[test]
fn markup_to_masked_markup_equals_extract_mask_reintegrate_encode() {
    let tree = markup_to_tree(PAGE).unwrap().tree.unwrap();
    let (hashed_tree, response) = tree_to_fragments(tree, DEFAULT_MAX_DEPTH);
    let mapping = fragmark_io::rewrite::mask_mapping(&response.fragments, 'x');
    let chained = apply_hash_mapping_to_tree(&hashed_tree, &mapping);

    assert_eq!(
        markup_to_masked_markup(PAGE, DEFAULT_MAX_DEPTH, 'x').unwrap(),
        chained
    );
}

#[test]
fn masked_markup_hides_content_but_keeps_shape() {
    let masked = markup_to_masked_markup(PAGE, DEFAULT_MAX_DEPTH, 'x').unwrap();
    assert!(masked.contains("<h1>xxxxx</h1>"));
    assert!(masked.contains("<p>xxxxx</p>"));
    // Style payloads are not fragments and stay readable.
    assert!(masked.contains("h1{font-weight:bold}"));
}

#[test]
fn depth_reporting_matches_tree_shape() {
    // html(0) > body(1) > p(2) > text(3)
    let page = "<html><body><p>deep</p></body></html>";

    let shallow = markup_to_fragments(page, 3).unwrap();
    assert!(shallow.max_depth_reached);
    assert_eq!(shallow.total_fragments, 1);

    let at_bound = markup_to_fragments(page, 4).unwrap();
    assert!(!at_bound.max_depth_reached);
    assert_eq!(at_bound.total_fragments, 1);

    let cut = markup_to_fragments(page, 2).unwrap();
    assert!(cut.max_depth_reached);
    assert_eq!(cut.total_fragments, 0);
}

#[test]
fn hashed_markup_substitutes_fragments_in_place() {
    let hashed = markup_to_hashed_markup(PAGE, DEFAULT_MAX_DEPTH).unwrap();
    assert!(!hashed.contains("Title"));
    assert!(!hashed.contains("First"));
    // Structure and excluded payloads survive untouched.
    assert!(hashed.contains("<h1>"));
    assert!(hashed.contains("h1{font-weight:bold}"));
}
