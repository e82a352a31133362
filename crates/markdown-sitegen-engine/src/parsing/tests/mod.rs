//! Fixture tests for the document pipeline.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.


use crate::{MarkupError, parsing::markdown_to_node};

#[test]
fn fixture_paragraphs() {
    assert_fixture("paragraphs");
}

#[test]
fn fixture_headings() {
    assert_fixture("headings");
}

#[test]
fn fixture_lists() {
    assert_fixture("lists");
}

#[test]
fn fixture_code_fence() {
    assert_fixture("code_fence");
}

#[test]
fn fixture_blog_post() {
    assert_fixture("blog_post");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let node = markdown_to_node(&md).unwrap();
    invariants::check(&md, &node);

    let html = node.render().unwrap();
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html);
    });
}

/// Empty documents give an empty container, which cannot render.
#[test]
fn empty_document() {
    let node = markdown_to_node("").unwrap();
    assert!(node.children().is_empty());
    assert!(matches!(
        node.render(),
        Err(MarkupError::UnrenderableNode(_))
    ));
}

/// Test blank lines don't produce blocks.
#[test]
fn blank_lines_only() {
    let node = markdown_to_node("\n\n\n").unwrap();
    assert!(node.children().is_empty());
}

#[test]
fn unbalanced_delimiter_aborts_document() {
    let md = "# fine\n\ntext with **unterminated";
    assert!(matches!(
        markdown_to_node(md),
        Err(MarkupError::UnbalancedDelimiter { .. })
    ));
}
