//! The public read path: stored string → HTML for the post page.

use bn_babel::{render_stored, MarkupPolicy, RenderOptions};

const REBUILD: RenderOptions = RenderOptions {
    legacy_markup: MarkupPolicy::Rebuild,
};

#[test]
fn test_json_posts_render_through_the_tree() {
    let raw = r#"[{"kind":"paragraph","children":[{"text":"Results are out: "},{"text":"check now","underline":true}]}]"#;
    assert_eq!(
        render_stored(raw, &RenderOptions::default()),
        "<p>Results are out: <u>check now</u></p>"
    );
}

#[test]
fn test_rich_markup_passes_through_by_default() {
    let raw = "<h2 class=\"title\">Notice</h2><p>See <a href=\"/pdf\">the PDF</a>.</p>";
    assert_eq!(render_stored(raw, &RenderOptions::default()), raw);
}

#[test]
fn test_rebuild_policy_normalizes_legacy_markup() {
    let raw = "<h2 class=\"title\">Notice</h2><p>See <a href=\"/pdf\">the PDF</a>.</p>";
    assert_eq!(
        render_stored(raw, &REBUILD),
        "<h2>Notice</h2><p>See the PDF.</p>"
    );
}

#[test]
fn test_raw_text_is_escaped() {
    assert_eq!(
        render_stored("not json and not html-like <<<", &RenderOptions::default()),
        "<p>not json and not html-like &lt;&lt;&lt;</p>"
    );
}

#[test]
fn test_empty_content_renders_nothing() {
    assert_eq!(render_stored("", &RenderOptions::default()), "");
    assert_eq!(render_stored(" \n ", &REBUILD), "");
}

#[test]
fn test_policy_names() {
    let policy: MarkupPolicy = serde_json::from_str("\"pass-through\"").unwrap();
    assert_eq!(policy, MarkupPolicy::PassThrough);
    let policy: MarkupPolicy = serde_json::from_str("\"rebuild\"").unwrap();
    assert_eq!(policy, MarkupPolicy::Rebuild);
}

#[test]
fn test_empty_content_renders_nothing_while_decode_gives_an_editable_paragraph() {
    assert_eq!(render_stored("", &RenderOptions::default()), "");
    assert_eq!(bn_babel::to_html(&bn_babel::decode("")), "<p></p>");
}
