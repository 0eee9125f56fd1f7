use crate::parser::markdown::compile_markdown_to_html;

// the basic markdown -> html compilation used for bodies when SITE_BODY_FORMAT=markdown
#[test]
fn test_compile_markdown_basic() {
    let result = compile_markdown_to_html("# Title\nThis is a [link](https://example.com)");

    assert!(result.contains("<h1>Title</h1>"));
    assert!(result.contains(r#"<a href="https://example.com">link</a>"#));
}

// tables and strikethrough are switched on
#[test]
fn test_compile_markdown_extensions() {
    let result = compile_markdown_to_html("~~old~~\n\n| a | b |\n|---|---|\n| 1 | 2 |");

    assert!(result.contains("<del>old</del>"));
    assert!(result.contains("<table>"));
}

// raw html written into a body must not reach the page as markup
#[test]
fn test_raw_html_is_escaped() {
    let result = compile_markdown_to_html("hello <script>alert(1)</script>\n\n<div>block</div>");

    assert!(!result.contains("<script>"));
    assert!(result.contains("&lt;script&gt;"));
    assert!(!result.contains("<div>"));
}

#[test]
fn test_script_links_are_emptied() {
    let result = compile_markdown_to_html("[click](javascript:alert(1))");

    assert!(!result.contains("javascript:"));
    assert!(result.contains(">click</a>"));
}
