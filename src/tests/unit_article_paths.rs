use crate::domain::article_path::plan_article_paths;
use crate::domain::{ArticlePath, Entry};
use crate::error::BuildError;
use crate::io::verify_relative_path;
use std::path::{Path, PathBuf};

fn entry(id: &str, category: &str) -> Entry {
    Entry {
        id: id.to_string(),
        title: format!("Title {id}"),
        date: "2024-01-01".to_string(),
        category: category.to_string(),
        body: String::new(),
        image: None,
    }
}

// the file on disk and the link used by the list/homepage come from the same category + id
#[test]
fn test_article_path_from_category_and_id() {
    let path = ArticlePath::for_entry(&entry("a1", "press")).expect("Should derive");

    assert_eq!(path.file, PathBuf::from("news/press/a1.html"));
    assert_eq!(path.href, "/news/press/a1.html");
}

// non-ascii categories are fine as directory names
#[test]
fn test_article_path_unicode_category() {
    let path = ArticlePath::for_entry(&entry("x9", "お知らせ")).expect("Should derive");
    assert_eq!(path.file, Path::new("news").join("お知らせ").join("x9.html"));
}

// categories are free CMS text: the link is percent-encoded so it still reaches
// the file, while the file itself keeps the raw name
#[test]
fn test_article_href_is_percent_encoded() {
    for (category, encoded) in [
        ("C#", "C%23"),
        ("Q?A", "Q%3FA"),
        ("100%", "100%25"),
        ("new releases", "new%20releases"),
    ] {
        let path = ArticlePath::for_entry(&entry("a1", category)).expect("Should derive");

        assert_eq!(path.file, Path::new("news").join(category).join("a1.html"));
        assert_eq!(path.href, format!("/news/{encoded}/a1.html"));
    }

    let path = ArticlePath::for_entry(&entry("a b#1", "press")).expect("Should derive");
    assert_eq!(path.file, PathBuf::from("news/press/a b#1.html"));
    assert_eq!(path.href, "/news/press/a%20b%231.html");
}

// anything that would climb out of news/ or produce an empty segment is refused
#[test]
fn test_article_path_rejects_unsafe_segments() {
    for (id, category) in [
        ("a1", ""),
        ("a1", ".."),
        ("a1", "."),
        ("a1", "press/2024"),
        ("a1", "..\\up"),
        ("", "press"),
        ("../../etc/passwd", "press"),
    ] {
        let result = ArticlePath::for_entry(&entry(id, category));
        assert!(
            matches!(result, Err(BuildError::InvalidPathSegment { .. })),
            "({id:?}, {category:?}) should be rejected"
        );
    }
}

#[test]
fn test_plan_keeps_input_order() {
    let entries = vec![entry("a2", "press"), entry("a1", "press"), entry("b1", "event")];
    let paths = plan_article_paths(&entries).expect("Should plan");

    let hrefs: Vec<&str> = paths.iter().map(|p| p.href.as_str()).collect();
    assert_eq!(
        hrefs,
        vec!["/news/press/a2.html", "/news/press/a1.html", "/news/event/b1.html"]
    );
}

// two entries landing on the same file would leave one of them without a page
#[test]
fn test_plan_rejects_collisions() {
    let entries = vec![entry("a1", "press"), entry("a2", "press"), entry("a1", "press")];

    match plan_article_paths(&entries) {
        Err(BuildError::PathCollision { path, first, second }) => {
            assert_eq!(path, PathBuf::from("news/press/a1.html"));
            assert_eq!(first, "a1");
            assert_eq!(second, "a1");
        }
        other => panic!("Expected a collision, got {other:?}"),
    }
}

// the same id under different categories is two different pages
#[test]
fn test_plan_same_id_different_category() {
    let entries = vec![entry("a1", "press"), entry("a1", "event")];
    assert_eq!(plan_article_paths(&entries).expect("Should plan").len(), 2);
}

#[test]
fn test_output_path_stays_under_root() {
    let root = Path::new("/srv/public");

    assert_eq!(
        verify_relative_path(root, Path::new("news/press/a1.html")).expect("Should join"),
        PathBuf::from("/srv/public/news/press/a1.html")
    );
    assert_eq!(
        verify_relative_path(root, Path::new("./index.html")).expect("Should join"),
        PathBuf::from("/srv/public/index.html")
    );

    assert!(verify_relative_path(root, Path::new("../outside.html")).is_err());
    assert!(verify_relative_path(root, Path::new("news/../../outside.html")).is_err());
    assert!(verify_relative_path(root, Path::new("/etc/passwd")).is_err());
    assert!(verify_relative_path(root, Path::new("")).is_err());
}
