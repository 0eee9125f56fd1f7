use pulldown_cmark::{html, CowStr, Event, Options as CmarkOptions, Parser};

// compiles an entry body written in markdown into HTML.
// raw HTML inside the body is emitted as text, so it ends up escaped like everything else
pub fn compile_markdown_to_html(markdown_content: &str) -> String {
    let mut options = CmarkOptions::empty();
    options.insert(CmarkOptions::ENABLE_STRIKETHROUGH);
    options.insert(CmarkOptions::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown_content, options);

    let event_iterator = parser.map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(tag) => Event::Start(neutralize_link(tag)),
        other => other,
    });

    let mut html_content = String::new();
    html::push_html(&mut html_content, event_iterator);
    html_content
}

// links and images pointing at `javascript:` are dropped to an empty target
fn neutralize_link(tag: pulldown_cmark::Tag<'_>) -> pulldown_cmark::Tag<'_> {
    use pulldown_cmark::Tag;

    let is_script = |url: &CowStr<'_>| {
        url.trim_start()
            .to_ascii_lowercase()
            .starts_with("javascript:")
    };

    match tag {
        Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        } if is_script(&dest_url) => Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        },
        Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        } if is_script(&dest_url) => Tag::Image {
            link_type,
            dest_url: CowStr::Borrowed(""),
            title,
            id,
        },
        other => other,
    }
}
