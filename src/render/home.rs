use crate::error::BuildResult;
use crate::io::HOME_TEMPLATE;
use crate::render::template::{substitute, Slot};
use crate::render::{escape_html, Article, RenderSettings};

pub const NEWS_MARKER: &str = "<!-- NEWS_PLACEHOLDER -->";

/// The first `count` articles, in source order.
pub fn latest<'a, 'b>(articles: &'b [Article<'a>], count: usize) -> &'b [Article<'a>] {
    &articles[..count.min(articles.len())]
}

pub fn render_homepage(
    template: &str,
    articles: &[Article<'_>],
    settings: &RenderSettings,
) -> BuildResult<String> {
    let news_section: String = articles
        .iter()
        .map(|article| home_fragment(article, settings))
        .collect();

    substitute(
        HOME_TEMPLATE,
        template,
        &[Slot::required(NEWS_MARKER, &news_section)],
    )
}

fn home_fragment(article: &Article<'_>, settings: &RenderSettings) -> String {
    format!(
        r#"
    <a href="{href}">
      <h2>{title}</h2>
      <p>{date}</p>
    </a>
"#,
        href = escape_html(&article.path.href),
        title = escape_html(&article.entry.title),
        date = settings.display_date(&article.entry.date),
    )
}
