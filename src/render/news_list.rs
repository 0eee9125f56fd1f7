use crate::error::BuildResult;
use crate::io::NEWS_LIST_TEMPLATE;
use crate::render::home::NEWS_MARKER;
use crate::render::template::{substitute, Slot};
use crate::render::{escape_html, Article, RenderSettings};

/// Optional; receives every entry's date joined with ", ".
pub const DATE_LIST_MARKER: &str = "<!-- DATE_LIST_PLACEHOLDER -->";

pub fn render_news_list(
    template: &str,
    articles: &[Article<'_>],
    settings: &RenderSettings,
) -> BuildResult<String> {
    let news_items: String = articles
        .iter()
        .map(|article| list_fragment(article, settings))
        .collect();

    let date_list = date_summary(articles, settings);

    substitute(
        NEWS_LIST_TEMPLATE,
        template,
        &[
            Slot::required(NEWS_MARKER, &news_items),
            Slot::optional(DATE_LIST_MARKER, &date_list),
        ],
    )
}

pub fn date_summary(articles: &[Article<'_>], settings: &RenderSettings) -> String {
    articles
        .iter()
        .map(|article| settings.display_date(&article.entry.date))
        .collect::<Vec<_>>()
        .join(", ")
}

fn list_fragment(article: &Article<'_>, settings: &RenderSettings) -> String {
    let entry = article.entry;
    let title = escape_html(&entry.title);

    let image = match &entry.image {
        Some(image) => format!(
            "\n      <img src=\"{}\" alt=\"{}\">",
            escape_html(&image.url),
            title
        ),
        None => String::new(),
    };

    format!(
        r#"
    <a href="{href}">
      <h2>{title}</h2>
      <p>{date}</p>
      <p>{category}</p>{image}
      {body}
    </a>
"#,
        href = escape_html(&article.path.href),
        date = settings.display_date(&entry.date),
        category = escape_html(&entry.category),
        body = settings.excerpt_block(&entry.body),
    )
}
