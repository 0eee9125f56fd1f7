use crate::error::BuildResult;
use crate::io::ARTICLE_TEMPLATE;
use crate::render::template::{substitute, Slot};
use crate::render::{escape_html, Article, RenderSettings};

pub const TITLE_MARKER: &str = "{{TITLE}}";
pub const DATE_MARKER: &str = "{{DATE}}";
pub const CATEGORY_MARKER: &str = "{{CATEGORY}}";
pub const IMAGE_URL_MARKER: &str = "{{IMAGE_URL}}";
pub const BODY_MARKER: &str = "{{BODY}}";
/// Optional; the same date summary the news list carries.
pub const DATE_LIST_MARKER: &str = "{{DATE_LIST}}";

pub fn render_article(
    template: &str,
    article: &Article<'_>,
    date_list: &str,
    settings: &RenderSettings,
) -> BuildResult<String> {
    let entry = article.entry;

    let title = escape_html(&entry.title);
    let date = settings.display_date(&entry.date);
    let category = escape_html(&entry.category);
    let image_url = escape_html(entry.image_url());
    let body = settings.body_html(&entry.body);

    substitute(
        ARTICLE_TEMPLATE,
        template,
        &[
            Slot::required(TITLE_MARKER, &title),
            Slot::required(DATE_MARKER, &date),
            Slot::required(CATEGORY_MARKER, &category),
            Slot::required(IMAGE_URL_MARKER, &image_url),
            Slot::required(BODY_MARKER, &body),
            Slot::optional(DATE_LIST_MARKER, date_list),
        ],
    )
}
