mod unit_article_paths;
mod unit_markdown_body;
