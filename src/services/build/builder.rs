use crate::config::SiteConfig;
use crate::domain::article_path::plan_article_paths;
use crate::error::BuildResult;
use crate::io::{
    PageWriter, TemplateStore, WriteOutcome, ARTICLE_TEMPLATE, HOME_PAGE, HOME_TEMPLATE,
    NEWS_LIST_PAGE, NEWS_LIST_TEMPLATE,
};
use crate::render::{self, Article, RenderSettings};
use crate::services::ContentSource;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub entries: usize,
    pub pages_written: usize,
    pub pages_unchanged: usize,
}

impl BuildReport {
    fn record(&mut self, outcome: WriteOutcome) {
        match outcome {
            WriteOutcome::Written => self.pages_written += 1,
            WriteOutcome::Unchanged => self.pages_unchanged += 1,
        }
    }
}

/// Runs the whole pipeline once: fetch, then homepage, news list and one page
/// per article, strictly in that order. The first failure ends the run; pages
/// already written stay on disk.
pub struct SiteBuilder {
    source: Box<dyn ContentSource>,
    templates: Box<dyn TemplateStore>,
    writer: Box<dyn PageWriter>,
    config: Arc<SiteConfig>,
    settings: RenderSettings,
}

impl SiteBuilder {
    pub fn new(
        source: Box<dyn ContentSource>,
        templates: Box<dyn TemplateStore>,
        writer: Box<dyn PageWriter>,
        config: Arc<SiteConfig>,
    ) -> Self {
        let settings = RenderSettings::from_config(&config);
        Self {
            source,
            templates,
            writer,
            config,
            settings,
        }
    }

    #[instrument(skip_all)]
    pub async fn build(&self) -> BuildResult<BuildReport> {
        let entries = self.source.fetch_entries(&self.config.query).await?;
        info!(count = entries.len(), "fetched entries");

        // every path is derived and checked before the first write
        let paths = plan_article_paths(&entries)?;
        let articles: Vec<Article<'_>> = entries
            .iter()
            .zip(paths.iter())
            .map(|(entry, path)| Article { entry, path })
            .collect();

        let mut report = BuildReport {
            entries: entries.len(),
            ..BuildReport::default()
        };

        self.update_homepage(&articles, &mut report).await?;
        self.update_news_list(&articles, &mut report).await?;
        self.generate_article_pages(&articles, &mut report).await?;

        info!(
            entries = report.entries,
            written = report.pages_written,
            unchanged = report.pages_unchanged,
            "site build complete"
        );
        Ok(report)
    }

    async fn update_homepage(
        &self,
        articles: &[Article<'_>],
        report: &mut BuildReport,
    ) -> BuildResult<()> {
        let template = self.templates.read_template(HOME_TEMPLATE).await?;
        let latest = render::latest(articles, self.config.home_entry_count);
        let html = render::render_homepage(&template, latest, &self.settings)?;

        self.write(Path::new(HOME_PAGE), &html, report).await
    }

    async fn update_news_list(
        &self,
        articles: &[Article<'_>],
        report: &mut BuildReport,
    ) -> BuildResult<()> {
        let template = self.templates.read_template(NEWS_LIST_TEMPLATE).await?;
        let html = render::render_news_list(&template, articles, &self.settings)?;

        self.write(Path::new(NEWS_LIST_PAGE), &html, report).await
    }

    async fn generate_article_pages(
        &self,
        articles: &[Article<'_>],
        report: &mut BuildReport,
    ) -> BuildResult<()> {
        let template = self.templates.read_template(ARTICLE_TEMPLATE).await?;
        let date_list = render::date_summary(articles, &self.settings);

        for article in articles {
            let html =
                render::render_article(&template, article, &date_list, &self.settings)?;
            self.write(&article.path.file, &html, report).await?;
        }
        Ok(())
    }

    async fn write(&self, relative: &Path, html: &str, report: &mut BuildReport) -> BuildResult<()> {
        let outcome = self.writer.write_page(relative, html).await?;
        debug!(path = %relative.display(), ?outcome, "page");
        report.record(outcome);
        Ok(())
    }
}
