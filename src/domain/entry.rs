use derive_more::derive::Display;

/// A snapshot of one article as the content source returned it.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", id)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub date: String,
    pub category: String,
    pub body: String,
    pub image: Option<ImageRef>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub url: String,
}

impl Entry {
    pub fn image_url(&self) -> &str {
        self.image.as_ref().map_or("", |image| image.url.as_str())
    }
}
