use crate::config::FieldMapping;
use crate::domain::{Entry, ImageRef};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

// wire shapes of the delivery API's `/entries` response, trimmed to what we read

#[derive(Deserialize, Debug)]
pub struct EntryCollection {
    pub total: usize,
    #[serde(default)]
    pub items: Vec<RawEntry>,
    #[serde(default)]
    pub includes: Includes,
}

#[derive(Deserialize, Debug, Default)]
pub struct Includes {
    #[serde(default, rename = "Asset")]
    pub assets: Vec<RawAsset>,
}

#[derive(Deserialize, Debug)]
pub struct RawEntry {
    pub sys: Sys,
    #[serde(default)]
    pub fields: Map<String, Value>,
}

#[derive(Deserialize, Debug)]
pub struct Sys {
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct RawAsset {
    pub sys: Sys,
    #[serde(default)]
    pub fields: AssetFields,
}

#[derive(Deserialize, Debug, Default)]
pub struct AssetFields {
    pub file: Option<AssetFile>,
}

#[derive(Deserialize, Debug)]
pub struct AssetFile {
    pub url: String,
}

/// Body of a non-2xx response.
#[derive(Deserialize, Debug)]
pub struct ApiError {
    pub message: Option<String>,
    pub sys: Option<Sys>,
}

impl EntryCollection {
    /// Flattens the page into entries, resolving image links against the
    /// assets included alongside it.
    pub fn into_entries(self, fields: &FieldMapping) -> Vec<Entry> {
        let asset_urls: HashMap<&str, &str> = self
            .includes
            .assets
            .iter()
            .filter_map(|asset| {
                let file = asset.fields.file.as_ref()?;
                Some((asset.sys.id.as_str(), file.url.as_str()))
            })
            .collect();

        self.items
            .iter()
            .map(|item| Entry {
                id: item.sys.id.clone(),
                title: text_field(&item.fields, &fields.title),
                date: text_field(&item.fields, &fields.date),
                category: text_field(&item.fields, &fields.category),
                body: text_field(&item.fields, &fields.body),
                image: item
                    .fields
                    .get(&fields.image)
                    .and_then(|link| resolve_asset_url(link, &asset_urls))
                    .map(|url| ImageRef { url }),
            })
            .collect()
    }
}

// missing fields come back empty; we do not validate content
fn text_field(fields: &Map<String, Value>, name: &str) -> String {
    match fields.get(name) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(document @ Value::Object(_)) => rich_text_to_plain(document),
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Null) | None => String::new(),
    }
}

// rich text documents: keep the text nodes, one blank line between blocks
fn rich_text_to_plain(document: &Value) -> String {
    fn inline_text(node: &Value, out: &mut String) {
        if let Some(text) = node.get("value").and_then(Value::as_str) {
            out.push_str(text);
        }
        if let Some(children) = node.get("content").and_then(Value::as_array) {
            for child in children {
                inline_text(child, out);
            }
        }
    }

    let Some(blocks) = document.get("content").and_then(Value::as_array) else {
        return String::new();
    };

    blocks
        .iter()
        .map(|block| {
            let mut text = String::new();
            inline_text(block, &mut text);
            text
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn resolve_asset_url(link: &Value, asset_urls: &HashMap<&str, &str>) -> Option<String> {
    // already-resolved asset, as returned when the field embeds its own fields
    if let Some(url) = link.pointer("/fields/file/url").and_then(Value::as_str) {
        return Some(url.to_string());
    }

    let id = link.pointer("/sys/id").and_then(Value::as_str)?;
    asset_urls.get(id).map(|url| url.to_string())
}
