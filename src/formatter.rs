use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::RemoteApiError;

const TITLE_WIDTH: usize = 50;

#[derive(Debug)]
pub struct ResponseFormatter;

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Formats a database query response as one line per page plus a footer
    pub fn format_query(&self, response: &Value) -> String {
        let pages = response["results"].as_array().map(Vec::as_slice).unwrap_or(&[]);

        let mut lines: Vec<String> = pages.iter().map(|page| self.format_page(page)).collect();

        let mut footer = match pages.len() {
            1 => "1 page".to_string(),
            n => format!("{n} pages"),
        };
        if response["has_more"].as_bool().unwrap_or(false) {
            footer.push_str(" (more available)");
        }
        lines.push(footer);

        lines.join("\n")
    }

    /// `id | title | last edited`
    pub fn format_page(&self, page: &Value) -> String {
        let id = page["id"].as_str().unwrap_or("?");
        let title = self.truncate(&self.page_title(page));
        let edited = page["last_edited_time"]
            .as_str()
            .map(|ts| self.format_timestamp(ts))
            .unwrap_or_else(|| "-".to_string());

        format!("{id} | {title} | {edited}")
    }

    pub fn format_remote_error(&self, error: &RemoteApiError) -> String {
        format!("Error: Notion rejected the request ({error})")
    }

    /// Concatenated plain text of the page's title property
    fn page_title(&self, page: &Value) -> String {
        let Some(properties) = page["properties"].as_object() else {
            return String::new();
        };

        properties
            .values()
            .find(|prop| prop["type"] == "title")
            .and_then(|prop| prop["title"].as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part["plain_text"].as_str())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    fn truncate(&self, text: &str) -> String {
        if text.chars().count() > TITLE_WIDTH {
            let head: String = text.chars().take(TITLE_WIDTH - 3).collect();
            format!("{head}...")
        } else {
            text.to_string()
        }
    }

    fn format_timestamp(&self, ts: &str) -> String {
        match DateTime::parse_from_rfc3339(ts) {
            Ok(dt) => dt.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string(),
            Err(_) => ts.to_string(),
        }
    }
}
