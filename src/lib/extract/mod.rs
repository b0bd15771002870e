pub mod firecrawl;

use std::{fmt::Debug, future::Future};

use serde_json::Value;

/// Retrieves a page's primary textual content in lightweight markup form.
pub trait ContentFetcher {
    const CONTENT_FORMAT: &'static str = "markdown";

    type Error: Debug;

    fn fetch_article(&self, url: &str) -> impl Future<Output = Result<String, Self::Error>>;
}

/// Pulls markdown content out of a scrape response whose shape varies by
/// backend version. Extractors are tried in order; the first non-empty
/// result wins:
///
/// 1. top-level `markdown` field
/// 2. `markdown` entry of a nested `data` object
/// 3. stringified representation of the whole response
pub fn extract_markdown(response: &Value) -> Option<String> {
    const EXTRACTORS: &[fn(&Value) -> Option<String>] =
        &[direct_markdown, nested_data_markdown, raw_repr];

    EXTRACTORS
        .iter()
        .filter_map(|extract| extract(response))
        .find(|text| !text.trim().is_empty())
}

fn direct_markdown(response: &Value) -> Option<String> {
    response.get("markdown")?.as_str().map(str::to_string)
}

fn nested_data_markdown(response: &Value) -> Option<String> {
    response
        .get("data")?
        .get("markdown")?
        .as_str()
        .map(str::to_string)
}

fn raw_repr(response: &Value) -> Option<String> {
    match response {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_field_wins_over_nested_data() {
        let response = json!({
            "markdown": "# Direct content",
            "data": { "markdown": "# Nested content" }
        });

        assert_eq!(
            extract_markdown(&response).as_deref(),
            Some("# Direct content")
        );
    }

    #[test]
    fn nested_data_used_when_direct_field_absent() {
        let response = json!({
            "success": true,
            "data": { "markdown": "# Nested content" }
        });

        assert_eq!(
            extract_markdown(&response).as_deref(),
            Some("# Nested content")
        );
    }

    #[test]
    fn empty_direct_field_falls_through_to_nested_data() {
        let response = json!({
            "markdown": "",
            "data": { "markdown": "# Nested content" }
        });

        assert_eq!(
            extract_markdown(&response).as_deref(),
            Some("# Nested content")
        );
    }

    #[test]
    fn plain_string_response_taken_verbatim() {
        let response = json!("Just the article text");

        assert_eq!(
            extract_markdown(&response).as_deref(),
            Some("Just the article text")
        );
    }

    #[test]
    fn unrecognized_object_stringified_as_last_resort() {
        let response = json!({ "content": "something else entirely" });

        let extracted = extract_markdown(&response).unwrap();
        assert!(extracted.contains("something else entirely"));
    }

    #[test]
    fn null_response_yields_nothing() {
        assert_eq!(extract_markdown(&Value::Null), None);
    }

    #[test]
    fn empty_string_response_yields_nothing() {
        assert_eq!(extract_markdown(&json!("")), None);
        assert_eq!(extract_markdown(&json!("   ")), None);
    }
}
