//! `/note`: one fixed note, negotiated as plain text, HTML, or JSON.

use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Json, Response};
use serde::Serialize;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize)]
pub struct Note {
    pub to: String,
    pub from: String,
    pub heading: String,
    pub body: String,
}

impl Note {
    fn sample() -> Self {
        Self {
            to: "Peter".to_string(),
            from: "Jane".to_string(),
            heading: "Reminder".to_string(),
            body: "Don't forget the party!".to_string(),
        }
    }

    fn render_text(&self) -> String {
        format!(
            "To: {}\nFrom: {}\nheading: {}\nbody: {}\n",
            self.to, self.from, self.heading, self.body
        )
    }

    fn render_html(&self) -> String {
        format!(
            "<!DOCTYPE HTML>\n<html>\n<head></head>\n<body>\n\
             <h1>Note</h1>\n<p>To: {}</p>\n<p>From: {}</p>\n\
             <p>heading: {}</p>\n<p>body: {}</p>\n</body>\n</html>\n",
            self.to, self.from, self.heading, self.body
        )
    }
}

/// Representations `/note/{format}` can produce. Matching is
/// case-insensitive; anything unknown is 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteFormat {
    Text,
    Html,
    Json,
}

impl FromStr for NoteFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(NoteFormat::Text),
            "html" => Ok(NoteFormat::Html),
            "json" => Ok(NoteFormat::Json),
            _ => Err(()),
        }
    }
}

/// `/note` without a format segment defaults to plain text.
pub async fn note_default() -> Response {
    render(NoteFormat::Text)
}

pub async fn note(Path(format): Path<String>) -> Response {
    match format.parse::<NoteFormat>() {
        Ok(format) => render(format),
        Err(()) => StatusCode::NOT_FOUND.into_response(),
    }
}

fn render(format: NoteFormat) -> Response {
    let note = Note::sample();
    match format {
        NoteFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            note.render_text(),
        )
            .into_response(),
        NoteFormat::Html => Html(note.render_html()).into_response(),
        NoteFormat::Json => Json(serde_json::json!({ "note": note })).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_parse_is_case_insensitive() {
        assert_eq!("TEXT".parse::<NoteFormat>(), Ok(NoteFormat::Text));
        assert_eq!("Html".parse::<NoteFormat>(), Ok(NoteFormat::Html));
        assert_eq!("json".parse::<NoteFormat>(), Ok(NoteFormat::Json));
        assert!("xml".parse::<NoteFormat>().is_err());
    }

    #[test]
    fn text_rendering_lists_all_fields() {
        let text = Note::sample().render_text();
        assert!(text.contains("To: Peter"));
        assert!(text.contains("From: Jane"));
        assert!(text.contains("heading: Reminder"));
        assert!(text.contains("body: Don't forget the party!"));
    }

    #[test]
    fn note_serializes_to_json() {
        let value = serde_json::to_value(Note::sample()).unwrap();
        assert_eq!(value["to"], "Peter");
        assert_eq!(value["from"], "Jane");
    }
}
