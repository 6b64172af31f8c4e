//! Dynamic and enum-constrained path segments.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::str::FromStr;

/// Reference year the tutorial counts back from.
const REFERENCE_YEAR: i64 = 2018;

/// `/goback/{year}`: year must be a plain digit sequence, anything else is
/// 404. Widening to i64 keeps the subtraction in range for any u32 year.
pub async fn go_back(Path(year): Path<String>) -> Response {
    match year.parse::<u32>() {
        Ok(year) => Html(format!(
            "<h1>go back {} year!</h1>",
            REFERENCE_YEAR - i64::from(year)
        ))
        .into_response(),
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// The only colors `/colors/{color}` accepts; everything else is 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Blue,
    Black,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Red => "red",
        }
    }
}

impl FromStr for Color {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(Color::Blue),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            _ => Err(()),
        }
    }
}

pub async fn three_colors(Path(color): Path<String>) -> Response {
    match color.parse::<Color>() {
        Ok(color) => Html(format!("<h1>hello, {}!</h1>", color.as_str())).into_response(),
        Err(()) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// `/brew/{drink}`: this teapot does not brew coffee.
pub async fn brew(Path(drink): Path<String>) -> Response {
    if drink == "coffee" {
        StatusCode::NOT_FOUND.into_response()
    } else {
        Html("<h1>a drop of tea!</h1>".to_string()).into_response()
    }
}

/// `/404`: always not found, for poking at the error path.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_parses_known_values() {
        assert_eq!("blue".parse::<Color>(), Ok(Color::Blue));
        assert_eq!("black".parse::<Color>(), Ok(Color::Black));
        assert_eq!("red".parse::<Color>(), Ok(Color::Red));
    }

    #[test]
    fn color_rejects_everything_else() {
        assert!("green".parse::<Color>().is_err());
        assert!("Blue".parse::<Color>().is_err());
        assert!("".parse::<Color>().is_err());
    }
}
