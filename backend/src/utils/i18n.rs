//! Internationalization utilities for the backend
//!
//! This module provides locale extraction from HTTP requests and
//! task-local storage for the current locale. The locale only selects the
//! language of API error messages; triage replies follow the language of the
//! user's message.

use std::future::Future;

// Task-local so the locale follows the request across worker threads
tokio::task_local! {
    static CURRENT_LOCALE: String;
}

/// Supported locales
pub const SUPPORTED_LOCALES: &[&str] = &["en", "ka", "ru"];
pub const DEFAULT_LOCALE: &str = "en";

/// Run `fut` with `locale` as the current locale
pub async fn with_locale<F: Future>(locale: &str, fut: F) -> F::Output {
    CURRENT_LOCALE.scope(normalize_locale(locale), fut).await
}

/// Get the current locale, or the default outside a `with_locale` scope
pub fn get_locale() -> String {
    CURRENT_LOCALE.try_with(String::clone).unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}

/// Normalize locale string to supported format
/// Accepts: "ka", "ka-GE", "ru_RU", "en-US", "ru,en;q=0.8", etc.
fn normalize_locale(locale: &str) -> String {
    let locale = locale.trim().to_lowercase();

    // Extract primary language tag
    let primary = locale
        .split(['-', '_', ',', ';'])
        .next()
        .unwrap_or(DEFAULT_LOCALE);

    SUPPORTED_LOCALES
        .iter()
        .find(|supported| primary == **supported)
        .unwrap_or(&DEFAULT_LOCALE)
        .to_string()
}

/// Extract locale from Accept-Language header value
pub fn extract_locale_from_header(header_value: Option<&str>) -> String {
    match header_value {
        Some(value) => normalize_locale(value),
        None => DEFAULT_LOCALE.to_string(),
    }
}
