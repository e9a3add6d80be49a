//! The color-name resolution seam.
//!
//! The engine does not know how names are looked up. Callers supply a
//! [`ResolveFn`] that maps a complete hex color to a future; the pipeline
//! owns when that future runs and when it is abandoned. A helper for parsing
//! the common JSON wire shape lives here so HTTP-backed resolvers stay thin.

use crate::core::CompleteHex;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thiserror::Error;

/// A pending name lookup.
pub type ResolveFuture = Pin<Box<dyn Future<Output = Result<String, LookupError>> + Send>>;

/// Factory for name lookups, shared across lookups and threads.
///
/// Each call starts one logical lookup. The returned future must be
/// cancel-safe: the pipeline drops it without polling to completion whenever
/// a newer state supersedes the lookup.
pub type ResolveFn = Arc<dyn Fn(CompleteHex) -> ResolveFuture + Send + Sync>;

/// Wrap an async closure as a [`ResolveFn`].
///
/// # Example
///
/// ```rust
/// use hexpad::pipeline::resolve_fn;
///
/// let resolver = resolve_fn(|hex| async move {
///     Ok(format!("color {hex}"))
/// });
/// ```
pub fn resolve_fn<F, Fut>(f: F) -> ResolveFn
where
    F: Fn(CompleteHex) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, LookupError>> + Send + 'static,
{
    Arc::new(move |hex| -> ResolveFuture { Box::pin(f(hex)) })
}

/// Errors a name lookup can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LookupError {
    /// The lookup service could not be reached or answered with an error.
    #[error("name service failed: {message}")]
    Service { message: String },

    /// The service answered, but not in the expected shape.
    #[error("malformed name response: {message}")]
    MalformedResponse { message: String },
}

#[derive(Debug, Deserialize)]
struct NameResponse {
    name: NameField,
}

#[derive(Debug, Deserialize)]
struct NameField {
    value: String,
}

/// Extract the color name from a service response body.
///
/// The expected shape nests the human-readable name one level down:
///
/// ```json
/// {"name": {"value": "Red"}}
/// ```
///
/// Extra fields are ignored; a missing or misshapen `name.value` is a
/// [`LookupError::MalformedResponse`].
pub fn parse_lookup_response(body: &str) -> Result<String, LookupError> {
    let response: NameResponse =
        serde_json::from_str(body).map_err(|err| LookupError::MalformedResponse {
            message: err.to_string(),
        })?;
    Ok(response.name.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_nested_name_value() {
        let body = r#"{"name": {"value": "Red"}}"#;
        assert_eq!(parse_lookup_response(body).unwrap(), "Red");
    }

    #[test]
    fn ignores_extra_fields() {
        let body = r##"{
            "hex": {"value": "#ff0000"},
            "name": {"value": "Red", "exact_match_name": true},
            "contrast": {"value": "#ffffff"}
        }"##;
        assert_eq!(parse_lookup_response(body).unwrap(), "Red");
    }

    #[test]
    fn rejects_missing_name_field() {
        let err = parse_lookup_response(r##"{"hex": {"value": "#ff0000"}}"##).unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }

    #[test]
    fn rejects_flat_name_shape() {
        let err = parse_lookup_response(r#"{"name": "Red"}"#).unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }

    #[test]
    fn rejects_non_json_bodies() {
        let err = parse_lookup_response("<html>gateway timeout</html>").unwrap_err();
        assert!(matches!(err, LookupError::MalformedResponse { .. }));
    }

    #[tokio::test]
    async fn resolve_fn_wraps_an_async_closure() {
        let resolver = resolve_fn(|hex| async move { Ok(format!("color {hex}")) });
        let hex: CompleteHex = "#ff0000".parse().unwrap();
        assert_eq!(resolver(hex).await.unwrap(), "color #ff0000");
    }

    #[tokio::test]
    async fn resolve_fn_propagates_errors() {
        let resolver = resolve_fn(|_hex| async move {
            Err(LookupError::Service {
                message: "unreachable".into(),
            })
        });
        let hex: CompleteHex = "#123456".parse().unwrap();
        assert_eq!(
            resolver(hex).await.unwrap_err(),
            LookupError::Service {
                message: "unreachable".into()
            }
        );
    }
}
