/// Boundary error for every provider call. Raw JSON never leaves a provider
/// module; anything that isn't a decoded success becomes one of these.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// A required credential is absent from the build configuration. No
    /// network call is attempted.
    #[error("{0} is not configured")]
    MissingKey(&'static str),
    /// The upstream API reported a failure, surfaced verbatim.
    #[error("{0}")]
    Upstream(String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ProviderError {
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }
}

/// An extra human hint keyed off substrings of a surfaced error message.
/// The upstream text is still shown verbatim; this only adds a line.
pub fn error_hint(message: &str) -> Option<&'static str> {
    let lower = message.to_lowercase();
    if lower.contains("not found") || lower.contains("404") {
        Some("Double-check the spelling of the name you searched for.")
    } else if lower.contains("rate limit") || lower.contains("403") {
        Some("The API rate limit was likely exceeded. Wait a bit and retry.")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_the_key() {
        let err = ProviderError::MissingKey("OMDB_API_KEY");
        assert_eq!(err.to_string(), "OMDB_API_KEY is not configured");
    }

    #[test]
    fn upstream_message_is_verbatim() {
        let err = ProviderError::upstream("GitHub API Error: 404 Not Found. (User not found)");
        assert_eq!(
            err.to_string(),
            "GitHub API Error: 404 Not Found. (User not found)"
        );
    }

    #[test]
    fn hint_recognizes_not_found() {
        assert!(error_hint("User handle \"xyz\" not found on Codeforces.").is_some());
    }

    #[test]
    fn hint_recognizes_rate_limit() {
        let hint = error_hint("GitHub API Error: 403 Forbidden. (Rate limit likely exceeded)");
        assert_eq!(
            hint,
            Some("The API rate limit was likely exceeded. Wait a bit and retry.")
        );
    }

    #[test]
    fn no_hint_for_ordinary_errors() {
        assert!(error_hint("NewsAPI Error: apiKeyInvalid - bad key").is_none());
    }
}
