//! User-facing failure taxonomy for semantic fetches

use thiserror::Error;

/// Why a fetch failed. `Display` yields the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Incomplete data received from API. The definition for the concept could not be generated.")]
    DataIncomplete,

    #[error("Network error. Please check your internet connection and try again.")]
    Network,

    #[error("Invalid request. The API could not process your query. Please try rephrasing it.")]
    InvalidRequest,

    #[error("API rate limit exceeded. Please wait a moment before trying again.")]
    RateLimited,

    #[error("API server error. The service is temporarily unavailable. Please try again later.")]
    UpstreamServerError,

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}

impl FetchError {
    /// Classify an upstream failure from its error text.
    ///
    /// The upstream client only reports HTTP status inside the message, so
    /// this matches literal substrings. First match wins.
    pub fn classify(error_text: &str) -> Self {
        if error_text.to_lowercase().contains("fetch") {
            FetchError::Network
        } else if error_text.contains("[400") {
            FetchError::InvalidRequest
        } else if error_text.contains("[429") {
            FetchError::RateLimited
        } else if error_text.contains("[500") {
            FetchError::UpstreamServerError
        } else {
            FetchError::Unexpected
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_token_means_network() {
        assert_eq!(FetchError::classify("fetch failed"), FetchError::Network);
        assert_eq!(FetchError::classify("TypeError: Failed to Fetch"), FetchError::Network);
    }

    #[test]
    fn status_codes_in_brackets() {
        assert_eq!(FetchError::classify("[400 Bad Request] bad"), FetchError::InvalidRequest);
        assert_eq!(FetchError::classify("[429 Too Many Requests]"), FetchError::RateLimited);
        assert_eq!(FetchError::classify("[500 Internal Server Error]"), FetchError::UpstreamServerError);
    }

    #[test]
    fn network_wins_over_status() {
        assert_eq!(FetchError::classify("error fetching: [429]"), FetchError::Network);
    }

    #[test]
    fn other_codes_and_text_are_unexpected() {
        assert_eq!(FetchError::classify("[503 Service Unavailable]"), FetchError::Unexpected);
        assert_eq!(FetchError::classify("429 without bracket"), FetchError::Unexpected);
        assert_eq!(FetchError::classify(""), FetchError::Unexpected);
    }

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(
            FetchError::RateLimited.to_string(),
            "API rate limit exceeded. Please wait a moment before trying again."
        );
        assert_eq!(
            FetchError::Unexpected.to_string(),
            "An unexpected error occurred. Please try again."
        );
    }
}
