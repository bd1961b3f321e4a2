use url::Url;
use validator::ValidationError;

/// Validates that a URL string is absolute, well-formed and uses http/https
pub fn validate_url(url_str: &str) -> Result<(), ValidationError> {
    if url_str.trim().is_empty() {
        return Err(ValidationError::new("URL must not be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => {
            // Ensure URL has a scheme and host
            if url.scheme().is_empty() || url.host().is_none() {
                return Err(ValidationError::new("URL must have a scheme and host"));
            }

            // Only accept HTTP and HTTPS URLs
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ValidationError::new("URL scheme must be http or https"));
            }

            Ok(())
        }
        Err(_) => Err(ValidationError::new("Invalid URL format")),
    }
}
