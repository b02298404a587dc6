use crate::error::Error;

/// Convert an octocrab error into the crate error taxonomy
pub fn classify_octocrab_error(error: octocrab::Error) -> Error {
    // Log the raw error for debugging
    tracing::debug!("Raw octocrab error: {:?}", error);

    let result = match &error {
        octocrab::Error::GitHub { source, .. } => {
            // GitHub API returned an error response
            let status = source.status_code.as_u16();
            let detailed_error = format!(
                "Status: {}, Message: {:?}, Documentation: {:?}",
                status, source.message, source.documentation_url
            );
            tracing::error!("GitHub API error details: {}", detailed_error);

            classify_status(status, source.message.clone())
        }
        octocrab::Error::Http { .. }
        | octocrab::Error::Hyper { .. }
        | octocrab::Error::Service { .. } => {
            tracing::error!("Transport error talking to GitHub: {}", error);
            Error::Network(error.to_string())
        }
        octocrab::Error::Json { .. } | octocrab::Error::Serde { .. } => {
            tracing::error!("Could not decode GitHub response: {}", error);
            Error::InvalidRecord {
                store: "GitHub API response".to_string(),
                message: error.to_string(),
            }
        }
        _ => {
            tracing::error!("Unexpected GitHub client error: {}", error);
            Error::Network(format!("Unknown error type: {}", error))
        }
    };

    tracing::debug!("Error classification result: {:?}", result);
    result
}

/// Map a non-2xx status code onto the error taxonomy
pub fn classify_status(status: u16, message: String) -> Error {
    match status {
        401 => {
            tracing::warn!("GitHub rejected the token ({}): {}", status, message);
            Error::Auth(format!("GitHub rejected the token: {}", message))
        }
        _ => Error::Http { status, message },
    }
}
