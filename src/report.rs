//! Outcome of a viewer run and the diagnostics printed for each failure kind.

use std::io::{self, Write};

use crate::api::ApiError;
use crate::config::ConfigError;

/// Remediation steps printed after an authentication failure
pub const AUTH_HINTS: [&str; 4] = [
    "Double-check your Reddit username and password",
    "Make sure your Reddit App is properly configured as a 'script' type app",
    "Verify your Client ID and Client Secret are correct",
    "Ensure your Reddit account has been verified (email verification)",
];

#[derive(Debug)]
pub enum Outcome {
    Success { identity: String, posts: usize },
    ConfigError(ConfigError),
    AuthError(String),
    ResponseError { message: String, status: u16, body: String },
    OtherError { kind: &'static str, message: String },
}

impl Outcome {
    /// Classify a failure from the authenticate/fetch sequence
    pub fn from_error(err: &anyhow::Error) -> Self {
        if let Some(api) = err.chain().find_map(|e| e.downcast_ref::<ApiError>()) {
            return match api {
                ApiError::OAuth(message) => Outcome::AuthError(message.clone()),
                ApiError::Response { status, body } => Outcome::ResponseError {
                    message: api.to_string(),
                    status: *status,
                    body: body.clone(),
                },
                other => Outcome::OtherError {
                    kind: other.kind(),
                    message: format!("{:#}", err),
                },
            };
        }

        let kind = if err.chain().any(|e| e.is::<reqwest::Error>()) {
            "NetworkError"
        } else if err.chain().any(|e| e.is::<io::Error>()) {
            "IoError"
        } else {
            "Error"
        };
        Outcome::OtherError {
            kind,
            message: format!("{:#}", err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Write the diagnostic for this outcome. Success prints nothing.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            Outcome::Success { .. } => Ok(()),
            Outcome::ConfigError(err) => writeln!(out, "ERROR: {}", err),
            Outcome::AuthError(message) => {
                writeln!(out, "Authentication Error: {}", message)?;
                writeln!(out, "\nPossible solutions:")?;
                for (i, hint) in AUTH_HINTS.iter().enumerate() {
                    writeln!(out, "{}. {}", i + 1, hint)?;
                }
                Ok(())
            }
            Outcome::ResponseError { message, status, body } => {
                writeln!(out, "API Response Error: {}", message)?;
                writeln!(out, "Status code: {}", status)?;
                writeln!(out, "Response: {}", body)
            }
            Outcome::OtherError { kind, message } => {
                writeln!(out, "An error occurred: {} - {}", kind, message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn render(outcome: &Outcome) -> String {
        let mut out = Vec::new();
        outcome.report(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_auth_error_lists_hints() {
        let err = anyhow::Error::from(ApiError::OAuth("invalid_grant".into()));
        let outcome = Outcome::from_error(&err);
        let text = render(&outcome);

        assert!(text.starts_with("Authentication Error: invalid_grant\n"));
        assert!(text.contains("Possible solutions:"));
        assert!(text.contains("1. Double-check your Reddit username and password"));
        assert!(text.contains("2. Make sure your Reddit App is properly configured as a 'script' type app"));
        assert!(text.contains("3. Verify your Client ID and Client Secret are correct"));
        assert!(text.contains("4. Ensure your Reddit account has been verified (email verification)"));
    }

    #[test]
    fn test_response_error_shows_status_and_body() {
        let err = anyhow::Error::from(ApiError::Response {
            status: 429,
            body: "slow down".into(),
        })
        .context("Fetching posts");
        let text = render(&Outcome::from_error(&err));

        assert_eq!(
            text,
            "API Response Error: received 429 HTTP response\nStatus code: 429\nResponse: slow down\n"
        );
    }

    #[test]
    fn test_other_errors() {
        let err = anyhow::Error::from(ApiError::InvalidResponse("expected value".into()));
        assert_eq!(
            render(&Outcome::from_error(&err)),
            "An error occurred: InvalidResponse - Invalid response: expected value\n"
        );

        let io_err: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
        let err = io_err.context("Failed to read subreddit name").unwrap_err();
        assert_eq!(
            render(&Outcome::from_error(&err)),
            "An error occurred: IoError - Failed to read subreddit name: stdin closed\n"
        );

        let err = anyhow::anyhow!("something odd");
        assert_eq!(
            render(&Outcome::from_error(&err)),
            "An error occurred: Error - something odd\n"
        );
    }

    #[test]
    fn test_config_error_message() {
        let outcome = Outcome::ConfigError(ConfigError::MissingCredentials(vec!["REDDIT_PASSWORD"]));
        assert_eq!(
            render(&outcome),
            "ERROR: Missing one or more Reddit API credentials. Please check your .env file.\n"
        );
    }

    #[test]
    fn test_success_prints_nothing() {
        let outcome = Outcome::Success {
            identity: "viewer_bot".into(),
            posts: 5,
        };
        assert!(outcome.is_success());
        assert_eq!(render(&outcome), "");
    }
}
