// src/probe/outcome.rs
use reqwest::StatusCode;
use std::fmt;

/// Result of a single probe. The supervisor only consumes the exit code;
/// the rendered message is diagnostic, intended for logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Endpoint answered 200.
    Passed,
    /// Endpoint answered with any other status.
    BadStatus(StatusCode),
    /// The request never produced a response: connection refused, timeout,
    /// DNS failure, malformed response.
    TransportError(String),
}

impl ProbeOutcome {
    pub fn is_healthy(&self) -> bool {
        matches!(self, ProbeOutcome::Passed)
    }

    /// 0 = healthy, 1 = unhealthy. All failure modes converge to 1.
    pub fn exit_code(&self) -> u8 {
        if self.is_healthy() {
            0
        } else {
            1
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Passed => write!(f, "Health check passed"),
            ProbeOutcome::BadStatus(status) => {
                write!(f, "Health check failed with status: {}", status.as_u16())
            }
            ProbeOutcome::TransportError(error) => {
                write!(f, "Health check failed: {}", error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passed_prints_success_line_and_exits_zero() {
        let outcome = ProbeOutcome::Passed;
        assert_eq!(outcome.to_string(), "Health check passed");
        assert_eq!(outcome.exit_code(), 0);
        assert!(outcome.is_healthy());
    }

    #[test]
    fn bad_status_prints_the_observed_code() {
        let outcome = ProbeOutcome::BadStatus(StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(outcome.to_string(), "Health check failed with status: 503");
        assert_eq!(outcome.exit_code(), 1);
    }

    #[test]
    fn transport_error_prints_the_description() {
        let outcome = ProbeOutcome::TransportError("connection refused".to_string());
        assert_eq!(outcome.to_string(), "Health check failed: connection refused");
        assert_eq!(outcome.exit_code(), 1);
    }
}
