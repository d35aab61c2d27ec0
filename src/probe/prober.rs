// src/probe/prober.rs
use crate::config::ProbeConfig;
use crate::probe::ProbeOutcome;
use reqwest::{Client, StatusCode};
use tokio::time::timeout;
use tracing::{debug, warn};
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Invalid target URL {url}: {source}")]
    InvalidTarget {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

pub struct HealthProber {
    config: ProbeConfig,
    target: Url,
    client: Client,
}

impl HealthProber {
    pub fn new(config: ProbeConfig) -> Result<Self, ProbeError> {
        let target = Url::parse(&config.target_url).map_err(|source| ProbeError::InvalidTarget {
            url: config.target_url.clone(),
            source,
        })?;

        // Redirects follow the client default; the status compared below is
        // the final one after any redirect chain.
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(ProbeError::ClientBuild)?;

        Ok(Self {
            config,
            target,
            client,
        })
    }

    /// Issue exactly one GET to the target and map the result. Never errors:
    /// every failure mode collapses into an unhealthy outcome.
    pub async fn probe(&self) -> ProbeOutcome {
        debug!("Probing {}", self.target);

        let result = timeout(
            self.config.timeout(),
            self.client.get(self.target.as_str()).send(),
        )
        .await;

        let outcome = match result {
            Ok(Ok(response)) => {
                let status = response.status();
                if status == StatusCode::OK {
                    ProbeOutcome::Passed
                } else {
                    ProbeOutcome::BadStatus(status)
                }
            }
            Ok(Err(e)) => ProbeOutcome::TransportError(e.to_string()),
            Err(_) => ProbeOutcome::TransportError(format!(
                "request timed out after {}s",
                self.config.timeout_secs
            )),
        };

        if !outcome.is_healthy() {
            warn!("{}", outcome);
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_target_url_fails_construction() {
        let config = ProbeConfig {
            target_url: "not a url".to_string(),
            ..ProbeConfig::default()
        };

        let err = HealthProber::new(config).err().expect("construction must fail");
        assert!(matches!(err, ProbeError::InvalidTarget { .. }));
        assert!(err.to_string().contains("not a url"));
    }
}
