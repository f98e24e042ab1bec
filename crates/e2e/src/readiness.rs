//! Service readiness polling
//!
//! Test runs are gated on the frontend and backend answering HTTP requests.
//! While a service is booting, connection refusals are the expected steady
//! state, so transport errors are logged and treated as "not ready yet"
//! rather than propagated. Exhaustion is reported through the return value;
//! the caller decides whether that is fatal.

use std::time::Duration;
use tracing::{error, info};

use crate::config::Config;
use crate::error::{E2eError, E2eResult};

/// Poll `url` with plain GETs until it answers 2xx.
///
/// Returns `true` on the first successful response, `false` once the retry
/// budget is exhausted. Never returns an error.
pub async fn wait_until_ready(
    client: &reqwest::Client,
    url: &str,
    retries: usize,
    retry_delay: Duration,
) -> bool {
    for attempt in 1..=retries {
        match client.get(url).send().await {
            Ok(response) if response.status().is_success() => {
                info!("Service {} is ready", url);
                return true;
            }
            Ok(response) => {
                info!(
                    "Service {} returned {} (attempt {}/{})",
                    url,
                    response.status(),
                    attempt,
                    retries
                );
            }
            Err(e) => {
                error!("Error waiting for service {}: {}", url, e);
            }
        }
        if attempt < retries {
            tokio::time::sleep(retry_delay).await;
        }
    }
    false
}

/// Block until both the frontend and the backend are live.
///
/// On failure the error names the service and URL that never came up, so an
/// operator can tell "frontend down" from "backend down" without reading
/// internals.
pub async fn ensure_services_ready(config: &Config) -> E2eResult<()> {
    let client = reqwest::Client::new();

    for (service, url) in [("Frontend", &config.base_url), ("Backend", &config.api_url)] {
        let ready = wait_until_ready(&client, url, config.ready_retries, config.ready_delay).await;
        if !ready {
            return Err(E2eError::ServiceUnavailable {
                service: service.to_string(),
                url: url.clone(),
            });
        }
    }

    Ok(())
}
