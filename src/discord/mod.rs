pub mod embed;

use tracing::{debug, error, info};
use url::Url;

use crate::errors::{ConfigurationError, DeliveryError, NotificationError};
use crate::models::{BuildContext, NotificationRequest};
use crate::secrets::{SecretLookup, WEBHOOK_URL_SECRET};
use crate::utils::http::create_client;
use embed::build_payload;

/// Send one build notification to a Discord webhook and return the HTTP
/// status code on success (any 2xx).
///
/// Straight-line: validate, resolve the destination, fill defaults from
/// the build context, POST once. No retries.
pub async fn send_notification(
    request: &NotificationRequest,
    context: &BuildContext,
    secrets: &dyn SecretLookup,
) -> Result<u16, NotificationError> {
    if request.text.as_deref().unwrap_or("").is_empty() {
        return Err(ConfigurationError::MissingText.into());
    }

    let destination = resolve_destination(request, secrets)?;
    let payload = build_payload(request, context);

    debug!("posting webhook payload to {}", destination);

    let client = create_client().map_err(DeliveryError::Http)?;
    let response = client
        .post(destination)
        .json(&payload)
        .send()
        .await
        .map_err(DeliveryError::Http)?;

    let status = response.status();
    if status.is_success() {
        info!(
            "sent Discord notification '{}' ({})",
            payload.embeds[0].title, status
        );
        Ok(status.as_u16())
    } else {
        let body = response.text().await.unwrap_or_default();
        error!("Discord webhook failed with status {}: {}", status, body);
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        }
        .into())
    }
}

fn resolve_destination(
    request: &NotificationRequest,
    secrets: &dyn SecretLookup,
) -> Result<Url, ConfigurationError> {
    // An explicit URL always wins; the secret store is only consulted when
    // none is given. Empty values count as absent.
    let raw = match request.url.as_deref() {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => secrets
            .lookup(WEBHOOK_URL_SECRET)
            .filter(|secret| !secret.is_empty())
            .ok_or(ConfigurationError::MissingDestination)?,
    };

    Url::parse(&raw).map_err(|e| ConfigurationError::InvalidUrl {
        url: raw,
        detail: e.to_string(),
    })
}
