use serde::{Deserialize, Serialize};

use crate::models::{BuildContext, NotificationRequest};

// Embed colors keyed by build result.
pub const COLOR_SUCCESS: u32 = 0x00FF00;
pub const COLOR_UNSTABLE: u32 = 0xFFFF00;
pub const COLOR_ABORTED: u32 = 0x808080;
pub const COLOR_FAILURE: u32 = 0xFF0000;

pub const DEFAULT_TITLE: &str = "Jenkins Job";
pub const DEFAULT_USERNAME: &str = "Jenkins";
pub const DEFAULT_AVATAR_URL: &str = "https://www.jenkins.io/images/logos/jenkins/jenkins.png";

/// Top-level Discord webhook body: sender identity plus a single embed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub username: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub url: String,
    pub description: String,
    pub color: u32,
    pub footer: EmbedFooter,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    pub text: String,
}

/// Assemble the webhook payload, filling every field the request leaves
/// unset from the build context or a fixed fallback.
pub fn build_payload(request: &NotificationRequest, context: &BuildContext) -> WebhookPayload {
    let title = request
        .title
        .clone()
        .or_else(|| context.job_name.clone())
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let link = request
        .link
        .clone()
        .or_else(|| context.build_url.clone())
        .unwrap_or_default();

    let result = context.result.as_deref().unwrap_or("UNKNOWN");

    // Explicit colors are truncated to the 24-bit range Discord accepts.
    let color = match request.color {
        Some(value) => value & 0xFF_FFFF,
        None => result_color(result),
    };

    let footer = request
        .footer
        .clone()
        .unwrap_or_else(|| format!("Jenkins • {}", result));

    WebhookPayload {
        username: request
            .username
            .clone()
            .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
        avatar_url: request
            .avatar
            .clone()
            .unwrap_or_else(|| DEFAULT_AVATAR_URL.to_string()),
        embeds: vec![Embed {
            title,
            url: link,
            description: request.text.clone().unwrap_or_default(),
            color,
            footer: EmbedFooter { text: footer },
        }],
    }
}

/// Map a build result label to an embed color. Total: unrecognized labels
/// get the failure red.
pub fn result_color(result: &str) -> u32 {
    match result {
        "SUCCESS" => COLOR_SUCCESS,
        "UNSTABLE" => COLOR_UNSTABLE,
        "ABORTED" => COLOR_ABORTED,
        _ => COLOR_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn request_with_text(text: &str) -> NotificationRequest {
        NotificationRequest {
            text: Some(text.to_string()),
            ..Default::default()
        }
    }

    fn success_context() -> BuildContext {
        BuildContext {
            job_name: Some("demo-job".to_string()),
            build_url: Some("http://x/1".to_string()),
            result: Some("SUCCESS".to_string()),
        }
    }

    #[test]
    fn defaults_follow_build_context() {
        let payload = build_payload(&request_with_text("Build finished"), &success_context());

        assert_eq!(payload.username, "Jenkins");
        assert_eq!(payload.avatar_url, DEFAULT_AVATAR_URL);
        assert_eq!(payload.embeds.len(), 1);

        let embed = &payload.embeds[0];
        assert_eq!(embed.title, "demo-job");
        assert_eq!(embed.url, "http://x/1");
        assert_eq!(embed.description, "Build finished");
        assert_eq!(embed.color, COLOR_SUCCESS);
        assert_eq!(embed.footer.text, "Jenkins • SUCCESS");
    }

    #[test]
    fn empty_context_falls_back_to_literals() {
        let payload = build_payload(&request_with_text("hi"), &BuildContext::default());

        let embed = &payload.embeds[0];
        assert_eq!(embed.title, "Jenkins Job");
        assert_eq!(embed.url, "");
        assert_eq!(embed.color, COLOR_FAILURE);
        assert_eq!(embed.footer.text, "Jenkins • UNKNOWN");
    }

    #[test]
    fn explicit_fields_override_context() {
        let request = NotificationRequest {
            text: Some("body".to_string()),
            title: Some("My Title".to_string()),
            link: Some("http://elsewhere/".to_string()),
            username: Some("release-bot".to_string()),
            avatar: Some("http://img/avatar.png".to_string()),
            footer: Some("custom footer".to_string()),
            ..Default::default()
        };

        let payload = build_payload(&request, &success_context());
        assert_eq!(payload.username, "release-bot");
        assert_eq!(payload.avatar_url, "http://img/avatar.png");

        let embed = &payload.embeds[0];
        assert_eq!(embed.title, "My Title");
        assert_eq!(embed.url, "http://elsewhere/");
        assert_eq!(embed.footer.text, "custom footer");
    }

    #[test]
    fn result_label_selects_color() {
        assert_eq!(result_color("SUCCESS"), COLOR_SUCCESS);
        assert_eq!(result_color("UNSTABLE"), COLOR_UNSTABLE);
        assert_eq!(result_color("ABORTED"), COLOR_ABORTED);
        assert_eq!(result_color("FAILURE"), COLOR_FAILURE);
        assert_eq!(result_color("NOT_BUILT"), COLOR_FAILURE);
        assert_eq!(result_color("success"), COLOR_FAILURE);
    }

    #[test]
    fn explicit_color_wins_over_result() {
        let mut request = request_with_text("oops");
        request.color = Some(0x123456);

        let mut context = success_context();
        context.result = Some("FAILURE".to_string());

        let payload = build_payload(&request, &context);
        assert_eq!(payload.embeds[0].color, 0x123456);

        request.color = Some(255);
        let payload = build_payload(&request, &context);
        assert_eq!(payload.embeds[0].color, 255);
    }

    #[test]
    fn explicit_color_is_masked_to_24_bits() {
        let mut request = request_with_text("x");
        request.color = Some(0xFF00_FF00);

        let payload = build_payload(&request, &BuildContext::default());
        assert_eq!(payload.embeds[0].color, 0x00FF00);
    }

    #[test]
    fn payload_round_trips_through_json() {
        let payload = build_payload(&request_with_text("Build finished"), &success_context());

        let json = serde_json::to_string(&payload).unwrap();
        let parsed: WebhookPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn payload_serializes_to_webhook_schema() {
        let payload = build_payload(&request_with_text("Build finished"), &success_context());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "username": "Jenkins",
                "avatar_url": DEFAULT_AVATAR_URL,
                "embeds": [{
                    "title": "demo-job",
                    "url": "http://x/1",
                    "description": "Build finished",
                    "color": 0x00FF00,
                    "footer": { "text": "Jenkins • SUCCESS" }
                }]
            })
        );
    }
}
