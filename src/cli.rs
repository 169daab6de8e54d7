use clap::Parser;

use crate::models::NotificationRequest;

/// Send a Discord build notification from a Jenkins job.
///
/// Job name, build URL and result are read from the environment Jenkins
/// provides (JOB_NAME, BUILD_URL, BUILD_RESULT); flags override the
/// derived presentation field by field.
#[derive(Parser, Debug)]
#[command(name = "discord-notify", version)]
pub struct Cli {
    /// Webhook URL; falls back to the DISCORD_WEBHOOK_URL secret when omitted.
    #[arg(long)]
    pub url: Option<String>,

    /// Message body, shown as the embed description. Required to send.
    #[arg(long)]
    pub text: Option<String>,

    /// Embed title; defaults to the job name.
    #[arg(long)]
    pub title: Option<String>,

    /// Embed title link; defaults to the build URL.
    #[arg(long)]
    pub link: Option<String>,

    /// 24-bit RGB embed color (decimal, 0x-hex or #-hex); defaults by build result.
    #[arg(long, value_parser = parse_color)]
    pub color: Option<u32>,

    /// Sender display name; defaults to "Jenkins".
    #[arg(long)]
    pub username: Option<String>,

    /// Sender avatar URL.
    #[arg(long)]
    pub avatar: Option<String>,

    /// Embed footer text; defaults to "Jenkins • <result>".
    #[arg(long)]
    pub footer: Option<String>,
}

impl Cli {
    pub fn into_request(self) -> NotificationRequest {
        NotificationRequest {
            url: self.url,
            text: self.text,
            title: self.title,
            link: self.link,
            color: self.color,
            username: self.username,
            avatar: self.avatar,
            footer: self.footer,
        }
    }
}

fn parse_color(raw: &str) -> Result<u32, String> {
    let trimmed = raw.trim();
    let value = if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .or_else(|| trimmed.strip_prefix('#'))
    {
        u32::from_str_radix(hex, 16)
    } else {
        trimmed.parse()
    }
    .map_err(|_| format!("'{raw}' is not a color literal"))?;

    if value > 0xFF_FFFF {
        return Err(format!("color '{raw}' exceeds the 24-bit RGB range"));
    }
    Ok(value)
}
