// src/services/sms_client.rs
// DOCUMENTATION: SMS gateway client
// PURPOSE: Deliver verification codes; logs instead of sending when no gateway is configured

use crate::config::Config;
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// SMS gateway client
/// DOCUMENTATION: Posts {from, to, text} JSON to the configured gateway
pub struct SmsClient {
    /// HTTP client for making requests
    client: Client,
    /// Gateway endpoint; None runs in dry-run mode
    gateway_url: Option<String>,
    /// Optional bearer token
    api_key: Option<String>,
    /// Sender number
    sender: String,
}

#[derive(Debug, Serialize)]
struct SmsPayload<'a> {
    from: &'a str,
    to: &'a str,
    text: &'a str,
}

impl SmsClient {
    pub fn new(gateway_url: String, api_key: String, sender: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build SMS HTTP client")?;

        Ok(Self {
            client,
            gateway_url: Some(gateway_url).filter(|url| !url.is_empty()),
            api_key: Some(api_key).filter(|key| !key.is_empty()),
            sender,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            config.sms_gateway_url.clone(),
            config.sms_gateway_api_key.clone(),
            config.sms_sender.clone(),
        )
    }

    pub fn is_dry_run(&self) -> bool {
        self.gateway_url.is_none()
    }

    /// Send `text` to `to` (international format)
    pub async fn send(&self, to: &str, text: &str) -> Result<()> {
        let url = match &self.gateway_url {
            Some(url) => url,
            None => {
                log::info!("[dry-run] SMS from {} to {}: {}", self.sender, to, text);
                return Ok(());
            }
        };

        let payload = SmsPayload {
            from: &self.sender,
            to,
            text,
        };

        let mut request = self.client.post(url).json(&payload);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .context("SMS gateway request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("SMS gateway returned {}: {}", status, body);
        }

        log::debug!("SMS delivered to {}", to);
        Ok(())
    }
}

/// Substitute the PIN into the message template
pub fn render_sms_text(template: &str, code: &str) -> String {
    template.replace("{code}", code)
}
