use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::Serialize;
use tracing::error;

use crate::domain::repositories::mailer::TransactionalMailer;

const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

/// ZeptoMail template-send client.
/// https://www.zoho.com/zeptomail/help/api/email-templates.html
pub struct ZeptoMailClient {
    http: reqwest::Client,
    token: String,
    from_address: String,
    from_name: String,
}

#[derive(Debug, Serialize)]
struct EmailAddress<'a> {
    address: &'a str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct Recipient<'a> {
    email_address: EmailAddress<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateMailBody<'a> {
    mail_template_key: &'a str,
    from: EmailAddress<'a>,
    to: Vec<Recipient<'a>>,
    merge_info: &'a serde_json::Value,
    subject: &'a str,
}

impl ZeptoMailClient {
    pub fn new(token: String, from_address: String, from_name: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(OUTBOUND_TIMEOUT)
            .build()
            .context("failed to build ZeptoMail http client")?;

        Ok(Self {
            http,
            token,
            from_address,
            from_name,
        })
    }
}

#[async_trait]
impl TransactionalMailer for ZeptoMailClient {
    async fn send_template(
        &self,
        template_key: &str,
        to_address: &str,
        to_name: &str,
        subject: &str,
        merge_info: serde_json::Value,
    ) -> Result<()> {
        let body = TemplateMailBody {
            mail_template_key: template_key,
            from: EmailAddress {
                address: &self.from_address,
                name: &self.from_name,
            },
            to: vec![Recipient {
                email_address: EmailAddress {
                    address: to_address,
                    name: to_name,
                },
            }],
            merge_info: &merge_info,
            subject,
        };

        let resp = self
            .http
            .post("https://api.zeptomail.com/v1.1/email/template")
            .header(AUTHORIZATION, format!("Zoho-enczapikey {}", self.token))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let response_body = match resp.text().await {
                Ok(text) if !text.is_empty() => text,
                Ok(_) => "<empty response body>".to_string(),
                Err(err) => format!("<failed to read response body: {err}>"),
            };

            error!(
                status = %status,
                response_body = %response_body,
                template_key,
                "zeptomail template send failed"
            );

            anyhow::bail!("ZeptoMail send failed (status {})", status);
        }

        Ok(())
    }
}
