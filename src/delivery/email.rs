use mailer::{Envelope, MailClient};
use tracing::info;

use crate::config::MailSettings;
use crate::delivery::traits::DigestSink;
use crate::domain::{Article, DigestMessage};
use crate::errors::{DigestError, DigestResult};

/// Delivers digests over SMTP. Credentials are checked when a digest is
/// sent, not at construction, so a misconfigured sink still yields a
/// structured error for the request.
pub struct EmailSink {
    settings: MailSettings,
}

impl EmailSink {
    pub fn new(settings: MailSettings) -> Self {
        Self { settings }
    }

    fn client(&self) -> DigestResult<MailClient> {
        let origin = self
            .settings
            .origin_email
            .as_deref()
            .ok_or_else(|| DigestError::MissingEnvVar("ORIGIN_EMAIL".to_string()))?;

        let password = self
            .settings
            .password
            .as_deref()
            .ok_or_else(|| DigestError::MissingEnvVar("EMAIL_PASSWORD".to_string()))?;

        Ok(MailClient::new(
            &self.settings.smtp_host,
            self.settings.smtp_port,
            origin,
            password,
        )?)
    }
}

impl DigestSink for EmailSink {
    fn deliver(&self, recipient: &str, articles: &[Article]) -> DigestResult<()> {
        let client = self.client()?;
        let message = DigestMessage::from_articles(articles);

        let text_body = message.text_body();
        let html_body = message.html_body();

        client
            .send(&Envelope {
                to: recipient,
                subject: &message.subject,
                text_body: &text_body,
                html_body: &html_body,
            })
            .map_err(|e| DigestError::Delivery(e.to_string()))?;

        info!(
            to = %recipient,
            from = %client.from_address(),
            articles = articles.len(),
            "Digest email sent"
        );

        Ok(())
    }
}
