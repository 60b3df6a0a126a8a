//! Outbound mail bindings for Rust
//! Provides a small SMTP client that sends multipart (plain text + HTML) messages

use lettre::address::AddressError;
use lettre::message::{header::ContentType, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Invalid address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddressError,
    },
    #[error("Failed to build message: {0}")]
    Build(#[from] lettre::error::Error),
    #[error("SMTP transport failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),
}

/// Content of a single outgoing message
#[derive(Debug, Clone)]
pub struct Envelope<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub text_body: &'a str,
    pub html_body: &'a str,
}

pub struct MailClient {
    from: Mailbox,
    transport: SmtpTransport,
}

impl MailClient {
    /// Connects to `host` using implicit TLS (SMTPS) and authenticates as `username`.
    /// The username doubles as the sender address.
    pub fn new(host: &str, port: u16, username: &str, password: &str) -> Result<Self, MailError> {
        if username.is_empty() {
            return Err(MailError::MissingCredential("username"));
        }
        if password.is_empty() {
            return Err(MailError::MissingCredential("password"));
        }

        let from = parse_mailbox(username)?;
        let credentials = Credentials::new(username.to_string(), password.to_string());

        let transport = SmtpTransport::relay(host)?
            .port(port)
            .credentials(credentials)
            .build();

        Ok(Self { from, transport })
    }

    /// Sender address used for every message
    pub fn from_address(&self) -> String {
        self.from.to_string()
    }

    /// Build the multipart message without sending it
    pub fn compose(&self, envelope: &Envelope<'_>) -> Result<Message, MailError> {
        let to = parse_mailbox(envelope.to)?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(envelope.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(envelope.text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(envelope.html_body.to_string()),
                    ),
            )?;

        Ok(message)
    }

    /// Send a message, blocking until the relay accepts or rejects it
    pub fn send(&self, envelope: &Envelope<'_>) -> Result<(), MailError> {
        let message = self.compose(envelope)?;
        self.transport.send(&message)?;
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse::<Mailbox>()
        .map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> MailClient {
        MailClient::new("smtp.example.com", 465, "digest@example.com", "secret").unwrap()
    }

    #[test]
    fn test_missing_username_rejected() {
        let result = MailClient::new("smtp.example.com", 465, "", "secret");
        assert!(matches!(result, Err(MailError::MissingCredential("username"))));
    }

    #[test]
    fn test_missing_password_rejected() {
        let result = MailClient::new("smtp.example.com", 465, "digest@example.com", "");
        assert!(matches!(result, Err(MailError::MissingCredential("password"))));
    }

    #[test]
    fn test_invalid_sender_rejected() {
        let result = MailClient::new("smtp.example.com", 465, "not-an-address", "secret");
        assert!(matches!(result, Err(MailError::InvalidAddress { .. })));
    }

    #[test]
    fn test_compose_multipart_message() {
        let envelope = Envelope {
            to: "reader@example.com",
            subject: "Your daily news digest",
            text_body: "plain body",
            html_body: "<p>html body</p>",
        };

        let message = client().compose(&envelope).unwrap();
        let raw = String::from_utf8(message.formatted()).unwrap();

        assert!(raw.contains("Subject: Your daily news digest"));
        assert!(raw.contains("To: reader@example.com"));
        assert!(raw.contains("text/plain"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn test_compose_rejects_bad_recipient() {
        let envelope = Envelope {
            to: "nobody",
            subject: "s",
            text_body: "t",
            html_body: "h",
        };

        assert!(matches!(
            client().compose(&envelope),
            Err(MailError::InvalidAddress { .. })
        ));
    }
}
