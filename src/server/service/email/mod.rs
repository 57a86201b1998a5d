//! Notification delivery.
//!
//! `EmailService` renders the templates in [`template`] and delivers them
//! over authenticated SMTP. Two behaviors are deliberate and load-bearing:
//!
//! - Without SMTP configuration the service logs the full message (with any
//!   embedded URL pulled out for convenience) instead of failing, so
//!   registration and moderation flows keep working in development.
//! - Transport errors are caught and logged, never returned. A bounced
//!   notification must not roll back the business action that triggered it.

pub mod template;

use lettre::{
    message::{Mailbox, MultiPart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use regex_lite::Regex;

use crate::server::{config::EmailConfig, error::AppError};

use self::template::EmailMessage;

#[derive(Clone)]
pub struct EmailService {
    transport: Option<AsyncSmtpTransport<Tokio1Executor>>,
    from: Option<Mailbox>,
    frontend_url: String,
}

impl EmailService {
    /// Builds a mailer delivering over authenticated SMTP.
    ///
    /// TLS accepts self-signed certificates so internal relays work out of
    /// the box. For Gmail hosts the From address is forced to the
    /// authenticated user regardless of the configured From, because Gmail
    /// rewrites or rejects mismatched senders.
    pub fn smtp(config: &EmailConfig, frontend_url: &str) -> Result<Self, AppError> {
        let tls = TlsParameters::builder(config.host.clone())
            .dangerous_accept_invalid_certs(true)
            .build()?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(config.host.clone())
            .port(config.port)
            .tls(Tls::Required(tls))
            .credentials(Credentials::new(
                config.user.clone(),
                config.password.clone(),
            ))
            .build();

        let from_address = if config.host.contains("gmail.com") {
            &config.user
        } else {
            &config.from
        };
        let from: Mailbox = from_address.parse()?;

        Ok(Self {
            transport: Some(transport),
            from: Some(from),
            frontend_url: frontend_url.to_string(),
        })
    }

    /// Builds a mailer that logs every message to the operator console.
    pub fn console(frontend_url: &str) -> Self {
        Self {
            transport: None,
            from: None,
            frontend_url: frontend_url.to_string(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.transport.is_some()
    }

    /// The From mailbox actually used on outgoing mail, when configured.
    pub fn from_mailbox(&self) -> Option<&Mailbox> {
        self.from.as_ref()
    }

    /// Sends the account-verification mail with the one-shot token link.
    pub async fn send_verification(&self, to: &str, username: &str, token: &str) {
        let verify_url = format!("{}/verify-email?token={}", self.frontend_url, token);
        self.send(to, template::verification(username, &verify_url))
            .await;
    }

    pub async fn send_welcome(&self, to: &str, username: &str) {
        self.send(to, template::welcome(username)).await;
    }

    pub async fn send_story_approved(&self, to: &str, username: &str, title: &str, slug: &str) {
        let story_url = format!("{}/truyen/{}", self.frontend_url, slug);
        self.send(to, template::story_approved(username, title, &story_url))
            .await;
    }

    pub async fn send_story_rejected(
        &self,
        to: &str,
        username: &str,
        title: &str,
        reason: Option<&str>,
    ) {
        self.send(to, template::story_rejected(username, title, reason))
            .await;
    }

    pub async fn send_system_notice(&self, to: &str, subject: &str, body: &str) {
        self.send(to, template::system_notice(subject, body)).await;
    }

    /// Delivers one rendered message. Never fails: transport errors are
    /// logged, and without a transport the message is logged instead.
    async fn send(&self, to: &str, message: EmailMessage) {
        let Some(transport) = &self.transport else {
            self.log_instead(to, &message);
            return;
        };

        // from is always Some when transport is
        let Some(from) = self.from.clone() else {
            self.log_instead(to, &message);
            return;
        };

        let to_mailbox: Mailbox = match to.parse() {
            Ok(mailbox) => mailbox,
            Err(e) => {
                tracing::error!("Refusing to send email to invalid address {}: {}", to, e);
                return;
            }
        };

        let email = Message::builder()
            .from(from)
            .to(to_mailbox)
            .subject(message.subject.clone())
            .multipart(MultiPart::alternative_plain_html(
                message.text.clone(),
                message.html.clone(),
            ));

        let email = match email {
            Ok(email) => email,
            Err(e) => {
                tracing::error!("Failed to build email '{}': {}", message.subject, e);
                return;
            }
        };

        match transport.send(email).await {
            Ok(_) => tracing::info!("Sent email '{}' to {}", message.subject, to),
            Err(e) => {
                tracing::error!("Failed to send email '{}' to {}: {}", message.subject, to, e)
            }
        }
    }

    fn log_instead(&self, to: &str, message: &EmailMessage) {
        tracing::warn!(
            "Email delivery not configured; logging instead.\nTo: {}\nSubject: {}\n{}",
            to,
            message.subject,
            message.text,
        );

        for url in extract_urls(&message.html) {
            tracing::warn!("Embedded URL: {}", url);
        }
    }
}

/// Pulls http(s) URLs out of a rendered body, for the console fallback.
fn extract_urls(body: &str) -> Vec<String> {
    let re = Regex::new(r#"https?://[^\s"<>]+"#).expect("URL pattern is valid");

    let mut urls: Vec<String> = re.find_iter(body).map(|m| m.as_str().to_string()).collect();
    urls.dedup();
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::EmailConfig;

    #[tokio::test]
    async fn unconfigured_mailer_logs_and_never_errors() {
        let mailer = EmailService::console("https://hungyeu.example");

        // Must complete without panicking or erroring even though nothing is
        // configured.
        mailer
            .send_verification("user@example.com", "thanh", "token123")
            .await;
        mailer.send_welcome("user@example.com", "thanh").await;
    }

    #[test]
    fn gmail_host_forces_from_to_authenticated_user() {
        let config = EmailConfig {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            user: "account@gmail.com".to_string(),
            password: "secret".to_string(),
            from: "noreply@hungyeu.example".to_string(),
        };

        let mailer = EmailService::smtp(&config, "https://hungyeu.example").unwrap();
        let from = mailer.from_mailbox().unwrap();

        assert_eq!(from.email.to_string(), "account@gmail.com");
    }

    #[test]
    fn non_gmail_host_keeps_configured_from() {
        let config = EmailConfig {
            host: "mail.hungyeu.example".to_string(),
            port: 587,
            user: "smtp-user".to_string(),
            password: "secret".to_string(),
            from: "noreply@hungyeu.example".to_string(),
        };

        let mailer = EmailService::smtp(&config, "https://hungyeu.example").unwrap();
        let from = mailer.from_mailbox().unwrap();

        assert_eq!(from.email.to_string(), "noreply@hungyeu.example");
    }

    #[test]
    fn extracts_urls_from_html_bodies() {
        let urls = extract_urls(
            "<a href=\"https://example.com/verify-email?token=abc\">Xác nhận</a>",
        );

        assert_eq!(urls, vec!["https://example.com/verify-email?token=abc"]);
    }
}
