//! Outbound email relay used by the contact form.

use std::future::Future;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The four contact-form fields, sent as the template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

impl From<reqwest::Error> for RelayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Delivers a contact message somewhere a human will read it.
pub trait Relay {
    fn submit(&self, message: &ContactMessage) -> impl Future<Output = Result<(), RelayError>>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: "service_zmhqaxv".to_string(),
            template_id: "template_r8hbat3".to_string(),
            public_key: "psD_uSeLaHogI8mlo".to_string(),
        }
    }
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactMessage,
}

impl<'a> EmailJsRequest<'a> {
    fn new(config: &'a RelayConfig, message: &'a ContactMessage) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: message,
        }
    }
}

/// EmailJS REST relay. Runs over `fetch` in the browser.
#[derive(Debug, Clone, Default)]
pub struct EmailJsRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

impl Relay for EmailJsRelay {
    async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&EmailJsRequest::new(&self.config, message))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RelayError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio::{
        io::{AsyncReadExt, AsyncWriteExt},
        net::TcpListener,
    };

    /// Answers a single request with `status` and `body`, returns its URL.
    async fn serve_once(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            // Drain headers and body so closing the socket doesn't reset it.
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            let (name, value) = l.split_once(':')?;
                            name.eq_ignore_ascii_case("content-length")
                                .then(|| value.trim().parse::<usize>().ok())
                                .flatten()
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
        });
        format!("http://{addr}/send")
    }

    fn relay_to(endpoint: String) -> EmailJsRelay {
        EmailJsRelay::new(RelayConfig {
            endpoint,
            ..RelayConfig::default()
        })
    }

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Bonjour".to_string(),
            message: "Un poste à pourvoir".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_maps_responses() {
        let rejected = relay_to(serve_once("400 Bad Request", "bad tpl").await)
            .submit(&message())
            .await;
        assert_eq!(
            rejected,
            Err(RelayError::Rejected {
                status: StatusCode::BAD_REQUEST,
                body: "bad tpl".to_string(),
            })
        );

        let accepted = relay_to(serve_once("200 OK", "OK").await)
            .submit(&message())
            .await;
        assert_eq!(accepted, Ok(()));
    }

    #[tokio::test]
    async fn test_submit_unreachable_is_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap()
            .local_addr()
            .unwrap();
        let outcome = relay_to(format!("http://{addr}/send"))
            .submit(&message())
            .await;
        assert!(matches!(outcome, Err(RelayError::Transport(_))), "{outcome:?}");
    }

    #[test]
    fn test_emailjs_request_shape() {
        let config = RelayConfig::default();
        let message = message();
        let body = serde_json::to_value(EmailJsRequest::new(&config, &message)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_zmhqaxv",
                "template_id": "template_r8hbat3",
                "user_id": "psD_uSeLaHogI8mlo",
                "template_params": {
                    "name": "Ada",
                    "email": "ada@example.com",
                    "subject": "Bonjour",
                    "message": "Un poste à pourvoir"
                }
            })
        );
    }

    #[test]
    fn test_default_endpoint() {
        assert_eq!(EmailJsRelay::default().config.endpoint, EMAILJS_ENDPOINT);
    }

    #[test]
    fn test_rejected_message() {
        let err = RelayError::Rejected {
            status: StatusCode::BAD_REQUEST,
            body: "The template ID is invalid".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "relay rejected the message (400 Bad Request): The template ID is invalid"
        );
    }
}
