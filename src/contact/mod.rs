use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ── Submission ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    pub message: String,
}

pub const MAX_MESSAGE_LEN: usize = 4000;

/// Checks a submission before delivery. Returns a human-readable
/// reason on the first failing field.
pub fn validate(submission: &ContactSubmission) -> Result<(), String> {
    if submission.name.trim().is_empty() {
        return Err("name must not be empty".to_string());
    }
    if !is_plausible_email(&submission.email) {
        return Err(format!("'{}' is not a valid email address", submission.email));
    }
    if submission.message.trim().is_empty() {
        return Err("message must not be empty".to_string());
    }
    if submission.message.len() > MAX_MESSAGE_LEN {
        return Err(format!(
            "message is too long ({} chars, max {})",
            submission.message.len(),
            MAX_MESSAGE_LEN
        ));
    }
    Ok(())
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

// ── Delivery ────────────────────────────────────────────────────────

/// How long a simulated delivery takes when no forms backend is
/// configured. Mirrors the latency a visitor would see from a real one.
const SIMULATED_LATENCY: Duration = Duration::from_millis(900);

/// Delivers validated contact submissions to the forms backend.
///
/// The backend URL comes from `MERIDIAN_CONTACT_ENDPOINT`. Without one,
/// submissions are accepted after a fixed simulated delay so the site
/// remains fully demoable.
pub struct ContactService {
    endpoint: Option<String>,
    client: reqwest::Client,
}

impl ContactService {
    pub fn new() -> Self {
        let endpoint = std::env::var("MERIDIAN_CONTACT_ENDPOINT").ok();
        if endpoint.is_some() {
            info!("MERIDIAN_CONTACT_ENDPOINT set, contact submissions will be forwarded");
        } else {
            warn!("MERIDIAN_CONTACT_ENDPOINT not set, contact submissions will be simulated");
        }
        Self {
            endpoint,
            client: reqwest::Client::new(),
        }
    }

    /// Validate and deliver one submission.
    pub async fn deliver(&self, submission: &ContactSubmission) -> Result<(), String> {
        validate(submission)?;

        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint,
            None => {
                tokio::time::sleep(SIMULATED_LATENCY).await;
                info!("Simulated contact delivery for {}", submission.email);
                return Ok(());
            }
        };

        let response = self
            .client
            .post(endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(format!("Forms backend returned {}: {}", status, text));
        }

        info!("Contact submission forwarded for {}", submission.email);
        Ok(())
    }
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Jordan Mwangi".to_string(),
            email: "jordan@example.com".to_string(),
            company: Some("Example Co".to_string()),
            message: "We'd like help scoping a forecasting project.".to_string(),
        }
    }

    #[test]
    fn well_formed_submission_passes() {
        assert!(validate(&submission()).is_ok());
    }

    #[test]
    fn company_is_optional() {
        let mut sub = submission();
        sub.company = None;
        assert!(validate(&sub).is_ok());
    }

    #[test]
    fn blank_fields_are_rejected() {
        let mut sub = submission();
        sub.name = "   ".to_string();
        assert!(validate(&sub).is_err());

        let mut sub = submission();
        sub.message = String::new();
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "plainaddress", "no-domain@", "@no-local.com", "a@b"] {
            let mut sub = submission();
            sub.email = bad.to_string();
            assert!(validate(&sub).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn overlong_message_is_rejected() {
        let mut sub = submission();
        sub.message = "x".repeat(MAX_MESSAGE_LEN + 1);
        assert!(validate(&sub).is_err());
    }

    #[test]
    fn submission_json_shape_is_stable() {
        let json = serde_json::to_value(submission()).unwrap();
        assert_eq!(json["name"], "Jordan Mwangi");
        assert_eq!(json["email"], "jordan@example.com");

        // company may be omitted by clients
        let parsed: ContactSubmission = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","message":"hi"}"#,
        )
        .unwrap();
        assert!(parsed.company.is_none());
    }
}
