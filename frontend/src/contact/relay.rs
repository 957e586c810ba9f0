use gloo_net::http::Request;
use serde::Serialize;
use thiserror::Error;
use web_sys::AbortSignal;

use super::request::ContactRequest;
use crate::config;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("relay configuration is missing {0}")]
    MissingConfig(&'static str),
    #[error("relay request failed: {0}")]
    Request(String),
    #[error("relay rejected the message ({status}): {text}")]
    Rejected { status: u16, text: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_parts(
            config::EMAILJS_SERVICE_ID,
            config::EMAILJS_TEMPLATE_ID,
            config::EMAILJS_PUBLIC_KEY,
        )
    }

    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Result<Self, RelayError> {
        fn required(value: Option<&str>, name: &'static str) -> Result<String, RelayError> {
            match value {
                Some(v) if !v.is_empty() => Ok(v.to_string()),
                _ => Err(RelayError::MissingConfig(name)),
            }
        }

        Ok(Self {
            service_id: required(service_id, "EMAILJS_SERVICE_ID")?,
            template_id: required(template_id, "EMAILJS_TEMPLATE_ID")?,
            public_key: required(public_key, "EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Serialize, Debug)]
pub struct TemplateParams<'a> {
    pub from_name: &'a str,
    pub company_name: &'a str,
    pub from_email: &'a str,
    pub phone: &'a str,
    pub message: &'a str,
    pub to_email: &'a str,
    pub reply_to: &'a str,
}

#[derive(Serialize, Debug)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(relay: &'a RelayConfig, request: &'a ContactRequest) -> Self {
        Self {
            service_id: &relay.service_id,
            template_id: &relay.template_id,
            user_id: &relay.public_key,
            template_params: TemplateParams {
                from_name: &request.name,
                company_name: &request.company_name,
                from_email: &request.email,
                phone: &request.phone,
                message: &request.message,
                to_email: config::CONTACT_INBOX,
                reply_to: &request.email,
            },
        }
    }
}

/// Builds the payload, or fails with the configuration gap.
pub fn prepare<'a>(
    relay: &'a Result<RelayConfig, RelayError>,
    request: &'a ContactRequest,
) -> Result<SendRequest<'a>, RelayError> {
    let relay = relay.as_ref().map_err(Clone::clone)?;
    Ok(SendRequest::new(relay, request))
}

/// Hands one contact request to the relay.
///
/// Configuration is checked before anything touches the network. `signal`
/// lets the owner abort the request when it goes away.
pub async fn send(request: &ContactRequest, signal: Option<&AbortSignal>) -> Result<(), RelayError> {
    let relay = RelayConfig::from_env();
    let body = prepare(&relay, request)?;

    let response = Request::post(config::relay_endpoint())
        .abort_signal(signal)
        .json(&body)
        .map_err(|e| RelayError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| RelayError::Request(e.to_string()))?;

    if response.ok() {
        return Ok(());
    }

    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    Err(RelayError::Rejected { status, text })
}

pub fn is_scope_error(err: &RelayError) -> bool {
    matches!(err, RelayError::Rejected { text, .. } if text.contains("insufficient authentication scopes"))
}

/// Writes the developer-facing side of a failed send. Users only ever see
/// the generic failure banner.
pub fn report(err: &RelayError) {
    gloo_console::error!("Email sending failed:", err.to_string());
    if let RelayError::Rejected { text, .. } = err {
        gloo_console::error!("EmailJS Error:", text.clone());
    }
    if is_scope_error(err) {
        gloo_console::error!(
            "Fix: re-authorize the mail service in the EmailJS dashboard with the required scopes"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn relay() -> RelayConfig {
        RelayConfig::from_parts(Some("service_1"), Some("template_1"), Some("pk_1")).unwrap()
    }

    fn jane() -> ContactRequest {
        ContactRequest {
            name: "Jane".to_string(),
            company_name: "Acme".to_string(),
            email: "jane@acme.com".to_string(),
            phone: "+1 555 0100".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn payload_carries_fields_and_fixed_addresses() {
        let relay = relay();
        let request = jane();
        let body = serde_json::to_value(SendRequest::new(&relay, &request)).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_1",
                "template_id": "template_1",
                "user_id": "pk_1",
                "template_params": {
                    "from_name": "Jane",
                    "company_name": "Acme",
                    "from_email": "jane@acme.com",
                    "phone": "+1 555 0100",
                    "message": "Hello",
                    "to_email": config::CONTACT_INBOX,
                    "reply_to": "jane@acme.com",
                }
            })
        );
    }

    #[test]
    fn missing_config_names_the_first_gap() {
        assert_eq!(
            RelayConfig::from_parts(None, Some("t"), Some("k")),
            Err(RelayError::MissingConfig("EMAILJS_SERVICE_ID"))
        );
        assert_eq!(
            RelayConfig::from_parts(Some("s"), Some(""), None),
            Err(RelayError::MissingConfig("EMAILJS_TEMPLATE_ID"))
        );
        assert_eq!(
            RelayConfig::from_parts(Some("s"), Some("t"), None),
            Err(RelayError::MissingConfig("EMAILJS_PUBLIC_KEY"))
        );
    }

    #[test]
    fn unconfigured_relay_fails_before_building_a_payload() {
        let missing = RelayConfig::from_parts(Some("service_1"), None, Some("pk_1"));
        let request = jane();
        assert_eq!(
            prepare(&missing, &request).map(|_| ()),
            Err(RelayError::MissingConfig("EMAILJS_TEMPLATE_ID"))
        );

        let configured = Ok(relay());
        let body = prepare(&configured, &request).map(|body| body.template_params.reply_to);
        assert_eq!(body, Ok("jane@acme.com"));
    }

    #[test]
    fn scope_errors_are_recognised() {
        let scoped = RelayError::Rejected {
            status: 412,
            text: "Gmail_API: Request had insufficient authentication scopes.".to_string(),
        };
        assert!(is_scope_error(&scoped));
        assert!(!is_scope_error(&RelayError::Rejected { status: 400, text: "bad".to_string() }));
        assert!(!is_scope_error(&RelayError::MissingConfig("EMAILJS_PUBLIC_KEY")));
    }
}
