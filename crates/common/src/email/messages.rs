use serde::{Deserialize, Serialize};

/// A free-form email.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Email {
    pub to: String,
    pub subject: String,
    pub html_body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_body: Option<String>,
}

impl Email {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
            text_body: None,
        }
    }

    pub fn with_text_body(self, text_body: impl Into<String>) -> Self {
        Email {
            text_body: Some(text_body.into()),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SendEmailResult {
    pub success: bool,
    /// Identifier assigned by the transport, when it reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

impl SendEmailResult {
    pub fn delivered() -> Self {
        Self {
            success: true,
            message_id: None,
        }
    }
}

/// Notice sent to a form owner once the form goes live.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormPublishedEmail {
    pub to: String,
    pub form_title: String,
    pub form_url: String,
}

/// One-time passcode for sign-in or verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OtpEmail {
    pub to: String,
    pub code: String,
    pub expires_in_minutes: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InvitationEmail {
    pub to: String,
    pub inviter_name: String,
    pub workspace_name: String,
    pub invitation_url: String,
}
