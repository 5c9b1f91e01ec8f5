mod messages;

pub use messages::{Email, FormPublishedEmail, InvitationEmail, OtpEmail, SendEmailResult};

use std::{fmt::Debug, future::Future};

/// Outbound email collaborator used by the form backend.
///
/// Implementations hand the message to a transport and report whether it was
/// accepted. The `bool` returned by the templated senders is the transport's
/// acceptance flag.
pub trait EmailSender: Clone + Debug + Send + Sync {
    fn send_email(
        &self,
        email: Email,
    ) -> impl Future<Output = Result<SendEmailResult, EmailError>> + Send;
    fn send_form_published_email(
        &self,
        notice: FormPublishedEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send;
    fn send_otp_email(
        &self,
        otp: OtpEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send;
    fn send_invitation_email(
        &self,
        invitation: InvitationEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmailError {
    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),
    #[error("Email rejected with status {status}: {reason}")]
    Rejected {
        status: u16,
        reason: String,
    },
    #[error("Transport error: {0}")]
    Transport(String),
}
