use crate::{
    config::MockEmailConfig,
    email::{
        Email, EmailError, EmailSender, FormPublishedEmail, InvitationEmail, OtpEmail,
        SendEmailResult,
    },
    testing::Stub,
};

/// Mock email sender for testing
///
/// Every operation resolves successfully unless its stub is reconfigured.
#[derive(Clone, Debug)]
pub struct MockEmailSender {
    pub send_email: Stub<Email, SendEmailResult, EmailError>,
    pub send_form_published_email: Stub<FormPublishedEmail, bool, EmailError>,
    pub send_otp_email: Stub<OtpEmail, bool, EmailError>,
    pub send_invitation_email: Stub<InvitationEmail, bool, EmailError>,
}

impl Default for MockEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmailSender {
    pub fn new() -> Self {
        Self::from_config(&MockEmailConfig::default())
    }

    pub fn from_config(config: &MockEmailConfig) -> Self {
        let sent = SendEmailResult {
            message_id: config.message_id.clone(),
            ..SendEmailResult::delivered()
        };
        Self {
            send_email: Stub::resolving("send_email", sent),
            send_form_published_email: Stub::resolving("send_form_published_email", true),
            send_otp_email: Stub::resolving("send_otp_email", true),
            send_invitation_email: Stub::resolving("send_invitation_email", true),
        }
    }

    /// Total number of emails of any kind handed to this sender
    pub fn total_calls(&self) -> usize {
        self.send_email.call_count()
            + self.send_form_published_email.call_count()
            + self.send_otp_email.call_count()
            + self.send_invitation_email.call_count()
    }

    pub fn reset(&self) {
        self.send_email.reset();
        self.send_form_published_email.reset();
        self.send_otp_email.reset();
        self.send_invitation_email.reset();
    }
}

// Calls are recorded when the method is called, not when the future is polled.
impl EmailSender for MockEmailSender {
    fn send_email(
        &self,
        email: Email,
    ) -> impl Future<Output = Result<SendEmailResult, EmailError>> + Send {
        let result = self.send_email.invoke(email);
        async move { result }
    }

    fn send_form_published_email(
        &self,
        notice: FormPublishedEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send {
        let result = self.send_form_published_email.invoke(notice);
        async move { result }
    }

    fn send_otp_email(
        &self,
        otp: OtpEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send {
        let result = self.send_otp_email.invoke(otp);
        async move { result }
    }

    fn send_invitation_email(
        &self,
        invitation: InvitationEmail,
    ) -> impl Future<Output = Result<bool, EmailError>> + Send {
        let result = self.send_invitation_email.invoke(invitation);
        async move { result }
    }
}
