use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::instrument;

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

/// SMTP-backed notification sender. All callers treat sends as
/// best-effort; a failed mail is logged and never fails the request
/// that triggered it.
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Sent right after a student registers, while the account is still
    /// pending validation.
    #[instrument(skip(self))]
    pub async fn send_student_welcome_email(
        &self,
        to_email: &str,
        full_name: &str,
        student_id: &str,
    ) -> Result<(), AppError> {
        let html_body = self.welcome_template(full_name, student_id);
        let text_body = format!(
            "Welcome {}!\n\n\
             Your registration with Merit College has been received.\n\
             Your student ID: {}\n\n\
             Your account is pending validation. You will be notified once\n\
             an administrator has reviewed your registration.\n\n\
             Merit College",
            full_name, student_id
        );

        self.send_email(to_email, "Welcome to Merit College", &text_body, &html_body)
            .await
    }

    /// Sent when an admin activates a pending student account.
    #[instrument(skip(self))]
    pub async fn send_account_validated_email(
        &self,
        to_email: &str,
        full_name: &str,
    ) -> Result<(), AppError> {
        let portal_link = format!("{}/login", self.config.frontend_url);
        let html_body = self.validated_template(full_name, &portal_link);
        let text_body = format!(
            "Dear {},\n\n\
             Your account has been validated. You can now log in to the\n\
             student portal:\n\
             {}\n\n\
             Merit College",
            full_name, portal_link
        );

        self.send_email(
            to_email,
            "Account Validated - Merit College",
            &text_body,
            &html_body,
        )
        .await
    }

    #[instrument(skip(self, html_body, text_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            tracing::debug!(to_email, subject, "email sending disabled, skipping");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::InternalError(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::InternalError(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::InternalError(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::InternalError(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::InternalError(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::InternalError(format!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn welcome_template(&self, name: &str, student_id: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Welcome to Merit College</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #1E3A8A; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Merit College</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333;">Welcome, {}!</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Your registration has been received. Your student ID is:
                            </p>
                            <p style="margin: 0 0 20px 0; color: #1E3A8A; font-size: 20px; font-weight: bold;">
                                {}
                            </p>
                            <p style="margin: 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Your account is pending validation. You will be notified once an
                                administrator has reviewed your registration.
                            </p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Merit College. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
            name, student_id
        )
    }

    fn validated_template(&self, name: &str, portal_link: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Account Validated</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #1E3A8A; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Merit College</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333;">Account Validated</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Dear <strong>{}</strong>,
                            </p>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Your account has been validated. You can now log in to the student portal.
                            </p>
                            <table width="100%" cellpadding="0" cellspacing="0" style="margin: 30px 0;">
                                <tr>
                                    <td align="center">
                                        <a href="{}" style="display: inline-block; padding: 14px 40px; background-color: #1E3A8A; color: #ffffff; text-decoration: none; border-radius: 6px; font-size: 16px; font-weight: bold;">Open Portal</a>
                                    </td>
                                </tr>
                            </table>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Merit College. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
            name, portal_link
        )
    }
}
