// SPDX-License-Identifier: MPL-2.0
//! Canned alerts and shortcuts on top of [`Manager::enqueue`].
//!
//! Covers the everyday patterns of the inventory screens: per-kind
//! shortcuts, short-lived toasts, outcome messages for common actions and
//! the mapping from a failed API call to a user-facing error.

use super::alert::{AlertId, AlertKind, AlertOptions};
use super::manager::Manager;
use crate::clock::Clock;

/// Predefined alerts with fixed title and message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    LoginSuccess,
    LogoutSuccess,
    SaveSuccess,
    UpdateSuccess,
    DeleteSuccess,
    UploadSuccess,
    EmailSent,
    LoginFailed,
    NetworkError,
    ServerError,
    ValidationError,
    Unauthorized,
    NotFound,
    UploadFailed,
    EmailFailed,
    UnsavedChanges,
    ConfirmDelete,
    SessionExpired,
    VerificationRequired,
    Loading,
    Processing,
    Redirecting,
}

impl Preset {
    #[must_use]
    pub fn kind(self) -> AlertKind {
        use Preset::*;
        match self {
            LoginSuccess | LogoutSuccess | SaveSuccess | UpdateSuccess | DeleteSuccess
            | UploadSuccess | EmailSent => AlertKind::Success,
            LoginFailed | NetworkError | ServerError | ValidationError | Unauthorized
            | NotFound | UploadFailed | EmailFailed => AlertKind::Error,
            UnsavedChanges | ConfirmDelete | SessionExpired | VerificationRequired => {
                AlertKind::Warning
            }
            Loading | Processing | Redirecting => AlertKind::Info,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Preset::LoginSuccess => "Welcome Back!",
            Preset::LogoutSuccess => "Goodbye!",
            Preset::SaveSuccess => "Saved!",
            Preset::UpdateSuccess => "Updated!",
            Preset::DeleteSuccess => "Deleted!",
            Preset::UploadSuccess => "Uploaded!",
            Preset::EmailSent => "Sent!",
            Preset::LoginFailed => "Login Failed",
            Preset::NetworkError => "Network Error",
            Preset::ServerError => "Server Error",
            Preset::ValidationError => "Validation Error",
            Preset::Unauthorized => "Unauthorized",
            Preset::NotFound => "Not Found",
            Preset::UploadFailed => "Upload Failed",
            Preset::EmailFailed => "Email Failed",
            Preset::UnsavedChanges => "Warning",
            Preset::ConfirmDelete => CONFIRMATION_TITLE,
            Preset::SessionExpired => "Session Expired",
            Preset::VerificationRequired => "Verification Required",
            Preset::Loading => "Loading",
            Preset::Processing => "Processing",
            Preset::Redirecting => "Redirecting",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Preset::LoginSuccess => "Successfully logged in. Redirecting...",
            Preset::LogoutSuccess => "Successfully logged out. See you soon!",
            Preset::SaveSuccess => "Data saved successfully!",
            Preset::UpdateSuccess => "Data updated successfully!",
            Preset::DeleteSuccess => "Item deleted successfully!",
            Preset::UploadSuccess => "File uploaded successfully!",
            Preset::EmailSent => "Email sent successfully!",
            Preset::LoginFailed => "Invalid email or password. Please try again.",
            Preset::NetworkError => "Network error. Please check your connection.",
            Preset::ServerError => "Server error. Please try again later.",
            Preset::ValidationError => "Please check your input and try again.",
            Preset::Unauthorized => "You are not authorized to perform this action.",
            Preset::NotFound => "The requested resource was not found.",
            Preset::UploadFailed => "File upload failed. Please try again.",
            Preset::EmailFailed => "Failed to send email. Please try again.",
            Preset::UnsavedChanges => {
                "You have unsaved changes. Are you sure you want to leave?"
            }
            Preset::ConfirmDelete => "Are you sure you want to delete this item?",
            Preset::SessionExpired => "Your session has expired. Please log in again.",
            Preset::VerificationRequired => "Please verify that you are not a robot!",
            Preset::Loading => "Please wait while we process your request...",
            Preset::Processing => "Processing your request...",
            Preset::Redirecting => "Redirecting to the requested page...",
        }
    }

    /// Loading and processing notices stay until dismissed.
    #[must_use]
    pub fn options(self) -> AlertOptions {
        match self {
            Preset::Loading | Preset::Processing => AlertOptions::new().sticky(),
            _ => AlertOptions::new(),
        }
    }
}

const SUCCESS_TITLE: &str = "Success!";
const ERROR_TITLE: &str = "Error";
const CONFIRMATION_TITLE: &str = "Confirmation Required";

/// What a failed backend call reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFailure {
    /// HTTP status, when the request reached the server.
    pub status: Option<u16>,
    /// Error text from the transport or the response body.
    pub message: Option<String>,
}

impl ApiFailure {
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status: Some(status),
            message: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Title and message shown for this failure.
    ///
    /// 401, 404 and 422 map to their canned alerts. Otherwise the failure's
    /// own message wins, then `custom`, then the generic server error.
    #[must_use]
    pub fn describe(&self, custom: Option<&str>) -> (&'static str, String) {
        let canned = match self.status {
            Some(401) => Some(Preset::Unauthorized),
            Some(404) => Some(Preset::NotFound),
            Some(422) => Some(Preset::ValidationError),
            _ => None,
        };
        if let Some(preset) = canned {
            return (preset.title(), preset.message().to_string());
        }

        let message = self
            .message
            .as_deref()
            .or(custom)
            .unwrap_or(Preset::ServerError.message());
        (ERROR_TITLE, message.to_string())
    }
}

impl<C: Clock> Manager<C> {
    pub fn success(&mut self, title: impl Into<String>, message: impl Into<String>) -> AlertId {
        self.enqueue(AlertKind::Success, title, message, AlertOptions::new())
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) -> AlertId {
        self.enqueue(AlertKind::Error, title, message, AlertOptions::new())
    }

    pub fn warning(&mut self, title: impl Into<String>, message: impl Into<String>) -> AlertId {
        self.enqueue(AlertKind::Warning, title, message, AlertOptions::new())
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) -> AlertId {
        self.enqueue(AlertKind::Info, title, message, AlertOptions::new())
    }

    /// Short-lived alert titled after its kind.
    pub fn toast(&mut self, kind: AlertKind, message: impl Into<String>) -> AlertId {
        let duration = self.settings().toast_duration;
        self.enqueue(
            kind,
            kind.default_title(),
            message,
            AlertOptions::new().duration(duration),
        )
    }

    pub fn preset(&mut self, preset: Preset) -> AlertId {
        self.enqueue(
            preset.kind(),
            preset.title(),
            preset.message(),
            preset.options(),
        )
    }

    /// Success alert for a completed API call.
    pub fn api_success(&mut self, message: Option<&str>) -> AlertId {
        let message = message.unwrap_or(Preset::SaveSuccess.message());
        self.success(SUCCESS_TITLE, message)
    }

    /// Error alert for a failed API call. See [`ApiFailure::describe`].
    pub fn api_error(&mut self, failure: &ApiFailure, custom: Option<&str>) -> AlertId {
        let (title, message) = failure.describe(custom);
        tracing::debug!(status = ?failure.status, title, "api failure reported");
        self.error(title, message)
    }

    /// Validation error, optionally naming the offending field.
    pub fn validation_error(&mut self, field: Option<&str>) -> AlertId {
        let message = match field {
            Some(field) => format!("Please check the {field} field and try again."),
            None => Preset::ValidationError.message().to_string(),
        };
        self.error(Preset::ValidationError.title(), message)
    }

    /// Sticky info alert used while a request is running.
    pub fn loading_notice(&mut self, message: Option<&str>) -> AlertId {
        self.enqueue(
            AlertKind::Info,
            Preset::Loading.title(),
            message.unwrap_or(Preset::Loading.message()),
            AlertOptions::new().sticky(),
        )
    }

    pub fn confirmation(&mut self, message: impl Into<String>) -> AlertId {
        self.warning(CONFIRMATION_TITLE, message)
    }
}
