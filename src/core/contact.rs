// Contact form outcomes and the status text shown for each of them.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form endpoint answered with HTTP {status}")]
    Rejected { status: u16 },
    #[error("network error: {0}")]
    Network(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Sending,
    Sent,
    Failed,
    NetworkError,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Sending => "Sending…",
            FormStatus::Sent => "Thank you! Your message has been sent.",
            FormStatus::Failed => "Oops, something went wrong. Please try again later.",
            FormStatus::NetworkError => "Network error. Please try again.",
        }
    }

    pub fn from_result(result: &Result<(), SubmitError>) -> Self {
        match result {
            Ok(()) => FormStatus::Sent,
            Err(SubmitError::Rejected { .. }) => FormStatus::Failed,
            Err(SubmitError::Network(_)) => FormStatus::NetworkError,
        }
    }

    /// Only a delivered message clears the form.
    pub fn resets_form(self) -> bool {
        matches!(self, FormStatus::Sent)
    }
}

/// Map a completed HTTP exchange to the submission result.
#[inline]
pub fn check_response(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Rejected { status })
    }
}
