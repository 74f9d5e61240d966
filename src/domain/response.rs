use crate::domain::value::StatusCode;

/// Decoded gateway answer for one send.
///
/// Rejections reported by the gateway (any known code other than `1101`) are ordinary
/// outcomes; check [`SendOutcome::is_success`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendOutcome {
    pub status_code: StatusCode,
    /// Description from the status table, verbatim.
    pub description: &'static str,
    /// Fields after the first `|`, uninterpreted.
    pub extra_fields: Vec<String>,
}

impl SendOutcome {
    pub fn is_success(&self) -> bool {
        self.status_code.is_success()
    }
}
