//! Mutation Outcomes
//!
//! Maps gateway results onto what the invoking view does next: success
//! callback, error toast, or nothing at all when the gateway returned no data.

use crate::api::{ApiError, ApiResult};
use crate::notify::Notices;

#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome<T = String> {
    Success(T),
    Failed(ApiError),
    /// No data and no error: neither callback fires
    Silent,
}

impl<T> From<ApiResult<T>> for MutationOutcome<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(Some(value)) => MutationOutcome::Success(value),
            Ok(None) => MutationOutcome::Silent,
            Err(e) => MutationOutcome::Failed(e),
        }
    }
}

impl<T> MutationOutcome<T> {
    /// Error toast for failures; returns the success value, if any
    pub fn into_success(self, notices: &mut Notices) -> Option<T> {
        match self {
            MutationOutcome::Success(value) => Some(value),
            MutationOutcome::Failed(e) => {
                notices.error(e.message());
                None
            }
            MutationOutcome::Silent => None,
        }
    }
}

impl MutationOutcome<String> {
    /// Success or error toast; true when the mutation succeeded
    pub fn notify(&self, notices: &mut Notices) -> bool {
        match self {
            MutationOutcome::Success(msg) => {
                if !msg.is_empty() {
                    notices.success(msg.clone());
                }
                true
            }
            MutationOutcome::Failed(e) => {
                notices.error(e.message());
                false
            }
            MutationOutcome::Silent => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::NoticeKind;

    #[test]
    fn test_outcome_from_result() {
        assert_eq!(MutationOutcome::from(Ok(Some("ok".to_string()))), MutationOutcome::Success("ok".into()));
        assert_eq!(MutationOutcome::<String>::from(Ok(None)), MutationOutcome::Silent);
        assert_eq!(
            MutationOutcome::<String>::from(Err(ApiError::Request("nope".into()))),
            MutationOutcome::Failed(ApiError::Request("nope".into()))
        );
    }

    #[test]
    fn test_notify_per_outcome() {
        let mut notices = Notices::default();

        assert!(MutationOutcome::Success("Project deleted".to_string()).notify(&mut notices));
        assert!(!MutationOutcome::<String>::Failed(ApiError::Request("Forbidden".into())).notify(&mut notices));
        assert!(!MutationOutcome::<String>::Silent.notify(&mut notices));

        let kinds: Vec<NoticeKind> = notices.items().iter().map(|n| n.kind).collect();
        assert_eq!(kinds, vec![NoticeKind::Success, NoticeKind::Error]);
        assert_eq!(notices.items()[1].message, "Forbidden");
    }

    #[test]
    fn test_into_success_reports_errors() {
        let mut notices = Notices::default();
        let failed: MutationOutcome<u32> = MutationOutcome::Failed(ApiError::Request("User not found".into()));
        assert_eq!(failed.into_success(&mut notices), None);
        assert_eq!(notices.items()[0].message, "User not found");

        assert_eq!(MutationOutcome::Success(7u32).into_success(&mut notices), Some(7));
        assert_eq!(notices.items().len(), 1);
    }
}
