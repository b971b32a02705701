use crate::QueryResult;

/// Observable state of a prompted-query widget.
///
/// Exactly one variant is active at a time. Transitions happen only through
/// explicit triggers: a valid trigger moves to `Loading` and then to
/// `Success` or `Failed` when the request resolves; an invalid trigger moves
/// straight to `Failed` with a validation message, skipping `Loading`.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetState {
    Idle,
    Loading,
    Success(QueryResult),
    Failed(String),
}

impl WidgetState {
    pub fn is_idle(&self) -> bool {
        matches!(self, WidgetState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetState::Loading)
    }

    /// The result of the last successful query, if any.
    pub fn result(&self) -> Option<&QueryResult> {
        match self {
            WidgetState::Success(result) => Some(result),
            _ => None,
        }
    }

    /// The user-facing message of the last failure, if any.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            WidgetState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(WidgetState::Idle.is_idle());
        assert!(WidgetState::Loading.is_loading());

        let success = WidgetState::Success(QueryResult::Text("ok".to_string()));
        assert_eq!(success.result().and_then(QueryResult::as_text), Some("ok"));
        assert_eq!(success.error_message(), None);

        let failed = WidgetState::Failed("oops".to_string());
        assert_eq!(failed.error_message(), Some("oops"));
        assert!(failed.result().is_none());
    }
}
