//! Execution context passed in by the host scheduler.
//!
//! An explicit typed bag of per-run values. Response checks and filters
//! receive the whole context and read what they need; nothing here is
//! matched to callable parameters by name.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// Per-run values supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecutionContext {
    /// Identifier of the scheduled run
    pub run_id: Option<String>,
    /// Identifier of the task within the run
    pub task_id: Option<String>,
    /// Logical timestamp the run is executed for
    pub logical_date: Option<DateTime<Utc>>,
    /// 1-based attempt number; retries are the scheduler's business
    pub try_number: u32,
    /// Free-form named values for checks and filters
    pub params: HashMap<String, serde_json::Value>,
}

impl ExecutionContext {
    /// Creates an empty context with attempt number 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            try_number: 1,
            ..Self::default()
        }
    }

    /// Sets the run id.
    #[must_use]
    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }

    /// Sets the task id.
    #[must_use]
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Sets the logical date.
    #[must_use]
    pub fn with_logical_date(mut self, logical_date: DateTime<Utc>) -> Self {
        self.logical_date = Some(logical_date);
        self
    }

    /// Sets the attempt number.
    #[must_use]
    pub fn with_try_number(mut self, try_number: u32) -> Self {
        self.try_number = try_number;
        self
    }

    /// Adds a named parameter.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: serde_json::Value) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Returns a named parameter, if present.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&serde_json::Value> {
        self.params.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn new_context_starts_at_attempt_one() {
        let context = ExecutionContext::new();

        assert_eq!(context.try_number, 1);
        assert_eq!(context.run_id, None);
        assert!(context.params.is_empty());
    }

    #[test]
    fn builder_pattern() {
        let logical_date = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        let context = ExecutionContext::new()
            .with_run_id("scheduled__2024-05-01")
            .with_task_id("fetch_prices")
            .with_logical_date(logical_date)
            .with_try_number(3)
            .with_param("threshold", serde_json::json!(0.95));

        assert_eq!(context.run_id.as_deref(), Some("scheduled__2024-05-01"));
        assert_eq!(context.task_id.as_deref(), Some("fetch_prices"));
        assert_eq!(context.logical_date, Some(logical_date));
        assert_eq!(context.try_number, 3);
        assert_eq!(context.param("threshold"), Some(&serde_json::json!(0.95)));
    }

    #[test]
    fn param_returns_none_when_absent() {
        let context = ExecutionContext::new();
        assert_eq!(context.param("missing"), None);
    }
}
