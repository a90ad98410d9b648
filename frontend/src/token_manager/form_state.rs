//! Submission state for a single form.

use std::collections::BTreeMap;

/// Values, field errors and in-flight status of one form.
///
/// `defaults` is what [`FormState::reset`] restores; it is captured at
/// construction and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState<T> {
    values: T,
    defaults: T,
    errors: BTreeMap<String, String>,
    processing: bool,
    recently_successful: bool,
}

impl<T: Clone> FormState<T> {
    pub fn new(defaults: T) -> Self {
        Self {
            values: defaults.clone(),
            defaults,
            errors: BTreeMap::new(),
            processing: false,
            recently_successful: false,
        }
    }

    pub fn values(&self) -> &T {
        &self.values
    }

    pub fn set_field(&mut self, update: impl FnOnce(&mut T)) {
        update(&mut self.values);
    }

    /// Replace all values at once
    pub fn set_values(&mut self, values: T) {
        self.values = values;
    }

    /// Start a submission.
    ///
    /// Returns the values to send, or `None` while a previous submission
    /// of this form is still in flight.
    pub fn begin_submit(&mut self) -> Option<T> {
        if self.processing {
            return None;
        }
        self.processing = true;
        self.recently_successful = false;
        Some(self.values.clone())
    }

    pub fn succeed(&mut self) {
        self.processing = false;
        self.errors.clear();
        self.recently_successful = true;
    }

    /// Settle a failed submission; values stay as the user left them
    pub fn fail(&mut self, errors: BTreeMap<String, String>) {
        self.processing = false;
        self.errors = errors;
    }

    /// Settle a failed submission whose dialog was closed meanwhile;
    /// errors belonging to the form's current target stay untouched
    pub fn abandon(&mut self) {
        self.processing = false;
    }

    pub fn reset(&mut self) {
        self.values = self.defaults.clone();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn clear_recently_successful(&mut self) {
        self.recently_successful = false;
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn processing(&self) -> bool {
        self.processing
    }

    pub fn recently_successful(&self) -> bool {
        self.recently_successful
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Draft {
        name: String,
    }

    fn draft(name: &str) -> Draft {
        Draft {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_duplicate_submit_is_refused() {
        let mut form = FormState::new(draft(""));
        form.set_field(|v| v.name = "laptop".to_string());

        assert_eq!(form.begin_submit(), Some(draft("laptop")));
        assert!(form.processing());
        assert_eq!(form.begin_submit(), None);

        form.succeed();
        assert!(!form.processing());
        assert!(form.begin_submit().is_some());
    }

    #[test]
    fn test_failure_keeps_values_and_records_errors() {
        let mut form = FormState::new(draft(""));
        form.begin_submit();

        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "The name field is required.".to_string());
        form.fail(errors);

        assert!(!form.processing());
        assert!(!form.recently_successful());
        assert_eq!(form.error("name"), Some("The name field is required."));
        assert_eq!(form.values(), &draft(""));
    }

    #[test]
    fn test_success_clears_errors_and_flashes() {
        let mut form = FormState::new(draft(""));
        form.begin_submit();
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "taken".to_string());
        form.fail(errors);

        form.begin_submit();
        form.succeed();
        assert_eq!(form.error("name"), None);
        assert!(form.recently_successful());

        form.clear_recently_successful();
        assert!(!form.recently_successful());
    }

    #[test]
    fn test_abandon_only_clears_processing() {
        let mut form = FormState::new(draft(""));
        form.begin_submit();
        let mut errors = BTreeMap::new();
        errors.insert("name".to_string(), "taken".to_string());
        form.fail(errors);

        form.begin_submit();
        form.abandon();
        assert!(!form.processing());
        assert_eq!(form.error("name"), Some("taken"));
    }

    #[test]
    fn test_reset_restores_construction_defaults() {
        let mut form = FormState::new(draft("default"));
        form.set_values(draft("other"));
        form.reset();
        assert_eq!(form.values(), &draft("default"));
    }
}
