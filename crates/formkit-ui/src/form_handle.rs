//! Signal-backed form state
//!
//! [`FormHandle`] is the form-state collaborator handed to widgets and
//! [`AutoFields`](crate::AutoFields). It is `Copy`, so event handlers can
//! capture it freely; every copy writes to the same signal.

use dioxus::prelude::*;
use formkit_core::{FieldBinding, FieldIssue, FormState, FormValues, SetValueOptions, Value};

/// Reactive handle over a form's [`FormValues`]
#[derive(Clone, Copy, PartialEq)]
pub struct FormHandle {
    values: Signal<FormValues>,
}

impl FormHandle {
    pub fn new(values: Signal<FormValues>) -> Self {
        Self { values }
    }

    /// Copy of the current values, e.g. for submitting
    pub fn snapshot(&self) -> FormValues {
        self.values.read().clone()
    }

    /// Write a text value and mark the field dirty
    pub fn set_text(&self, name: &str, text: String) {
        let mut values = self.values;
        values
            .write()
            .set_value(name, Value::String(text), SetValueOptions::dirty());
    }

    pub fn set_error(&self, name: &str, message: String) {
        let mut values = self.values;
        values.write().set_error(name, message);
    }

    pub fn apply_issues(&self, issues: &[FieldIssue]) {
        let mut values = self.values;
        values.write().apply_issues(issues);
    }

    /// Replace every value, clearing dirty flags and errors
    pub fn reset(&self, fresh: FormValues) {
        let mut values = self.values;
        values.set(fresh);
    }

    pub fn is_dirty(&self) -> bool {
        self.values.read().is_dirty()
    }
}

impl FormState for FormHandle {
    fn value(&self, name: &str) -> Value {
        self.values.read().value(name)
    }

    fn set_value(&mut self, name: &str, value: Value, options: SetValueOptions) {
        self.values.write().set_value(name, value, options);
    }

    fn binding(&self, name: &str) -> FieldBinding {
        self.values.read().binding(name)
    }
}

/// Create a form handle seeded with `defaults`
pub fn use_form(defaults: impl FnOnce() -> FormValues + 'static) -> FormHandle {
    let values = use_signal(defaults);
    FormHandle::new(values)
}
