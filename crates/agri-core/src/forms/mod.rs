//! Contact form state and validation
//!
//! Every form on the site shares one routine: a [`FormSchema`] maps field
//! names to rules, [`validate`] maps field names to error messages. The check
//! is deliberately shallow (presence, an `@` for email, a minimum length).

pub mod schedule;
pub mod schemas;

use crate::{SiteError, SiteResult};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub type FormValues = BTreeMap<String, String>;

/// Field name → human-readable message. Absent means valid.
pub type FieldErrors = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Trimmed value must be non-empty
    Required,
    /// Non-empty and contains `@`
    Email,
    /// Non-empty and at least this many characters after trimming
    MinLength(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub kind: RuleKind,
    pub message: &'static str,
}

impl FieldRule {
    /// Returns the failure message, if the value breaks the rule
    pub fn check(&self, value: &str) -> Option<&'static str> {
        let value = value.trim();
        let ok = match self.kind {
            RuleKind::Required => !value.is_empty(),
            RuleKind::Email => !value.is_empty() && value.contains('@'),
            RuleKind::MinLength(min) => !value.is_empty() && value.chars().count() >= min,
        };
        (!ok).then_some(self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    /// `None` for optional fields
    pub rule: Option<FieldRule>,
}

/// Ordered set of named fields and their rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    id: &'static str,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(id: &'static str) -> Self {
        Self {
            id,
            fields: Vec::new(),
        }
    }

    pub fn required(self, name: &'static str, message: &'static str) -> Self {
        self.field(name, Some(FieldRule { kind: RuleKind::Required, message }))
    }

    pub fn email(self, name: &'static str, message: &'static str) -> Self {
        self.field(name, Some(FieldRule { kind: RuleKind::Email, message }))
    }

    pub fn min_length(self, name: &'static str, min: usize, message: &'static str) -> Self {
        self.field(name, Some(FieldRule { kind: RuleKind::MinLength(min), message }))
    }

    /// Field carried in the form state without a validation rule
    pub fn optional(self, name: &'static str) -> Self {
        self.field(name, None)
    }

    fn field(mut self, name: &'static str, rule: Option<FieldRule>) -> Self {
        self.fields.retain(|f| f.name != name);
        self.fields.push(FieldSpec { name, rule });
        self
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }

    pub fn rule(&self, name: &str) -> Option<FieldRule> {
        self.fields.iter().find(|f| f.name == name).and_then(|f| f.rule)
    }
}

/// Run every rule of `schema` against `values`. Missing values count as empty.
pub fn validate(schema: &FormSchema, values: &FormValues) -> FieldErrors {
    schema
        .fields()
        .iter()
        .filter_map(|field| {
            let rule = field.rule?;
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            rule.check(value)
                .map(|message| (field.name.to_string(), message.to_string()))
        })
        .collect()
}

/// Values accepted by a successful submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub form: &'static str,
    pub values: FormValues,
}

/// Live state of one form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(schema: &FormSchema) -> Self {
        Self {
            values: schema
                .field_names()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            errors: FieldErrors::new(),
        }
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Validate at submit time. On failure the errors are kept for rendering
    /// and nothing else happens. On success the form is reset and the
    /// accepted values are handed back for the success action.
    pub fn submit(&mut self, schema: &FormSchema) -> SiteResult<Submission> {
        let errors = validate(schema, &self.values);
        self.finish(schema, errors)
    }

    /// [`FormState::submit`] for forms carrying the scheduling field: a
    /// non-blank value earlier than `now` is rejected alongside the other
    /// field errors.
    pub fn submit_scheduled(
        &mut self,
        schema: &FormSchema,
        now: NaiveDateTime,
    ) -> SiteResult<Submission> {
        let mut errors = validate(schema, &self.values);
        let field = schemas::PREFERRED_DATE_TIME;
        if let Some(message) = schedule::check_schedule(self.value(field), now) {
            errors.insert(field.to_string(), message.to_string());
        }
        self.finish(schema, errors)
    }

    fn finish(&mut self, schema: &FormSchema, errors: FieldErrors) -> SiteResult<Submission> {
        if !errors.is_empty() {
            let fields: Vec<String> = errors.keys().cloned().collect();
            debug!(form = schema.id(), ?fields, "form rejected");
            self.errors = errors;
            return Err(SiteError::Validation(fields));
        }

        let submission = Submission {
            form: schema.id(),
            values: std::mem::take(&mut self.values),
        };
        self.reset_with(schema);
        info!(form = submission.form, fields = submission.values.len(), "form accepted");
        Ok(submission)
    }

    /// Clear values and errors, keeping the known field names
    pub fn reset(&mut self) {
        self.values.values_mut().for_each(String::clear);
        self.errors.clear();
    }

    fn reset_with(&mut self, schema: &FormSchema) {
        *self = FormState::new(schema);
    }
}

#[cfg(test)]
mod tests {
    use super::schemas;
    use super::*;

    fn filled(schema: &FormSchema, pairs: &[(&str, &str)]) -> FormState {
        let mut state = FormState::new(schema);
        for (name, value) in pairs {
            state.set(name, *value);
        }
        state
    }

    #[test]
    fn test_rule_checks() {
        let required = FieldRule { kind: RuleKind::Required, message: "required" };
        assert_eq!(required.check("   "), Some("required"));
        assert_eq!(required.check(" x "), None);

        let email = FieldRule { kind: RuleKind::Email, message: "email" };
        assert_eq!(email.check("farmer.example.com"), Some("email"));
        assert_eq!(email.check(""), Some("email"));
        assert_eq!(email.check("a@b"), None);

        let phone = FieldRule { kind: RuleKind::MinLength(8), message: "phone" };
        assert_eq!(phone.check("1234567"), Some("phone"));
        assert_eq!(phone.check("  12345678  "), None);
    }

    #[test]
    fn test_blank_name_only_error() {
        let schema = schemas::demo_request();
        let mut state = filled(
            &schema,
            &[
                ("name", ""),
                ("phone", "12345678"),
                ("email", "a@b.com"),
                ("location", "X"),
                ("purpose", "Demo"),
            ],
        );

        let result = state.submit(&schema);
        assert_eq!(result, Err(SiteError::Validation(vec!["name".to_string()])));
        assert_eq!(state.errors().len(), 1);
        assert!(state.error("name").is_some_and(|m| !m.is_empty()));
        // Rejected input is kept for correction
        assert_eq!(state.value("phone"), "12345678");
    }

    #[test]
    fn test_missing_at_sign_blocks_email_only() {
        let schema = schemas::demo_request();
        let mut state = filled(
            &schema,
            &[
                ("name", "Ravi"),
                ("phone", "9573487561"),
                ("email", "ravi.kropkraft.com"),
                ("location", "Hyderabad"),
                ("purpose", "Demo"),
            ],
        );

        assert!(state.submit(&schema).is_err());
        let failing: Vec<_> = state.errors().keys().map(String::as_str).collect();
        assert_eq!(failing, ["email"]);
    }

    #[test]
    fn test_valid_submit_clears_errors_and_resets() {
        let schema = schemas::demo_request();
        let mut state = filled(&schema, &[("name", "")]);
        assert!(state.submit(&schema).is_err());
        assert!(state.has_errors());

        for (name, value) in [
            ("name", "Ravi"),
            ("phone", "9573487561"),
            ("email", "ravi@kropkraft.com"),
            ("location", "Hyderabad"),
            ("purpose", "Demo"),
        ] {
            state.set(name, value);
        }

        let submission = state.submit(&schema).unwrap();
        assert_eq!(submission.form, "demo-request");
        assert_eq!(submission.values["email"], "ravi@kropkraft.com");
        assert!(!state.has_errors());
        assert_eq!(state.value("name"), "");
        assert_eq!(state.values().len(), schema.fields().len());
    }

    #[test]
    fn test_success_action_runs_once() {
        let schema = schemas::inquiry();
        let mut state = filled(
            &schema,
            &[
                ("business", "Green Fields Agro"),
                ("email", "ops@greenfields.in"),
                ("name", "Lakshmi"),
                ("phone", "9133878251"),
            ],
        );

        let mut confirmations = 0;
        if let Ok(submission) = state.submit(&schema) {
            confirmations += 1;
            assert_eq!(submission.values["business"], "Green Fields Agro");
        }
        // Resubmitting the now-empty form must not trigger it again
        if state.submit(&schema).is_ok() {
            confirmations += 1;
        }
        assert_eq!(confirmations, 1);
    }

    #[test]
    fn test_validate_treats_missing_as_empty() {
        let schema = schemas::inquiry();
        let errors = validate(&schema, &FormValues::new());
        let failing: Vec<_> = errors.keys().map(String::as_str).collect();
        assert_eq!(failing, ["business", "email", "name", "phone"]);
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let schema = FormSchema::new("t").optional("message");
        assert!(validate(&schema, &FormValues::new()).is_empty());
        assert_eq!(schema.rule("message"), None);
    }

    #[test]
    fn test_redeclared_field_replaces_rule() {
        let schema = FormSchema::new("t")
            .required("phone", "required")
            .min_length("phone", 8, "short");
        assert_eq!(schema.fields().len(), 1);
        assert_eq!(schema.rule("phone").unwrap().kind, RuleKind::MinLength(8));
    }

    #[test]
    fn test_reset() {
        let schema = schemas::message();
        let mut state = filled(&schema, &[("name", "Ravi")]);
        let _ = state.submit(&schema);
        state.reset();
        assert_eq!(state.value("name"), "");
        assert!(!state.has_errors());
    }

    #[test]
    fn test_past_schedule_rejected_with_other_errors() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 12, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let schema = schemas::demo_request();
        let mut state = filled(
            &schema,
            &[
                ("phone", "9573487561"),
                ("email", "ravi@kropkraft.com"),
                ("location", "Hyderabad"),
                ("purpose", "Demo"),
                (schemas::PREFERRED_DATE_TIME, "2025-12-09T09:00"),
            ],
        );

        assert!(state.submit_scheduled(&schema, now).is_err());
        assert_eq!(state.error("name"), Some("Name is required"));
        assert_eq!(
            state.error(schemas::PREFERRED_DATE_TIME),
            Some(schedule::PAST_SCHEDULE_MESSAGE)
        );

        state.set("name", "Ravi");
        state.set(schemas::PREFERRED_DATE_TIME, "2025-12-11T09:00");
        let submission = state.submit_scheduled(&schema, now).unwrap();
        assert_eq!(submission.values[schemas::PREFERRED_DATE_TIME], "2025-12-11T09:00");
        assert!(!state.has_errors());
    }

    #[test]
    fn test_blank_schedule_is_optional() {
        let now = schedule::local_now();
        let schema = schemas::demo_request();
        let mut state = filled(
            &schema,
            &[
                ("name", "Ravi"),
                ("phone", "9573487561"),
                ("email", "ravi@kropkraft.com"),
                ("location", "Hyderabad"),
                ("purpose", "Demo"),
            ],
        );
        assert!(state.submit_scheduled(&schema, now).is_ok());
    }
}
