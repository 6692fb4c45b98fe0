//! State of the lead capture form, independent of how it is rendered.

use serde_json::{Map, Value};

use crate::validation::{trim_input, validate_field};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Tel,
    Email,
    Select(&'static [(&'static str, &'static str)]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

pub const BUSINESS_TYPES: &[(&str, &str)] = &[
    ("", "Select your business type"),
    ("cafe", "Cafe / Restaurant"),
    ("coaching", "Coaching / Tuition Centre"),
    ("retail", "Retail Store"),
    ("gym", "Gym / Fitness Studio"),
    ("startup", "Startup / Agency"),
    ("other", "Other"),
];

pub const LEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec { id: "name", label: "Your Name", placeholder: "Enter your full name", kind: FieldKind::Text, required: true },
    FieldSpec { id: "phone", label: "Phone Number", placeholder: "10-digit mobile number", kind: FieldKind::Tel, required: true },
    FieldSpec { id: "email", label: "Email (optional)", placeholder: "you@business.com", kind: FieldKind::Email, required: false },
    FieldSpec { id: "businessType", label: "Business Type", placeholder: "", kind: FieldKind::Select(BUSINESS_TYPES), required: true },
    FieldSpec { id: "area", label: "Area / Location", placeholder: "e.g. Koramangala, Bengaluru", kind: FieldKind::Text, required: true },
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    #[default]
    Untouched,
    Valid,
    Invalid(&'static str),
}

impl FieldState {
    pub fn error(&self) -> Option<&'static str> {
        match self {
            FieldState::Invalid(message) => Some(message),
            _ => None,
        }
    }
}

/// What a submit attempt led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStep {
    /// Some field failed; its message is showing and nothing is scheduled.
    Blocked,
    /// Every field passed; the submit control is busy until `finish_submit`.
    Started,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LeadForm {
    fields: &'static [FieldSpec],
    values: Vec<String>,
    states: Vec<FieldState>,
    submitting: bool,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new(LEAD_FIELDS)
    }
}

impl LeadForm {
    pub fn new(fields: &'static [FieldSpec]) -> Self {
        LeadForm {
            fields,
            values: vec![String::new(); fields.len()],
            states: vec![FieldState::default(); fields.len()],
            submitting: false,
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn value(&self, index: usize) -> &str {
        self.values.get(index).map(String::as_str).unwrap_or_default()
    }

    pub fn state(&self, index: usize) -> &FieldState {
        &self.states[index]
    }

    /// Typing clears any shown error without re-validating.
    pub fn input(&mut self, index: usize, value: String) {
        if index < self.values.len() {
            self.values[index] = value;
            self.states[index] = FieldState::Untouched;
        }
    }

    /// Leaving a field validates it.
    pub fn blur(&mut self, index: usize) -> bool {
        let Some(spec) = self.fields.get(index) else {
            return true;
        };
        let state = match validate_field(spec.id, &self.values[index], spec.required) {
            Ok(()) => FieldState::Valid,
            Err(message) => FieldState::Invalid(message),
        };
        let valid = state == FieldState::Valid;
        self.states[index] = state;
        valid
    }

    /// Validates every field, keeping each message visible. True iff all pass.
    pub fn validate_all(&mut self) -> bool {
        (0..self.fields.len()).fold(true, |all, i| self.blur(i) && all)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn begin_submit(&mut self) -> SubmitStep {
        if !self.validate_all() {
            return SubmitStep::Blocked;
        }
        self.submitting = true;
        SubmitStep::Started
    }

    /// Ends a started submission: the control is released and every field
    /// cleared. Returns true when the confirmation should be shown.
    pub fn finish_submit(&mut self) -> bool {
        let was_submitting = self.submitting;
        self.reset();
        was_submitting
    }

    pub fn reset(&mut self) {
        *self = LeadForm::new(self.fields);
    }

    /// The captured lead keyed by field id, for logging.
    pub fn snapshot(&self) -> Value {
        let map: Map<String, Value> = self
            .fields
            .iter()
            .zip(&self.values)
            .map(|(spec, value)| (spec.id.to_string(), Value::String(trim_input(value).to_string())))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(id: &str) -> usize {
        LEAD_FIELDS.iter().position(|f| f.id == id).unwrap()
    }

    fn filled() -> LeadForm {
        let mut form = LeadForm::default();
        form.input(index_of("name"), "Asha".into());
        form.input(index_of("phone"), "9876543210".into());
        form.input(index_of("businessType"), "cafe".into());
        form.input(index_of("area"), "Indiranagar".into());
        form
    }

    #[test]
    fn blur_moves_field_out_of_untouched() {
        let mut form = LeadForm::default();
        let name = index_of("name");
        assert_eq!(form.state(name), &FieldState::Untouched);

        form.input(name, "A".into());
        assert!(!form.blur(name));
        assert_eq!(form.state(name).error(), Some("Name must be at least 2 characters"));

        form.input(name, "Al".into());
        assert_eq!(form.state(name), &FieldState::Untouched);
        assert!(form.blur(name));
        assert_eq!(form.state(name), &FieldState::Valid);
    }

    #[test]
    fn input_clears_error_even_when_still_invalid() {
        let mut form = LeadForm::default();
        let phone = index_of("phone");
        form.input(phone, "123".into());
        form.blur(phone);
        form.input(phone, "1234".into());
        assert_eq!(form.state(phone).error(), None);
    }

    #[test]
    fn submit_reports_every_failing_field() {
        let mut form = LeadForm::default();
        assert!(!form.validate_all());
        for (i, spec) in LEAD_FIELDS.iter().enumerate() {
            if spec.required {
                assert_eq!(form.state(i).error(), Some("This field is required"), "{}", spec.id);
            } else {
                assert_eq!(form.state(i), &FieldState::Valid);
            }
        }
    }

    #[test]
    fn one_bad_field_blocks_submit() {
        let mut form = filled();
        form.input(index_of("phone"), "123-456-7890".into());
        assert!(!form.validate_all());
        assert_eq!(form.state(index_of("name")), &FieldState::Valid);
        assert!(form.state(index_of("phone")).error().is_some());
    }

    #[test]
    fn complete_form_passes_and_resets() {
        let mut form = filled();
        assert!(form.validate_all());

        form.reset();
        assert!(LEAD_FIELDS.iter().enumerate().all(|(i, _)| form.value(i).is_empty()));
        assert!(LEAD_FIELDS
            .iter()
            .enumerate()
            .all(|(i, _)| form.state(i) == &FieldState::Untouched));
    }

    #[test]
    fn invalid_submit_is_blocked_and_nothing_pending() {
        let mut form = filled();
        form.input(index_of("area"), "Go".into());
        assert_eq!(form.begin_submit(), SubmitStep::Blocked);
        assert!(!form.is_submitting());
        assert!(!form.finish_submit(), "a blocked submit never confirms");
        assert_eq!(LeadForm::default().begin_submit(), SubmitStep::Blocked);
    }

    #[test]
    fn valid_submit_busies_then_clears_and_confirms() {
        let mut form = filled();
        assert_eq!(form.begin_submit(), SubmitStep::Started);
        assert!(form.is_submitting());
        assert_eq!(form.value(index_of("name")), "Asha");

        assert!(form.finish_submit());
        assert!(!form.is_submitting());
        assert!((0..LEAD_FIELDS.len()).all(|i| form.value(i).is_empty()));
        assert!(!form.finish_submit());
    }

    #[test]
    fn snapshot_is_keyed_by_field_id() {
        let mut form = filled();
        form.input(index_of("area"), "  Indiranagar ".into());
        let snapshot = form.snapshot();
        assert_eq!(snapshot["name"], "Asha");
        assert_eq!(snapshot["area"], "Indiranagar");
        assert_eq!(snapshot["email"], "");
    }
}
