//! The quote-request form: record shape, validation rules, and the timing
//! constants for the simulated submission.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Length of the simulated "API call" after a valid submit.
pub const SUBMIT_SIMULATION_MS: u32 = 1_000;
/// How long the success banner stays up before the form clears.
pub const SUCCESS_RESET_MS: u32 = 3_000;

lazy_static! {
    // One-or-more non-whitespace-non-@ runs around "@" and ".".
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    // Digits, whitespace, hyphens, plus signs and parentheses only.
    static ref PHONE_REGEX: Regex = Regex::new(r"^[\d\s\-\+\(\)]+$").unwrap();
}

/// Everything the contact form collects. Serializes camelCase — the
/// payload shape a real submission endpoint would receive.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub company_name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub products_quantity: String,
    pub destination_port: String,
    pub additional_requirements: String,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("Please enter a valid {0}")]
    InvalidFormat(&'static str),
}

/// Per-field validation outcome for the required/validated fields. The
/// free-text fields (destination port, additional requirements) carry no
/// rules.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QuoteFormErrors {
    pub company_name: Option<FieldError>,
    pub contact_person: Option<FieldError>,
    pub email: Option<FieldError>,
    pub phone: Option<FieldError>,
    pub products_quantity: Option<FieldError>,
}

impl QuoteFormErrors {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none()
            && self.contact_person.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.products_quantity.is_none()
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Phone is optional; only a non-empty value is checked against the
/// allowed character set.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.is_empty() || PHONE_REGEX.is_match(phone)
}

/// Evaluates every rule together, as the submit handler does. Submission
/// is allowed only when the returned report `is_empty()`.
pub fn validate_quote_request(request: &QuoteRequest) -> QuoteFormErrors {
    let mut errors = QuoteFormErrors::default();

    if request.company_name.trim().is_empty() {
        errors.company_name = Some(FieldError::Required("Company name"));
    }

    if request.contact_person.trim().is_empty() {
        errors.contact_person = Some(FieldError::Required("Contact person"));
    }

    if request.email.trim().is_empty() {
        errors.email = Some(FieldError::Required("Email"));
    } else if !is_valid_email(&request.email) {
        errors.email = Some(FieldError::InvalidFormat("email address"));
    }

    if !request.phone.is_empty() && !is_valid_phone(&request.phone) {
        errors.phone = Some(FieldError::InvalidFormat("phone number"));
    }

    if request.products_quantity.trim().is_empty() {
        errors.products_quantity = Some(FieldError::Required("Products & Quantity"));
    }

    errors
}

/// Where the form sits in the simulated submission round trip.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// The whole contact-form state: field contents, the latest validation
/// report, and the submission phase. The view owns one of these; its
/// timers drive `delivered` and `reset`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QuoteForm {
    pub request: QuoteRequest,
    pub errors: QuoteFormErrors,
    pub phase: SubmitPhase,
}

impl QuoteForm {
    /// Validates the current contents. A clean form moves to
    /// `Submitting` and returns true; otherwise the per-field report is
    /// stored and the phase stays `Idle`.
    pub fn submit(&mut self) -> bool {
        let report = validate_quote_request(&self.request);
        if !report.is_empty() {
            self.errors = report;
            return false;
        }
        self.errors = QuoteFormErrors::default();
        self.phase = SubmitPhase::Submitting;
        true
    }

    /// The simulated send finished; show the success banner.
    pub fn delivered(&mut self) {
        self.phase = SubmitPhase::Success;
    }

    /// Clears every field and returns to `Idle` after the banner.
    pub fn reset(&mut self) {
        self.request = QuoteRequest::default();
        self.phase = SubmitPhase::Idle;
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    pub fn is_success(&self) -> bool {
        self.phase == SubmitPhase::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> QuoteRequest {
        QuoteRequest {
            company_name: "Acme Trading GmbH".into(),
            contact_person: "J. Meyer".into(),
            email: "purchasing@acme.example".into(),
            phone: "+49 30 1234567".into(),
            products_quantity: "20 tons Premium Briquettes".into(),
            destination_port: "Hamburg".into(),
            additional_requirements: String::new(),
        }
    }

    #[test]
    fn a_fully_valid_request_passes() {
        assert!(validate_quote_request(&valid_request()).is_empty());
    }

    #[test]
    fn missing_required_fields_are_each_reported() {
        let request = QuoteRequest::default();
        let errors = validate_quote_request(&request);
        assert_eq!(errors.company_name, Some(FieldError::Required("Company name")));
        assert_eq!(
            errors.contact_person,
            Some(FieldError::Required("Contact person"))
        );
        assert_eq!(errors.email, Some(FieldError::Required("Email")));
        assert_eq!(
            errors.products_quantity,
            Some(FieldError::Required("Products & Quantity"))
        );
        assert_eq!(errors.phone, None);
        assert!(!errors.is_empty());
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut request = valid_request();
        request.company_name = "   ".into();
        let errors = validate_quote_request(&request);
        assert_eq!(errors.company_name, Some(FieldError::Required("Company name")));
    }

    #[test]
    fn email_format_rules() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));

        let mut request = valid_request();
        request.email = "a@b".into();
        assert_eq!(
            validate_quote_request(&request).email,
            Some(FieldError::InvalidFormat("email address"))
        );
    }

    #[test]
    fn phone_is_optional_but_checked_when_present() {
        assert!(is_valid_phone(""));
        assert!(is_valid_phone("123-456-7890"));
        assert!(is_valid_phone("+84 (24) 555 0199"));
        assert!(!is_valid_phone("abc"));

        let mut request = valid_request();
        request.phone = String::new();
        assert!(validate_quote_request(&request).is_empty());

        request.phone = "abc".into();
        assert_eq!(
            validate_quote_request(&request).phone,
            Some(FieldError::InvalidFormat("phone number"))
        );
    }

    #[test]
    fn error_messages_read_like_the_form_copy() {
        assert_eq!(
            FieldError::Required("Company name").to_string(),
            "Company name is required"
        );
        assert_eq!(
            FieldError::InvalidFormat("email address").to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn submit_walks_idle_submitting_success_cleared() {
        let mut form = QuoteForm {
            request: valid_request(),
            ..QuoteForm::default()
        };
        assert_eq!(form.phase, SubmitPhase::Idle);

        assert!(form.submit());
        assert_eq!(form.phase, SubmitPhase::Submitting);
        assert!(form.is_submitting());

        form.delivered();
        assert_eq!(form.phase, SubmitPhase::Success);
        assert!(form.is_success());

        form.reset();
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert_eq!(form.request, QuoteRequest::default());
        assert!(form.errors.is_empty());
    }

    #[test]
    fn an_invalid_submit_stays_idle_with_field_errors() {
        let mut form = QuoteForm::default();
        assert!(!form.submit());
        assert_eq!(form.phase, SubmitPhase::Idle);
        assert!(!form.errors.is_empty());
    }

    #[test]
    fn fixing_the_fields_clears_an_earlier_report() {
        let mut form = QuoteForm::default();
        form.submit();
        assert!(!form.errors.is_empty());

        form.request = valid_request();
        assert!(form.submit());
        assert!(form.errors.is_empty());
        assert_eq!(form.phase, SubmitPhase::Submitting);
    }

    #[test]
    fn payload_serializes_camel_case() {
        let json = serde_json::to_string(&valid_request()).unwrap();
        assert!(json.contains("\"companyName\""));
        assert!(json.contains("\"productsQuantity\""));
        assert!(json.contains("\"additionalRequirements\""));
    }
}
