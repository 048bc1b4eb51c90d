pub mod field;
pub mod phone;
pub mod summary;
pub mod validators;

use std::time::{
    Duration,
    Instant,
};

pub use field::{
    FieldKind,
    FieldState,
    FieldVisual,
};
pub use summary::{
    AverageBand,
    FormSnapshot,
};
use tracing::{
    debug,
    info,
    warn,
};

use crate::core::Timeout;

pub const POPUP_DURATION: Duration = Duration::from_secs(3);
pub const DEFAULT_RATING: i32 = 5;
pub const RATING_COUNT: usize = 3;

/// How the submit button should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitControl {
    pub enabled: bool,
    pub opacity: f32,
}

impl SubmitControl {
    fn from_validity(valid: bool) -> Self {
        Self { enabled: valid, opacity: if valid { 1.0 } else { 0.6 } }
    }
}

/// Acknowledgement popup. Every submission schedules its own dismissal; the
/// first one to come due hides the popup.
#[derive(Debug, Default)]
pub struct AckPopup {
    visible: bool,
    dismissals: Vec<Timeout>,
}

impl AckPopup {
    pub fn show(&mut self, now: Instant) {
        self.visible = true;
        self.dismissals.push(Timeout::after(now, POPUP_DURATION));
    }

    pub fn poll(&mut self, now: Instant) {
        let before = self.dismissals.len();
        self.dismissals.retain(|timeout| !timeout.is_due(now));
        if self.dismissals.len() < before {
            self.visible = false;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.dismissals.iter().map(Timeout::deadline).min()
    }
}

pub struct FormValidator {
    fields: [FieldState; FieldKind::ALL.len()],
    ratings: [i32; RATING_COUNT],
    submit: SubmitControl,
    last_submission: Option<FormSnapshot>,
    popup: AckPopup,
}

impl FormValidator {
    pub fn new() -> Self {
        let mut validator = Self {
            fields: FieldKind::ALL.map(FieldState::new),
            ratings: [DEFAULT_RATING; RATING_COUNT],
            submit: SubmitControl::from_validity(false),
            last_submission: None,
            popup: AckPopup::default(),
        };
        validator.check_form_validity();
        validator
    }

    pub fn field(&self, kind: FieldKind) -> &FieldState {
        &self.fields[kind.index()]
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FieldState {
        &mut self.fields[kind.index()]
    }

    /// Handles an edit of one text field. The phone field is re-masked first,
    /// so the stored value may differ from `raw`.
    pub fn input(&mut self, kind: FieldKind, raw: &str) -> &FieldState {
        let value = match kind {
            FieldKind::Phone => phone::mask_phone_input(raw),
            _ => raw.to_string(),
        };

        let field = self.field_mut(kind);
        field.set_value(value);
        debug!(field = ?kind, valid = field.is_valid, "field edited");

        self.check_form_validity();
        self.field(kind)
    }

    pub fn rating(&self, index: usize) -> i32 {
        self.ratings[index]
    }

    pub fn set_rating(&mut self, index: usize, value: i32) {
        match self.ratings.get_mut(index) {
            Some(rating) => *rating = value,
            None => warn!(index, "ignoring unknown rating slot"),
        }
        self.check_form_validity();
    }

    /// Recomputes whole-form validity. Message and ratings never gate.
    pub fn check_form_validity(&mut self) -> bool {
        let valid = FieldKind::GATED.iter().all(|&kind| self.field(kind).is_valid);
        self.submit = SubmitControl::from_validity(valid);
        valid
    }

    pub fn submit_control(&self) -> SubmitControl {
        self.submit
    }

    /// Builds the summary from the current values without re-validating them
    /// and shows the acknowledgement popup.
    pub fn submit(&mut self, now: Instant) -> &FormSnapshot {
        let average = summary::average_rating(self.ratings);
        let value = |kind: FieldKind| self.field(kind).value.clone();

        let snapshot = FormSnapshot {
            name: value(FieldKind::Name),
            surname: value(FieldKind::Surname),
            email: value(FieldKind::Email),
            phone: value(FieldKind::Phone),
            address: value(FieldKind::Address),
            message: value(FieldKind::Message),
            rating1: self.ratings[0],
            rating2: self.ratings[1],
            rating3: self.ratings[2],
            average,
        };

        match serde_json::to_string(&snapshot) {
            Ok(json) => info!(form = %json, "form submitted"),
            Err(e) => warn!("Failed to serialize form data: {}", e),
        }

        self.popup.show(now);
        self.last_submission.insert(snapshot)
    }

    pub fn last_submission(&self) -> Option<&FormSnapshot> {
        self.last_submission.as_ref()
    }

    pub fn popup(&self) -> &AckPopup {
        &self.popup
    }

    pub fn poll(&mut self, now: Instant) {
        self.popup.poll(now);
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.popup.next_deadline()
    }
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new()
    }
}
