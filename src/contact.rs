//! Contact form rules and the fake submission round-trip.

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::config::PageConfig;
use crate::timers::{Scheduler, TimerSlot};

static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z\s]+$").unwrap());
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const NAME_MIN: usize = 2;
const MESSAGE_MIN: usize = 10;
const MESSAGE_MAX: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The `name` attribute, also the prefix of the `<name>-error` slot.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Name should only contain letters and spaces")]
    NameInvalidChars,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

pub fn validate(field: Field, raw: &str) -> Result<(), ValidationError> {
    let value = raw.trim();
    // browser `value.length`: UTF-16 code units
    let len = value.encode_utf16().count();
    match field {
        Field::Name => {
            if len < NAME_MIN {
                return Err(ValidationError::NameTooShort);
            }
            if !NAME_PATTERN.is_match(value) {
                return Err(ValidationError::NameInvalidChars);
            }
        }
        Field::Email => {
            if !EMAIL_PATTERN.is_match(value) {
                return Err(ValidationError::InvalidEmail);
            }
        }
        Field::Message => {
            if len < MESSAGE_MIN {
                return Err(ValidationError::MessageTooShort);
            }
            if len > MESSAGE_MAX {
                return Err(ValidationError::MessageTooLong);
            }
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub error: Option<ValidationError>,
}

/// Everything the form renders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: FieldState,
    pub email: FieldState,
    pub message: FieldState,
    /// Submit button shows its spinner and is disabled.
    pub loading: bool,
    pub success_visible: bool,
}

impl ContactFormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    fn check(&mut self, field: Field) -> bool {
        let slot = self.field_mut(field);
        slot.error = validate(field, &slot.value).err();
        slot.error.is_none()
    }
}

/// Drives the contact form.
///
/// There is no backend: a valid submit waits `submit_latency_ms`, resets the
/// fields and shows the success banner for `success_banner_ms`.
pub struct ContactForm<S: Scheduler + Clone + 'static> {
    scheduler: S,
    latency_ms: u32,
    banner_ms: u32,
    state: Rc<RefCell<ContactFormState>>,
    latency: TimerSlot,
    banner: TimerSlot,
    on_change: Rc<dyn Fn()>,
}

impl<S: Scheduler + Clone + 'static> ContactForm<S> {
    pub fn new(scheduler: S, config: &PageConfig, on_change: impl Fn() + 'static) -> Self {
        Self {
            scheduler,
            latency_ms: config.submit_latency_ms,
            banner_ms: config.success_banner_ms,
            state: Rc::new(RefCell::new(ContactFormState::default())),
            latency: TimerSlot::new(),
            banner: TimerSlot::new(),
            on_change: Rc::new(on_change),
        }
    }

    pub fn snapshot(&self) -> ContactFormState {
        self.state.borrow().clone()
    }

    /// Typing into a field drops its error without checking the new value.
    pub fn input(&self, field: Field, value: String) {
        {
            let mut state = self.state.borrow_mut();
            let slot = state.field_mut(field);
            slot.value = value;
            slot.error = None;
        }
        (self.on_change)();
    }

    pub fn blur(&self, field: Field) -> bool {
        let valid = self.state.borrow_mut().check(field);
        (self.on_change)();
        valid
    }

    /// Validates every field and, if all pass, starts the fake round-trip.
    /// Returns whether a submission started.
    pub fn submit(&self) -> bool {
        let valid = {
            let mut state = self.state.borrow_mut();
            if state.loading {
                log::debug!("Submit ignored, already sending");
                return false;
            }
            // no short-circuit: every field shows its own error
            Field::ALL
                .iter()
                .fold(true, |valid, field| state.check(*field) && valid)
        };
        if !valid {
            log::debug!("Contact form has validation errors");
            (self.on_change)();
            return false;
        }

        self.banner.cancel();
        {
            let mut state = self.state.borrow_mut();
            state.loading = true;
            state.success_visible = false;
        }
        (self.on_change)();

        let state = self.state.clone();
        let on_change = self.on_change.clone();
        let scheduler = self.scheduler.clone();
        let banner = self.banner.clone();
        let banner_ms = self.banner_ms;
        let handle = self.scheduler.schedule(
            self.latency_ms,
            Box::new(move || {
                {
                    let mut state = state.borrow_mut();
                    *state = ContactFormState {
                        success_visible: true,
                        ..ContactFormState::default()
                    };
                }
                log::info!("Form submitted successfully!");
                on_change();

                let hide_state = state.clone();
                let hide_notify = on_change.clone();
                banner.arm(scheduler.schedule(
                    banner_ms,
                    Box::new(move || {
                        hide_state.borrow_mut().success_visible = false;
                        hide_notify();
                    }),
                ));
            }),
        );
        self.latency.arm(handle);
        true
    }

    /// Drops any pending submission or banner timer. The typed values stay.
    pub fn cancel(&self) {
        self.latency.cancel();
        self.banner.cancel();
        {
            let mut state = self.state.borrow_mut();
            state.loading = false;
            state.success_visible = false;
        }
        (self.on_change)();
    }
}
