//! Create/edit modal state machine.
//!
//! DESIGN
//! ======
//! `Closed -> Open -> Submitting -> Closed`, with a failed request dropping
//! back to `Open` and one generic error. `begin_submit` is the only way to
//! obtain a request, and it yields one only from `Open`, so a second click
//! while a request is in flight produces nothing.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use records::{ApiRequest, Record};

use crate::forms::{FormMode, RecordForm};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open,
    Submitting,
}

#[derive(Clone, Debug, Default)]
pub struct ModalState<F> {
    pub phase: ModalPhase,
    pub mode: FormMode,
    pub form: F,
    pub error: Option<String>,
}

impl<F: RecordForm> ModalState<F> {
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.form = F::default();
        self.error = None;
        self.phase = ModalPhase::Open;
    }

    pub fn open_edit(&mut self, record: &F::Record) {
        self.mode = FormMode::Edit(record.id());
        self.form = F::from_record(record);
        self.error = None;
        self.phase = ModalPhase::Open;
    }

    pub fn close(&mut self) {
        self.phase = ModalPhase::Closed;
        self.error = None;
    }

    pub fn is_open(&self) -> bool {
        self.phase != ModalPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == ModalPhase::Submitting
    }

    pub fn title(&self, noun: &str) -> String {
        match self.mode {
            FormMode::Create => format!("Add {noun}"),
            FormMode::Edit(_) => format!("Edit {noun}"),
        }
    }

    /// Validate and move to `Submitting`, returning the single request to
    /// send. Returns `None` (with `error` set on validation failure) when
    /// nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ApiRequest> {
        if self.phase != ModalPhase::Open {
            return None;
        }
        let draft = match self.form.validate() {
            Ok(draft) => draft,
            Err(message) => {
                self.error = Some(message.to_owned());
                return None;
            }
        };
        match self.form.request(self.mode, &draft) {
            Ok(request) => {
                self.error = None;
                self.phase = ModalPhase::Submitting;
                Some(request)
            }
            Err(e) => {
                log::warn!("form payload failed to encode: {e}");
                self.error = Some(GENERIC_SUBMIT_ERROR.to_owned());
                None
            }
        }
    }

    /// Request succeeded.
    pub fn finish_ok(&mut self) {
        self.close();
    }

    /// Request failed; reopen with `banner` for another attempt.
    pub fn finish_err(&mut self, banner: &str) {
        self.phase = ModalPhase::Open;
        self.error = Some(banner.to_owned());
    }
}

const GENERIC_SUBMIT_ERROR: &str = "Could not save. Please try again.";
