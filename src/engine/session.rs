//! Entry session — the add-entry screen as immutable state plus a reducer.
//!
//! Every action produces a new `EntrySession`. Editing any field
//! invalidates a previous check; saving always uses a fresh check.

use chrono::NaiveDate;
use serde::Serialize;

use crate::engine::validator::{check_form, EntryCheck, EntryIssue};
use crate::types::{BettingEntry, CustomerType, EntryForm, Region};

/// User actions on the entry form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryAction {
    SetStation(String),
    SetRegion(Option<Region>),
    SetDate(Option<NaiveDate>),
    SetCustomer1(String),
    SetCustomer1Type(Option<CustomerType>),
    SetCustomer2(String),
    SetCustomer2Type(Option<CustomerType>),
    SetContent(String),
    /// Replace the form with the demo form dated on the given day.
    LoadSample(NaiveDate),
    Check,
    Save,
    Clear,
}

/// Snapshot of the entry screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EntrySession {
    pub form: EntryForm,
    /// A check has run since the last edit.
    pub checked: bool,
    pub entries: Vec<BettingEntry>,
    pub issues: Vec<EntryIssue>,
    /// The last `Save` succeeded and no edit has happened since.
    pub saved: bool,
}

impl EntrySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_save(&self) -> bool {
        self.checked && self.issues.is_empty()
    }

    fn edited(mut self, edit: impl FnOnce(&mut EntryForm)) -> Self {
        edit(&mut self.form);
        self.checked = false;
        self.saved = false;
        self
    }

    fn with_check(mut self, check: EntryCheck) -> Self {
        self.entries = check.entries;
        self.issues = check.issues;
        self.checked = true;
        self
    }
}

/// Apply one action.
pub fn reduce(session: EntrySession, action: EntryAction) -> EntrySession {
    match action {
        EntryAction::SetStation(v) => session.edited(|f| f.station = v),
        EntryAction::SetRegion(v) => session.edited(|f| f.region = v),
        EntryAction::SetDate(v) => session.edited(|f| f.date = v),
        EntryAction::SetCustomer1(v) => session.edited(|f| f.customer1 = v),
        EntryAction::SetCustomer1Type(v) => session.edited(|f| f.customer1_type = v),
        EntryAction::SetCustomer2(v) => session.edited(|f| f.customer2 = v),
        EntryAction::SetCustomer2Type(v) => session.edited(|f| f.customer2_type = v),
        EntryAction::SetContent(v) => session.edited(|f| f.betting_content = v),
        EntryAction::LoadSample(date) => EntrySession {
            form: EntryForm::sample(date),
            ..EntrySession::default()
        },
        EntryAction::Check => {
            let check = check_form(&session.form);
            session.with_check(check)
        }
        EntryAction::Save => {
            let session = if session.checked {
                session
            } else {
                let check = check_form(&session.form);
                session.with_check(check)
            };
            let saved = session.issues.is_empty();
            EntrySession { saved, ..session }
        }
        EntryAction::Clear => EntrySession::default(),
    }
}
