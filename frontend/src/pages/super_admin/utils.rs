use crate::{
    api::{ApiError, CreateNews, CreateStudent, MutationResponse},
    state::notification::Notification,
};

pub const PARENT_PLACEHOLDER: &str = "Pilih Orang Tua (Opsional)";

/// Fallback texts used when the server does not send a message.
#[derive(Debug, Clone, Copy)]
pub struct OutcomeMessages {
    pub created: &'static str,
    pub rejected: &'static str,
    pub failed: &'static str,
}

pub const STUDENT_MESSAGES: OutcomeMessages = OutcomeMessages {
    created: "Data siswa berhasil ditambahkan",
    rejected: "Gagal menambahkan data siswa",
    failed: "Terjadi kesalahan saat menambahkan data",
};

pub const NEWS_MESSAGES: OutcomeMessages = OutcomeMessages {
    created: "Berita berhasil dipublikasikan",
    rejected: "Gagal mempublikasikan berita",
    failed: "Terjadi kesalahan saat mempublikasikan berita",
};

fn non_blank(message: Option<&str>) -> Option<&str> {
    message.map(str::trim).filter(|m| !m.is_empty())
}

pub fn notification_for(
    outcome: &Result<MutationResponse, ApiError>,
    messages: &OutcomeMessages,
) -> Notification {
    match outcome {
        Ok(response) if response.status => Notification::success(
            non_blank(response.message.as_deref()).unwrap_or(messages.created),
        ),
        Ok(response) => Notification::error(
            non_blank(response.message.as_deref()).unwrap_or(messages.rejected),
        ),
        Err(err) => Notification::error(err.payload_message().unwrap_or(messages.failed)),
    }
}

fn is_created(outcome: &Result<MutationResponse, ApiError>) -> bool {
    matches!(outcome, Ok(response) if response.status)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    InFlight,
    #[error("the form is closed")]
    Closed,
    #[error("name and class are required")]
    MissingRequired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentField {
    Name,
    ClassName,
    ParentId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub class_name: String,
    pub parent_id: Option<i64>,
}

/// Empty or non-numeric select values mean "no parent".
pub fn parse_parent_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

impl StudentDraft {
    pub fn set_field(&mut self, field: StudentField, raw: String) {
        match field {
            StudentField::Name => self.name = raw,
            StudentField::ClassName => self.class_name = raw,
            StudentField::ParentId => self.parent_id = parse_parent_id(&raw),
        }
    }

    pub fn has_required(&self) -> bool {
        !self.name.trim().is_empty() && !self.class_name.trim().is_empty()
    }

    pub fn parent_select_value(&self) -> String {
        self.parent_id.map(|id| id.to_string()).unwrap_or_default()
    }

    pub fn to_batch(&self) -> Vec<CreateStudent> {
        vec![CreateStudent {
            name: self.name.trim().to_string(),
            class_name: self.class_name.trim().to_string(),
            parent_id: self.parent_id,
        }]
    }
}

/// Identifies one submission within one open session of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket {
    session: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudentFormPhase {
    Closed,
    Editing,
    Submitting(SubmitTicket),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitResolution {
    pub notification: Notification,
    pub close_and_refetch: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentFormState {
    pub draft: StudentDraft,
    phase: StudentFormPhase,
    session: u64,
}

impl Default for StudentFormState {
    fn default() -> Self {
        Self::new(false)
    }
}

impl StudentFormState {
    pub fn new(open: bool) -> Self {
        Self {
            draft: StudentDraft::default(),
            phase: if open {
                StudentFormPhase::Editing
            } else {
                StudentFormPhase::Closed
            },
            session: 0,
        }
    }

    pub fn phase(&self) -> StudentFormPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != StudentFormPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, StudentFormPhase::Submitting(_))
    }

    pub fn open(&mut self) {
        if self.phase == StudentFormPhase::Closed {
            self.phase = StudentFormPhase::Editing;
        }
    }

    /// Drops the draft and invalidates any pending ticket.
    pub fn close(&mut self) {
        self.draft = StudentDraft::default();
        self.phase = StudentFormPhase::Closed;
        self.session = self.session.wrapping_add(1);
    }

    /// Returns false when the edit was ignored because the inputs are locked.
    pub fn update_field(&mut self, field: StudentField, raw: String) -> bool {
        if self.phase != StudentFormPhase::Editing {
            return false;
        }
        self.draft.set_field(field, raw);
        true
    }

    pub fn begin_submit(&mut self) -> Result<(SubmitTicket, Vec<CreateStudent>), SubmitRejected> {
        match self.phase {
            StudentFormPhase::Closed => Err(SubmitRejected::Closed),
            StudentFormPhase::Submitting(_) => Err(SubmitRejected::InFlight),
            StudentFormPhase::Editing if !self.draft.has_required() => {
                Err(SubmitRejected::MissingRequired)
            }
            StudentFormPhase::Editing => {
                let ticket = SubmitTicket {
                    session: self.session,
                };
                self.phase = StudentFormPhase::Submitting(ticket);
                Ok((ticket, self.draft.to_batch()))
            }
        }
    }

    /// Applies a finished submission. Completions for a ticket that is no
    /// longer pending (modal closed or reopened meanwhile) return `None` and
    /// leave the state untouched.
    pub fn complete(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<MutationResponse, ApiError>,
    ) -> Option<SubmitResolution> {
        if self.phase != StudentFormPhase::Submitting(ticket) {
            log::debug!("discarding stale student submission result");
            return None;
        }

        if let Err(err) = &outcome {
            log::error!("create students failed: {} ({})", err.error, err.code);
        }

        let notification = notification_for(&outcome, &STUDENT_MESSAGES);
        let created = is_created(&outcome);
        if created {
            self.close();
        } else {
            self.phase = StudentFormPhase::Editing;
        }

        Some(SubmitResolution {
            notification,
            close_and_refetch: created,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsFormState {
    pub title: String,
    pub content: String,
    pub submitting: bool,
}

impl NewsFormState {
    pub fn begin_submit(&mut self) -> Result<CreateNews, SubmitRejected> {
        if self.submitting {
            return Err(SubmitRejected::InFlight);
        }
        self.submitting = true;
        Ok(CreateNews {
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
        })
    }

    pub fn complete(&mut self, outcome: &Result<MutationResponse, ApiError>) -> Notification {
        if let Err(err) = outcome {
            log::error!("create news failed: {} ({})", err.error, err.code);
        }
        if is_created(outcome) {
            *self = Self::default();
        } else {
            self.submitting = false;
        }
        notification_for(outcome, &NEWS_MESSAGES)
    }
}
