//! Next-step dialogs shown after a result.
//!
//! ```text
//! Idle --Next(normal)--> NormalGuidance --Help--> Help --BookAppointment--> Appointment
//! Idle --Next(other)---> AbnormalGuidance --Help--^      ^-------Back-------'
//! NormalGuidance / AbnormalGuidance --Finish--> Idle (session reset)
//! Appointment --CallClinic--> Appointment
//! any dialog --Close--> Idle
//! ```

use serde::Serialize;

use thyro_model::ClassificationResult;

use crate::contact::{CLINIC, HelpOption};

// =============================================================================
// STATE
// =============================================================================

/// Which dialog, if any, is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GuideState {
    /// No dialog open.
    #[default]
    Idle,
    ShowingNormalGuidance,
    ShowingHelp,
    ShowingAbnormalGuidance,
    ShowingAppointment,
}

/// User action on the result area or an open dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideAction {
    /// Continue from a displayed result.
    Next(ClassificationResult),
    Help,
    BookAppointment,
    /// Dial the clinic's serial number; the appointment dialog stays open.
    CallClinic,
    Back,
    Close,
    /// End the session; clears every field.
    Finish,
}

/// Outcome of applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Moved(GuideState),
    /// Returned to Idle and the session must be cleared.
    Reset,
    /// The action does not apply in the current state.
    Ignored,
}

/// Title and body text of a dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideContent {
    pub title: &'static str,
    pub lines: Vec<String>,
}

impl GuideState {
    /// Compute the transition for `action` without mutating anything.
    pub fn transition(self, action: &GuideAction) -> Transition {
        match (self, action) {
            (Self::Idle, GuideAction::Close) => Transition::Ignored,
            (_, GuideAction::Close) => Transition::Moved(Self::Idle),
            (Self::Idle, GuideAction::Next(result)) => Transition::Moved(if result.is_normal() {
                Self::ShowingNormalGuidance
            } else {
                Self::ShowingAbnormalGuidance
            }),
            (Self::ShowingNormalGuidance | Self::ShowingAbnormalGuidance, GuideAction::Help) => {
                Transition::Moved(Self::ShowingHelp)
            }
            (Self::ShowingNormalGuidance | Self::ShowingAbnormalGuidance, GuideAction::Finish) => {
                Transition::Reset
            }
            (Self::ShowingHelp, GuideAction::BookAppointment) => {
                Transition::Moved(Self::ShowingAppointment)
            }
            (Self::ShowingAppointment, GuideAction::Back) => Transition::Moved(Self::ShowingHelp),
            (Self::ShowingAppointment, GuideAction::CallClinic) => {
                Transition::Moved(Self::ShowingAppointment)
            }
            _ => Transition::Ignored,
        }
    }

    /// Check if a dialog is open.
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Actions that lead somewhere from this state, in button order.
    pub fn available_actions(&self) -> &'static [GuideAction] {
        match self {
            Self::Idle => &[],
            Self::ShowingNormalGuidance | Self::ShowingAbnormalGuidance => {
                &[GuideAction::Finish, GuideAction::Help, GuideAction::Close]
            }
            Self::ShowingHelp => &[GuideAction::BookAppointment, GuideAction::Close],
            Self::ShowingAppointment => &[
                GuideAction::Back,
                GuideAction::CallClinic,
                GuideAction::Close,
            ],
        }
    }

    /// Dialog text; `None` when idle.
    pub fn content(&self) -> Option<GuideContent> {
        let content = match self {
            Self::Idle => return None,
            Self::ShowingNormalGuidance => GuideContent {
                title: "Your result is normal",
                lines: vec![
                    "Your result is normal. You can repeat the test after 2 months.".to_string(),
                    "If you have no concerns, press Finish.".to_string(),
                    "If you need our help with anything, press Help.".to_string(),
                ],
            },
            Self::ShowingAbnormalGuidance => GuideContent {
                title: "Your result shows an imbalance",
                lines: vec![
                    "Further tests and treatment are needed before this becomes dangerous."
                        .to_string(),
                    "If you need our help with this, press Help.".to_string(),
                ],
            },
            Self::ShowingHelp => GuideContent {
                title: "How can we help you?",
                lines: HelpOption::ALL
                    .iter()
                    .map(|option| option.label().to_string())
                    .collect(),
            },
            Self::ShowingAppointment => GuideContent {
                title: "Book an appointment",
                lines: CLINIC.appointment_lines(),
            },
        };
        Some(content)
    }
}

impl GuideAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Next(_) => "Next",
            Self::Help => "Help",
            Self::BookAppointment => "Book appointment",
            Self::CallClinic => "Call now",
            Self::Back => "Back",
            Self::Close => "Close",
            Self::Finish => "Finish",
        }
    }
}
