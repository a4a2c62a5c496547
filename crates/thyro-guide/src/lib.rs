//! Guided flow around the thyroid classifier.
//!
//! - [`session`]: entry form state and calculation gating
//! - [`flow`]: next-step dialogs driven by explicit user actions
//! - [`contact`]: static clinic and help directory

pub mod contact;
pub mod flow;
pub mod session;

pub use contact::{CLINIC, ClinicContact, HelpOption, HelpTarget};
pub use flow::{GuideAction, GuideContent, GuideState, Transition};
pub use session::CalculatorSession;
