//! End-to-end tests for the calculator session and guided flow.

use thyro_guide::{CalculatorSession, GuideAction, GuideState, HelpOption, Transition};
use thyro_model::{Analyte, OutcomeKind};

#[test]
fn calculate_is_gated_on_any_entry() {
    let mut session = CalculatorSession::default();
    assert!(!session.can_calculate());
    assert!(session.calculate().is_none());

    assert!(session.edit(Analyte::FreeT3, "3"));
    assert!(session.can_calculate());
    let result = session.calculate().expect("result");
    assert_eq!(result.kind(), OutcomeKind::Euthyroid);
}

#[test]
fn rejected_edit_keeps_previous_text() {
    let mut session = CalculatorSession::default();
    assert!(session.edit(Analyte::Tsh, "4,5"));
    assert_eq!(session.field(Analyte::Tsh), "4.5");
    assert!(!session.edit(Analyte::Tsh, "4.5x"));
    assert_eq!(session.field(Analyte::Tsh), "4.5");
}

#[test]
fn editing_hides_result() {
    let mut session = CalculatorSession::default();
    session.edit(Analyte::Tsh, "2");
    session.calculate();
    assert!(session.visible_result().is_some());
    session.edit(Analyte::FreeT4, "1.1");
    assert!(session.visible_result().is_none());
    assert_eq!(session.next(), Transition::Ignored);
}

#[test]
fn normal_path_finish_resets_everything() {
    let mut session = CalculatorSession::default();
    session.edit(Analyte::Tsh, "2.0");
    session.edit(Analyte::FreeT4, "1.2");
    session.calculate();

    assert_eq!(
        session.next(),
        Transition::Moved(GuideState::ShowingNormalGuidance)
    );
    assert_eq!(session.apply(GuideAction::Finish), Transition::Reset);
    assert_eq!(session.guide_state(), GuideState::Idle);
    assert_eq!(session.entered_count(), 0);
    assert!(session.visible_result().is_none());
}

#[test]
fn abnormal_path_to_appointment_and_back() {
    let mut session = CalculatorSession::default();
    session.edit(Analyte::Tsh, "5");
    session.edit(Analyte::FreeT4, "0.5");
    let result = session.calculate().expect("result");
    assert_eq!(result.kind(), OutcomeKind::Hypothyroid);

    assert_eq!(
        session.next(),
        Transition::Moved(GuideState::ShowingAbnormalGuidance)
    );
    assert_eq!(
        session.apply(GuideAction::Help),
        Transition::Moved(GuideState::ShowingHelp)
    );
    assert_eq!(
        session.apply(GuideAction::BookAppointment),
        Transition::Moved(GuideState::ShowingAppointment)
    );
    let content = session.guide_state().content().expect("appointment content");
    assert!(content.lines.iter().any(|line| line.contains("01303801712")));

    assert_eq!(
        session.apply(GuideAction::Back),
        Transition::Moved(GuideState::ShowingHelp)
    );
    assert_eq!(
        session.apply(GuideAction::Close),
        Transition::Moved(GuideState::Idle)
    );
    // Closing a dialog keeps the entered values and result.
    assert_eq!(session.entered_count(), 2);
    assert!(session.visible_result().is_some());
}

#[test]
fn help_is_unavailable_while_idle() {
    let mut session = CalculatorSession::default();
    assert_eq!(session.apply(GuideAction::Help), Transition::Ignored);
    assert_eq!(session.guide_state(), GuideState::Idle);
}

#[test]
fn help_options_serialize_with_targets() {
    let value = serde_json::to_value(HelpOption::WatchChannel.target()).unwrap();
    assert_eq!(value["kind"], "url");
    assert_eq!(
        value["target"],
        "https://www.youtube.com/@drmuntasirmahbub2385"
    );
}
