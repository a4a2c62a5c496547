//! Line-oriented rendition of the calculator screen and its dialogs.
//!
//! Generic over reader and writer so the whole flow can be scripted.

use std::io::{self, BufRead, Write};

use tracing::debug;

use thyro_guide::{
    CLINIC, CalculatorSession, GuideAction, GuideState, HelpOption, HelpTarget, Transition,
};
use thyro_model::{Analyte, ClassificationResult};

use crate::logging::redact_value;

/// One numbered entry in a dialog menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Action(GuideAction),
    Help(HelpOption),
}

impl MenuItem {
    fn label(&self) -> &'static str {
        match self {
            Self::Action(action) => action.label(),
            Self::Help(option) => option.label(),
        }
    }
}

fn menu(state: GuideState) -> Vec<MenuItem> {
    match state {
        GuideState::ShowingHelp => HelpOption::ALL
            .into_iter()
            .map(MenuItem::Help)
            .chain([MenuItem::Action(GuideAction::Close)])
            .collect(),
        _ => state
            .available_actions()
            .iter()
            .copied()
            .map(MenuItem::Action)
            .collect(),
    }
}

/// Read one line. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the full screen: prompt for values, show the result, walk the dialogs.
///
/// Returns the computed result, or `None` when nothing was entered.
///
/// # Errors
///
/// Propagates I/O errors from `input` or `out`.
pub fn run_guide<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<ClassificationResult>> {
    writeln!(out, "Thyroid Calculator")?;
    writeln!(out, "Leave a field blank if it was not measured.")?;
    for analyte in Analyte::ALL {
        if !prompt_field(session, analyte, input, out)? {
            break;
        }
    }

    let Some(result) = session.calculate() else {
        writeln!(out, "Enter at least one value to calculate.")?;
        return Ok(None);
    };
    writeln!(out)?;
    writeln!(out, "Result: {}", result.headline())?;
    let marker = if result.is_normal() { "" } else { "⚠ " };
    writeln!(out, "{marker}{}", result.advisory_text())?;
    writeln!(out)?;
    writeln!(out, "Press Enter for next steps, or q to quit.")?;
    match read_line(input)? {
        Some(line) if !line.eq_ignore_ascii_case("q") => {}
        _ => return Ok(Some(result)),
    }

    session.next();
    run_dialogs(session, input, out)?;
    Ok(Some(result))
}

/// Prompt until the field is accepted or left blank. Returns false at end of input.
fn prompt_field<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    analyte: Analyte,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let hint = session.classifier().ranges().get(analyte).hint(analyte);
    loop {
        write!(out, "{} ({}) [{hint}]: ", analyte.label(), analyte.unit())?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(false);
        };
        if session.edit(analyte, &line) {
            debug!(analyte = analyte.code(), value = redact_value(&line), "field entered");
            return Ok(true);
        }
        writeln!(out, "Digits and a single decimal point only.")?;
    }
}

fn run_dialogs<R: BufRead, W: Write>(
    session: &mut CalculatorSession,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    while session.guide_state().is_open() {
        let state = session.guide_state();
        if let Some(content) = state.content() {
            writeln!(out)?;
            writeln!(out, "== {} ==", content.title)?;
            for line in &content.lines {
                writeln!(out, "  {line}")?;
            }
        }
        let items = menu(state);
        for (index, item) in items.iter().enumerate() {
            writeln!(out, "  [{}] {}", index + 1, item.label())?;
        }
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            writeln!(out)?;
            return Ok(());
        };
        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| items.get(index).copied());
        match choice {
            Some(MenuItem::Action(action)) => match session.apply(action) {
                Transition::Reset => writeln!(out, "Session cleared.")?,
                Transition::Moved(_) if action == GuideAction::CallClinic => {
                    writeln!(out, "Call: {}", CLINIC.phone_link())?;
                }
                _ => {}
            },
            Some(MenuItem::Help(option)) => match option.target() {
                HelpTarget::Appointment => {
                    session.apply(GuideAction::BookAppointment);
                }
                HelpTarget::Url(url) => writeln!(out, "Open: {url}")?,
                HelpTarget::Phone(phone) => writeln!(out, "Call: tel:{phone}")?,
            },
            None => writeln!(out, "Choose one of the numbered options.")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_menu_lists_options_then_close() {
        let items = menu(GuideState::ShowingHelp);
        assert_eq!(items.len(), HelpOption::ALL.len() + 1);
        assert_eq!(items.last(), Some(&MenuItem::Action(GuideAction::Close)));
    }

    #[test]
    fn appointment_menu_offers_call() {
        let items = menu(GuideState::ShowingAppointment);
        assert!(items.contains(&MenuItem::Action(GuideAction::CallClinic)));
    }

    #[test]
    fn idle_menu_is_empty() {
        assert!(menu(GuideState::Idle).is_empty());
    }
}
