//! Calculator session: entry form, last result and open dialog.

use tracing::{debug, info};

use thyro_core::{Classifier, RawLabInput, sanitize_field};
use thyro_model::{Analyte, ClassificationResult};

use crate::flow::{GuideAction, GuideState, Transition};

/// State behind one calculator screen.
///
/// Editing any field hides the previous result until the next
/// [`calculate`](CalculatorSession::calculate).
#[derive(Debug, Clone, Default)]
pub struct CalculatorSession {
    classifier: Classifier,
    fields: RawLabInput,
    result: Option<ClassificationResult>,
    has_calculated: bool,
    guide: GuideState,
}

impl CalculatorSession {
    pub fn new(classifier: Classifier) -> Self {
        Self {
            classifier,
            ..Default::default()
        }
    }

    /// Apply a keystroke-level edit. Returns false when the text is rejected,
    /// in which case the field keeps its previous content.
    pub fn edit(&mut self, analyte: Analyte, text: &str) -> bool {
        let Some(normalized) = sanitize_field(text) else {
            debug!(analyte = analyte.code(), "rejected field edit");
            return false;
        };
        self.fields.set(analyte, Some(normalized));
        self.has_calculated = false;
        true
    }

    pub fn field(&self, analyte: Analyte) -> &str {
        self.fields.get(analyte).unwrap_or_default()
    }

    pub fn fields(&self) -> &RawLabInput {
        &self.fields
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn entered_count(&self) -> usize {
        self.fields.entered_count()
    }

    /// The calculate button is enabled once any field has text.
    pub fn can_calculate(&self) -> bool {
        self.entered_count() >= 1
    }

    /// Classify the current fields. Returns `None` when nothing is entered.
    pub fn calculate(&mut self) -> Option<ClassificationResult> {
        if !self.can_calculate() {
            return None;
        }
        let panel = self.fields.to_panel();
        let result = self.classifier.classify(&panel);
        self.result = Some(result);
        self.has_calculated = true;
        info!(outcome = result.kind().as_str(), "calculation complete");
        Some(result)
    }

    /// The result currently on screen.
    pub fn visible_result(&self) -> Option<&ClassificationResult> {
        if self.has_calculated {
            self.result.as_ref()
        } else {
            None
        }
    }

    pub fn guide_state(&self) -> GuideState {
        self.guide
    }

    /// Continue from the visible result into the guidance dialogs.
    pub fn next(&mut self) -> Transition {
        match self.visible_result().copied() {
            Some(result) => self.apply(GuideAction::Next(result)),
            None => Transition::Ignored,
        }
    }

    /// Drive the dialog flow.
    pub fn apply(&mut self, action: GuideAction) -> Transition {
        let transition = self.guide.transition(&action);
        match transition {
            Transition::Moved(state) => {
                debug!(from = ?self.guide, to = ?state, "guide transition");
                self.guide = state;
            }
            Transition::Reset => self.reset(),
            Transition::Ignored => {
                debug!(state = ?self.guide, action = action.label(), "action ignored");
            }
        }
        transition
    }

    /// Clear every field, the result and any open dialog.
    pub fn reset(&mut self) {
        self.fields = RawLabInput::default();
        self.result = None;
        self.has_calculated = false;
        self.guide = GuideState::Idle;
    }
}
