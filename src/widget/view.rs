//! View seam
//!
//! [`JournalView`] is what a front-end implements. [`ViewModel`] is derived
//! from [`WidgetState`] alone, so what the view shows can be checked without
//! rendering anything.

use super::state::{Phase, WidgetState};
use crate::config::WidgetConfig;

/// Everything a front-end needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    pub submit_enabled: bool,
    pub submit_caption: String,
    pub result_visible: bool,
    pub label_text: String,
    pub score_text: String,
    pub reflection_text: String,
    /// Which successful submission the panel shows
    pub result_seq: u64,
}

impl ViewModel {
    /// Project widget state onto display fields
    pub fn project(state: &WidgetState, captions: &WidgetConfig) -> Self {
        let (submit_enabled, submit_caption) = match state.phase {
            Phase::Idle => (true, captions.submit_label.clone()),
            Phase::Pending => (false, captions.busy_label.clone()),
        };

        let (label_text, score_text, reflection_text) = match &state.result {
            Some(panel) => (
                panel.sentiment.label.clone(),
                panel.sentiment.score_display(),
                panel.reflection.clone().unwrap_or_default(),
            ),
            None => (String::new(), String::new(), String::new()),
        };

        Self {
            submit_enabled,
            submit_caption,
            result_visible: state.result.is_some(),
            label_text,
            score_text,
            reflection_text,
            result_seq: state.results_shown,
        }
    }
}

/// A front-end for the journal widget
pub trait JournalView {
    /// Current contents of the text input
    fn input_text(&self) -> String;

    /// Replace the contents of the text input
    fn set_input_text(&mut self, text: &str);

    /// Redraw from a fresh projection
    fn render(&mut self, model: &ViewModel);

    /// Show a message the user has to acknowledge
    fn alert(&mut self, message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SentimentResult;
    use crate::widget::state::ResultPanel;

    #[test]
    fn test_idle_without_result() {
        let model = ViewModel::project(&WidgetState::default(), &WidgetConfig::default());
        assert!(model.submit_enabled);
        assert_eq!(model.submit_caption, "Save Entry");
        assert!(!model.result_visible);
        assert_eq!(model.label_text, "");
        assert_eq!(model.score_text, "");
    }

    #[test]
    fn test_pending_disables_submit() {
        let state = WidgetState {
            phase: Phase::Pending,
            ..Default::default()
        };
        let model = ViewModel::project(&state, &WidgetConfig::default());
        assert!(!model.submit_enabled);
        assert_eq!(model.submit_caption, "Saving...");
    }

    #[test]
    fn test_result_fields() {
        let state = WidgetState {
            phase: Phase::Idle,
            result: Some(ResultPanel {
                sentiment: SentimentResult::new("negative", 0.4),
                reflection: Some("This sounds difficult.".to_string()),
            }),
            results_shown: 1,
        };
        let model = ViewModel::project(&state, &WidgetConfig::default());
        assert!(model.result_visible);
        assert_eq!(model.label_text, "negative");
        assert_eq!(model.score_text, "0.40");
        assert_eq!(model.reflection_text, "This sounds difficult.");
        assert_eq!(model.result_seq, 1);
    }

    #[test]
    fn test_custom_captions() {
        let captions = WidgetConfig {
            busy_label: "Analyzing...".to_string(),
            ..Default::default()
        };
        let state = WidgetState {
            phase: Phase::Pending,
            ..Default::default()
        };
        assert_eq!(
            ViewModel::project(&state, &captions).submit_caption,
            "Analyzing..."
        );
    }
}
