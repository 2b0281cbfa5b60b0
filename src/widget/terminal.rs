//! Terminal front-end
//!
//! Line-oriented [`JournalView`]: prints only what changed between renders.

use std::io::Write;

use super::view::{JournalView, ViewModel};

/// [`JournalView`] writing to any `io::Write`
pub struct TerminalView<W> {
    out: W,
    input: String,
    last: Option<ViewModel>,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            input: String::new(),
            last: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn draw(&mut self, previous: Option<&ViewModel>, model: &ViewModel) -> std::io::Result<()> {
        let was_enabled = previous.map_or(true, |p| p.submit_enabled);
        if was_enabled && !model.submit_enabled {
            writeln!(self.out, "{}", model.submit_caption)?;
        }

        // A repeated label and score is still a new result
        let fresh_result =
            previous.map_or(true, |p| !p.result_visible || p.result_seq != model.result_seq);

        if model.result_visible && fresh_result {
            writeln!(
                self.out,
                "Sentiment: {}  Score: {}",
                model.label_text, model.score_text
            )?;
            if !model.reflection_text.is_empty() {
                writeln!(self.out, "  {}", model.reflection_text)?;
            }
        } else if !model.result_visible && previous.is_some_and(|p| p.result_visible) {
            writeln!(self.out, "Result cleared.")?;
        }

        self.out.flush()
    }
}

impl<W: Write> JournalView for TerminalView<W> {
    fn input_text(&self) -> String {
        self.input.clone()
    }

    fn set_input_text(&mut self, text: &str) {
        self.input = text.to_string();
    }

    fn render(&mut self, model: &ViewModel) {
        let previous = self.last.replace(model.clone());
        if previous.as_ref() == Some(model) {
            return;
        }

        if let Err(e) = self.draw(previous.as_ref(), model) {
            tracing::warn!(error = %e, "Failed to draw journal widget");
        }
    }

    fn alert(&mut self, message: &str) {
        if let Err(e) = writeln!(self.out, "! {}", message).and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "Failed to show alert");
        }
    }
}
