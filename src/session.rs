use log::debug;

use crate::{
    compute,
    elements::{ElementLookup, ElementSet},
    formula::{Error, Formula},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Computed(Formula),
    /// The input of the previous successful computation, handed back so the
    /// editor can show the markup again.
    Reverted(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct ToggleState {
    is_converted: bool,
    previous_input: String,
}

/// One editing session over a formula text box.
///
/// A successful computation remembers its input; the next call to
/// [`FormulaSession::compute`] undoes it instead of parsing.
#[derive(Debug, Clone)]
pub struct FormulaSession<E> {
    elements: E,
    state: ToggleState,
}

impl Default for FormulaSession<ElementSet> {
    fn default() -> Self {
        Self::new(ElementSet::default())
    }
}

impl<E: ElementLookup> FormulaSession<E> {
    pub fn new(elements: E) -> Self {
        Self {
            elements,
            state: ToggleState::default(),
        }
    }

    /// Computes `input`, or reverts the last computation if there is one.
    ///
    /// Errors leave the session untouched.
    pub fn compute(&mut self, input: &str) -> Result<Outcome, Error> {
        if self.state.is_converted {
            self.state.is_converted = false;
            debug!("reverting to {:?}", self.state.previous_input);
            return Ok(Outcome::Reverted(self.state.previous_input.clone()));
        }

        let formula = compute(input, &self.elements)?;
        self.state = ToggleState {
            is_converted: true,
            previous_input: input.to_string(),
        };
        Ok(Outcome::Computed(formula))
    }

    /// Like [`FormulaSession::compute`], rendered in the brace text format.
    /// Failures are reported as `Error: <reason>`.
    pub fn compute_text(&mut self, input: &str) -> String {
        match self.compute(input) {
            Ok(Outcome::Computed(formula)) => formula.to_string(),
            Ok(Outcome::Reverted(previous)) => previous,
            Err(error) => format!("Error: {error}"),
        }
    }

    pub fn reset(&mut self) {
        self.state = ToggleState::default();
    }

    pub fn is_converted(&self) -> bool {
        self.state.is_converted
    }

    pub fn previous_input(&self) -> &str {
        &self.state.previous_input
    }

    pub fn elements(&self) -> &E {
        &self.elements
    }
}
