use crate::internal::{StateID, StateIDBase};
use crate::{Dfa, DfaminError, DfaminErrorKind, Result, StateAttribute};

/// A builder for creating a DFA programmatically.
///
/// States are addressed by their 0-based id; the initial state is state 0.
/// Transitions are addressed by the alphabet symbol instead of the column
/// index. All consistency checks happen in [`DfaBuilder::build`].
#[derive(Debug, Clone)]
pub struct DfaBuilder {
    nstates: usize,
    alphabet: Vec<char>,
    transitions: Vec<Option<StateID>>,
    accepting: Vec<usize>,
    error: Option<String>,
}

impl DfaBuilder {
    /// Creates a new builder for a DFA with the given number of states and
    /// alphabet. All transitions start out missing.
    pub fn new(nstates: usize, alphabet: &[char]) -> Self {
        Self {
            nstates,
            alphabet: alphabet.to_vec(),
            transitions: vec![None; nstates * alphabet.len()],
            accepting: Vec::new(),
            error: None,
        }
    }

    /// Adds a transition from state `from` to state `to` on `symbol`.
    pub fn transition(mut self, from: usize, symbol: char, to: usize) -> Self {
        if from >= self.nstates || to >= self.nstates {
            self.record_error(format!(
                "transition {} -{}-> {} references a state out of range for {} states",
                from, symbol, to, self.nstates
            ));
            return self;
        }
        match self.alphabet.iter().position(|a| *a == symbol) {
            Some(column) => {
                self.transitions[from * self.alphabet.len() + column] =
                    Some(StateID::new(to as StateIDBase));
            }
            None => {
                self.record_error(format!("symbol '{}' is not part of the alphabet", symbol));
            }
        }
        self
    }

    /// Marks the given state as accepting.
    pub fn accepting(mut self, state: usize) -> Self {
        if state >= self.nstates {
            self.record_error(format!(
                "accepting state {} out of range for {} states",
                state, self.nstates
            ));
            return self;
        }
        if !self.accepting.contains(&state) {
            self.accepting.push(state);
        }
        self
    }

    /// Builds the DFA from the builder.
    pub fn build(self) -> Result<Dfa> {
        if let Some(message) = self.error {
            return Err(DfaminError::new(DfaminErrorKind::ConstructionError(
                message,
            )));
        }
        if self.nstates == 0 {
            return Err(DfaminError::new(DfaminErrorKind::ConstructionError(
                "a DFA needs at least one state".to_string(),
            )));
        }
        if self.alphabet.is_empty() {
            return Err(DfaminError::new(DfaminErrorKind::ConstructionError(
                "a DFA needs at least one alphabet symbol".to_string(),
            )));
        }
        let mut attributes = vec![StateAttribute::Normal; self.nstates];
        let mut accepting_states = Vec::with_capacity(self.accepting.len());
        for state in self.accepting {
            attributes[state] = StateAttribute::Accept;
            accepting_states.push(StateID::new(state as StateIDBase));
        }
        Ok(Dfa::from_parts(
            self.alphabet,
            self.transitions,
            attributes,
            accepting_states,
        ))
    }

    // The first recorded problem wins; build reports it.
    fn record_error(&mut self, message: String) {
        if self.error.is_none() {
            self.error = Some(message);
        }
    }
}
