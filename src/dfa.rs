//! This module contains the DFA data model.
//! A DFA consists of its alphabet, a dense transition table, a per-state
//! attribute and the list of accepting states. The initial state is always the
//! first state, i.e. state 0.

use std::io::Read;

use crate::internal::minimizer::Minimizer;
use crate::internal::parser;
use crate::internal::{StateID, StateIDBase, SymbolID, SymbolIDBase};
use crate::Result;

/// The per-state attribute of a DFA state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateAttribute {
    /// Reaching the state on input exhaustion means the input word is in the
    /// language.
    Accept,
    /// The state is unreachable from the initial state or no accepting state
    /// is reachable from it.
    Dead,
    /// An ordinary state.
    Normal,
}

impl StateAttribute {
    /// Get the single-character prefix used in the rendered transition table.
    pub fn prefix(&self) -> char {
        match self {
            StateAttribute::Accept => 'A',
            StateAttribute::Dead => 'D',
            StateAttribute::Normal => 's',
        }
    }
}

/// A deterministic finite automaton.
///
/// The transition table is total: a missing transition is represented as
/// `None`. State ids are dense and 0-based, matching the ids used in the
/// textual format. The initial state is always state 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dfa {
    // The alphabet of the DFA. Column j of the transition table belongs to
    // symbol j.
    alphabet: Vec<char>,
    // The transition table in row-major order, nstates x nab.
    transitions: Vec<Option<StateID>>,
    // The per-state attributes.
    attributes: Vec<StateAttribute>,
    // The accepting states of the DFA.
    accepting_states: Vec<StateID>,
}

impl Dfa {
    /// Create a DFA from its parts. The caller guarantees consistency.
    pub(crate) fn from_parts(
        alphabet: Vec<char>,
        transitions: Vec<Option<StateID>>,
        attributes: Vec<StateAttribute>,
        accepting_states: Vec<StateID>,
    ) -> Self {
        debug_assert_eq!(transitions.len(), attributes.len() * alphabet.len());
        debug_assert!(accepting_states
            .iter()
            .all(|s| attributes[*s] == StateAttribute::Accept));
        Dfa {
            alphabet,
            transitions,
            attributes,
            accepting_states,
        }
    }

    /// Read a DFA from the whitespace-delimited text format.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        parser::parse_dfa(reader)
    }

    /// Parse a DFA from the whitespace-delimited text format.
    pub fn parse(input: &str) -> Result<Self> {
        parser::parse_dfa_str(input)
    }

    /// Get the number of states of the DFA.
    pub fn nstates(&self) -> usize {
        self.attributes.len()
    }

    /// Get the alphabet size of the DFA.
    pub fn nab(&self) -> usize {
        self.alphabet.len()
    }

    /// Get the alphabet of the DFA. Column j of the transition table belongs
    /// to symbol j.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Get the initial state of the DFA. It is always state 0.
    pub fn initial_state(&self) -> StateID {
        StateID::new(0)
    }

    /// Get the attribute of the given state.
    pub fn attribute(&self, state: StateID) -> StateAttribute {
        self.attributes[state]
    }

    /// Get the accepting states of the DFA.
    pub fn accepting_states(&self) -> &[StateID] {
        &self.accepting_states
    }

    /// Check if the given state is an accepting state.
    #[inline]
    pub fn is_accepting(&self, state: StateID) -> bool {
        self.attributes[state] == StateAttribute::Accept
    }

    /// Check if the given state is a dead state.
    #[inline]
    pub fn is_dead(&self, state: StateID) -> bool {
        self.attributes[state] == StateAttribute::Dead
    }

    /// Get the transition target for the given state and symbol column, or
    /// `None` if there is no transition.
    #[inline]
    pub fn transition(&self, state: StateID, symbol: SymbolID) -> Option<StateID> {
        self.transitions[state.as_usize() * self.nab() + symbol.as_usize()]
    }

    /// Iterate over all state ids of the DFA.
    pub fn state_ids(&self) -> impl Iterator<Item = StateID> {
        (0..self.nstates() as StateIDBase).map(StateID::new)
    }

    /// Iterate over all symbol column ids of the DFA.
    pub fn symbol_ids(&self) -> impl Iterator<Item = SymbolID> {
        (0..self.nab() as SymbolIDBase).map(SymbolID::new)
    }

    /// Minimize the DFA.
    /// The returned automaton recognizes the same language with the minimum
    /// possible number of states; ordinary states that are unreachable from
    /// the initial state or that cannot reach any accepting state are marked
    /// dead. A dead initial state means the language is empty.
    pub fn minimize(&self) -> Dfa {
        Minimizer::minimize(self)
    }

    /// Run the automaton on the given word, starting in the initial state.
    /// Returns whether the word is in the language of the automaton. A symbol
    /// that is not part of the alphabet or a missing transition rejects the
    /// word.
    pub fn accepts(&self, word: &str) -> bool {
        let mut current = self.initial_state();
        for c in word.chars() {
            let symbol = match self.alphabet.iter().position(|a| *a == c) {
                Some(column) => SymbolID::new(column as SymbolIDBase),
                None => return false,
            };
            current = match self.transition(current, symbol) {
                Some(target) => target,
                None => return false,
            };
        }
        self.is_accepting(current)
    }

    /// Mark the given state with the given attribute.
    pub(crate) fn set_attribute(&mut self, state: StateID, attribute: StateAttribute) {
        self.attributes[state] = attribute;
    }

    /// Read a DFA from JSON.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let dfa: Dfa = serde_json::from_reader(reader)?;
        Ok(dfa)
    }

    /// Write the DFA as JSON.
    #[cfg(feature = "serde")]
    pub fn to_json_writer<W: std::io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Render the DFA to the graphviz dot format.
    #[cfg(feature = "dot_writer")]
    pub fn render_dot<W: std::io::Write>(&self, label: &str, output: &mut W) {
        crate::internal::dot::dfa_render(self, label, output);
    }
}

/// Renders the transition table: a header row with the alphabet symbols, one
/// row per non-dead state consisting of the attribute prefix and the state id
/// followed by the rendered transition targets (`-` for no transition), and a
/// final line naming the initial state. A dead initial state means the
/// automaton recognizes the empty language; a distinguished line is emitted
/// instead of the table body then.
impl std::fmt::Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut header: Vec<String> = vec![String::new()];
        header.extend(self.alphabet.iter().map(|c| c.to_string()));
        writeln!(f, "{}", header.join(" "))?;

        if self.is_dead(self.initial_state()) {
            return writeln!(f, "DFA minimized to EMPTY DFA");
        }

        for state in self.state_ids() {
            if self.is_dead(state) {
                continue;
            }
            let mut cells = vec![format!("{}{}", self.attribute(state).prefix(), state)];
            for symbol in self.symbol_ids() {
                cells.push(match self.transition(state, symbol) {
                    Some(target) => {
                        format!("{}{}", self.attribute(target).prefix(), target)
                    }
                    None => "-".to_string(),
                });
            }
            writeln!(f, "{}", cells.join(" "))?;
        }

        let init = self.initial_state();
        writeln!(
            f,
            "initial state: {}{}",
            self.attribute(init).prefix(),
            init
        )
    }
}
