//! This module contains the parser for the whitespace-delimited textual DFA
//! format:
//!
//! ```text
//! NSTATES NAB
//! L1 L2 ... Lnab
//! S11 S12 ... S1nab
//! ...
//! Sn1 Sn2 ... Snnab
//! A1 A2 ... Am
//! ```
//!
//! `NSTATES` and `NAB` are positive integers, each `Li` a single printable
//! character, each `Sij` an integer in `[-1, NSTATES-1]` where `-1` means "no
//! transition", and the trailing accepting state ids are read until end of
//! input. Only whitespace separates tokens; line structure is not significant.

use std::io::Read;

use rustc_hash::FxHashSet;

use super::{StateID, StateIDBase};
use crate::{Dfa, ParseError, Result, StateAttribute};

/// Read a DFA description from the given reader.
pub(crate) fn parse_dfa<R: Read>(mut reader: R) -> Result<Dfa> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_dfa_str(&input)
}

/// Parse a DFA description from the given string.
pub(crate) fn parse_dfa_str(input: &str) -> Result<Dfa> {
    let mut tokens = input.split_whitespace();

    let nstates = next_integer(&mut tokens, "the state count")?;
    if nstates < 1 {
        return Err(ParseError::InvalidStateCount(nstates).into());
    }
    let nstates = nstates as usize;

    let nab = next_integer(&mut tokens, "the alphabet size")?;
    if nab < 1 {
        return Err(ParseError::InvalidAlphabetSize(nab).into());
    }
    let nab = nab as usize;

    let mut alphabet = Vec::with_capacity(nab);
    for _ in 0..nab {
        let token = tokens
            .next()
            .ok_or(ParseError::UnexpectedEof("the alphabet"))?;
        alphabet.push(parse_symbol(token)?);
    }

    let mut transitions = Vec::with_capacity(nstates * nab);
    for _ in 0..nstates * nab {
        let value = next_integer(&mut tokens, "the transition matrix")?;
        if value < -1 || value >= nstates as i64 {
            return Err(ParseError::TransitionOutOfRange { value, nstates }.into());
        }
        transitions.push(if value < 0 {
            None
        } else {
            Some(StateID::new(value as StateIDBase))
        });
    }

    // The accepting state list runs to the end of the input. Duplicates are
    // tolerated and dropped.
    let mut attributes = vec![StateAttribute::Normal; nstates];
    let mut accepting_states = Vec::new();
    let mut seen: FxHashSet<i64> = FxHashSet::default();
    for token in tokens {
        let value = parse_integer(token)?;
        if value < 0 || value >= nstates as i64 {
            return Err(ParseError::AcceptOutOfRange { value, nstates }.into());
        }
        if seen.insert(value) {
            let state = StateID::new(value as StateIDBase);
            attributes[state] = StateAttribute::Accept;
            accepting_states.push(state);
        }
    }

    Ok(Dfa::from_parts(
        alphabet,
        transitions,
        attributes,
        accepting_states,
    ))
}

fn next_integer<'a, I>(tokens: &mut I, what: &'static str) -> Result<i64>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(ParseError::UnexpectedEof(what))?;
    parse_integer(token)
}

fn parse_integer(token: &str) -> Result<i64> {
    token
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidInteger(token.to_string()).into())
}

fn parse_symbol(token: &str) -> Result<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if !symbol.is_control() => Ok(symbol),
        _ => Err(ParseError::InvalidSymbol(token.to_string()).into()),
    }
}
