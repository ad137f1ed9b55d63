/// Tests for the textual DFA format against the public API: reading from a
/// reader, user-visible diagnostics, and the interplay with minimization.
use dfamin::Dfa;

const ENDS_IN_01: &str = "\
3 2
0 1
1 0
1 2
1 0
2
";

#[test]
fn reads_a_description_from_a_reader() {
    let dfa = Dfa::from_reader(ENDS_IN_01.as_bytes()).unwrap();
    assert_eq!(dfa.nstates(), 3);
    assert_eq!(dfa.nab(), 2);
    assert_eq!(dfa.alphabet(), &['0', '1']);
    assert!(dfa.accepts("01"));
    assert!(dfa.accepts("11101"));
    assert!(!dfa.accepts("010"));
}

#[test]
fn parsed_automata_can_be_minimized_directly() {
    let dfa = Dfa::parse(ENDS_IN_01).unwrap();
    let minimized = dfa.minimize();
    assert_eq!(minimized.nstates(), 3);
    assert!(minimized.accepts("01"));
}

#[test]
fn diagnostics_name_the_offending_value() {
    let cases = [
        ("2 1 a 1 7", "transition target 7 out of range for 2 states"),
        ("2 1 a 1 1 9", "accepting state 9 out of range for 2 states"),
        ("2 x a", "invalid integer 'x'"),
        ("0 1 a", "state count must be at least 1, got 0"),
        ("1 0", "alphabet size must be at least 1, got 0"),
        ("1 1 xy 0", "alphabet symbol 'xy' must be a single printable character"),
        ("2 1 a", "unexpected end of input while reading the transition matrix"),
    ];
    for (input, expected) in cases {
        let message = Dfa::parse(input).unwrap_err().to_string();
        assert_eq!(message, expected, "diagnostic for '{}' is wrong", input);
    }
}

#[test]
fn missing_transitions_reject_instead_of_trapping() {
    // State 1 has no outgoing transitions at all.
    let dfa = Dfa::parse("2 1 a 1 -1 1").unwrap();
    assert!(dfa.accepts("a"));
    assert!(!dfa.accepts("aa"));
    let minimized = dfa.minimize();
    for word in ["", "a", "aa", "aaa"] {
        assert_eq!(dfa.accepts(word), minimized.accepts(word));
    }
}
