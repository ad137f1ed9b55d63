//! The `dot` module contains the conversion from a DFA to a graphviz dot
//! format. The functions in this module are used for visualization and
//! debugging purposes.

use std::io::Write;

use dot_writer::{Attributes, DotWriter, RankDirection, Shape, Style};

use crate::Dfa;

/// Render the DFA to a graphviz dot format.
/// The initial state is drawn in blue, accepting states in red and dead
/// states dashed.
pub(crate) fn dfa_render<W: Write>(dfa: &Dfa, label: &str, output: &mut W) {
    let mut writer = DotWriter::from(output);
    writer.set_pretty_print(true);
    let mut digraph = writer.digraph();
    digraph
        .set_label(label)
        .set_rank_direction(RankDirection::LeftRight);
    for state in dfa.state_ids() {
        let mut source_node = digraph.node_auto();
        source_node.set_label(&format!(
            "{}{}",
            dfa.attribute(state).prefix(),
            state.as_usize()
        ));
        if state == dfa.initial_state() {
            source_node
                .set_shape(Shape::Circle)
                .set_color(dot_writer::Color::Blue)
                .set_pen_width(3.0);
        }
        if dfa.is_accepting(state) {
            source_node
                .set_shape(Shape::Circle)
                .set_color(dot_writer::Color::Red)
                .set_pen_width(3.0);
        }
        if dfa.is_dead(state) {
            source_node.set_style(Style::Dashed);
        }
    }
    for state in dfa.state_ids() {
        for symbol in dfa.symbol_ids() {
            if let Some(target) = dfa.transition(state, symbol) {
                digraph
                    .edge(
                        &format!("node_{}", state.as_usize()),
                        &format!("node_{}", target.as_usize()),
                    )
                    .attributes()
                    .set_label(&format!("{}", dfa.alphabet()[symbol.as_usize()]));
            }
        }
    }
}
