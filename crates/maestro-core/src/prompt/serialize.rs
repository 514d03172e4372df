//! Prompt document rendering.

use crate::field::Field;
use crate::state::SelectionState;

use super::{AUTOMATIC_INPUT, AUTOMATIC_INPUTS_MARKER, USER_INPUTS_HEADER};

const PREAMBLE: &str = "Song prompt for an AI music generator.";

const INSTRUCTIONS: &str = "\
Every field above set to \"AUTOMATIC_INPUT\" is left open on purpose: choose
a value for it yourself, coherent with the user inputs, the conventions of
the selected genre, and the emotional vibe. Write the lyrics in the language
given by \"language\" and lay the song out following \"structure_format\".
Do not restate this prompt in the output.";

/// Renders the fixed-schema prompt document from the current form values.
///
/// A pure function of the state: the same state always yields an identical
/// document. Empty fields render as the sentinel; list fields join their
/// non-empty elements with ", ". Values are interpolated verbatim, so a
/// value containing `"` will not survive a later restore intact.
pub fn render_prompt(state: &SelectionState) -> String {
    let mut document = String::new();
    document.push_str(PREAMBLE);
    document.push_str("\n\n");
    document.push_str(USER_INPUTS_HEADER);
    document.push('\n');

    for field in Field::ALL {
        let text = state.field_value(field).document_text();
        let text = if text.is_empty() { AUTOMATIC_INPUT } else { &text };
        document.push_str(&format!("{}: \"{}\"\n", field.label(), text));
    }

    document.push('\n');
    document.push_str(AUTOMATIC_INPUTS_MARKER);
    document.push('\n');
    document.push_str(INSTRUCTIONS);
    document.push('\n');
    document
}
