use tracing::trace;

use super::error::ParseError;
use super::options::ParseOptions;
use super::store::Store;


/// Transient state for a single parse, threaded through the parsing
/// routines and discarded once parsing completes.
struct ParseState {
    /// The currently open section, if any.
    current_section: Option<String>,

    /// 1-indexed line counter. It is only advanced past lines that
    /// parsed successfully, so on failure it names the failing line.
    line_number: usize,
}

/// What a parse produced: the store (partial if an error occurred,
/// containing everything parsed before the failure point) and the
/// first error encountered, if any.
pub(crate) struct ParseOutcome {
    pub store: Store,
    pub error: Option<ParseError>,
}


/// Parses the full input text, stopping at the first failing line.
pub(crate) fn parse_text(text: &str, options: &ParseOptions) -> ParseOutcome {
    let mut store = Store::default();
    let mut state = ParseState {
        current_section: None,
        line_number: 1,
    };

    for raw_line in text.lines() {
        // Trailing whitespace is stripped before classification;
        // leading whitespace is deliberately left alone.
        let line = raw_line.trim_end();

        if let Err(error) = parse_line(line, options, &mut state, &mut store) {
            return ParseOutcome {
                store,
                error: Some(error),
            };
        }

        state.line_number += 1;
    }

    // The last declared section can only be caught empty here,
    // once end of input is reached.
    if store.has_empty_sections() {
        return ParseOutcome {
            store,
            error: Some(ParseError::EmptySection {
                line: state.line_number.saturating_sub(1),
            }),
        };
    }

    ParseOutcome { store, error: None }
}


/// Classifies and processes a single (already right-trimmed) line.
fn parse_line(
    line: &str,
    options: &ParseOptions,
    state: &mut ParseState,
    store: &mut Store,
) -> Result<(), ParseError> {
    // Blank lines are ignored anywhere.
    if line.is_empty() {
        return Ok(());
    }

    // Full-line comments are ignored entirely. Classification inspects
    // the first column as-is, so an indented comment is not one.
    if options.is_comment_line(line) {
        return Ok(());
    }

    if line.starts_with('[') {
        return parse_section_header(line, state, store);
    }

    // Anything else must be a key-value pair, split at the first `=`.
    match line.find('=') {
        Some(index) => parse_pair(&line[..index], &line[index + 1..], options, state, store),
        None => Err(ParseError::NoValueForKey {
            line: state.line_number,
        }),
    }
}


fn parse_section_header(
    line: &str,
    state: &mut ParseState,
    store: &mut Store,
) -> Result<(), ParseError> {
    // Before opening a new section, every previously declared section
    // must have acquired at least one field.
    if store.has_empty_sections() {
        return Err(ParseError::EmptySection {
            line: state.line_number,
        });
    }

    let closing_index = line.find(']').ok_or(ParseError::NoClosingBracket {
        line: state.line_number,
    })?;

    // Section name is the text between the brackets, with trailing
    // whitespace inside the brackets stripped.
    let name = line[1..closing_index].trim_end();

    trace!(section = name, line = state.line_number, "Opening section.");

    store.open_section(name);
    state.current_section = Some(name.to_owned());

    Ok(())
}


fn parse_pair(
    raw_key: &str,
    raw_value: &str,
    options: &ParseOptions,
    state: &mut ParseState,
    store: &mut Store,
) -> Result<(), ParseError> {
    let Some(section) = state.current_section.as_deref() else {
        return Err(ParseError::KeyOutsideSection {
            line: state.line_number,
        });
    };

    let key = raw_key.trim();
    let value = raw_value.trim();

    if value.is_empty() {
        return Err(ParseError::NoValueForKey {
            line: state.line_number,
        });
    }

    let value = if value.starts_with('"') {
        // Quoted value: everything between the first and the last quote
        // is taken verbatim, inline comments included.
        let closing_index = value
            .rfind('"')
            .filter(|&index| index != 0)
            .ok_or(ParseError::NoClosingQuotation {
                line: state.line_number,
            })?;

        &value[1..closing_index]
    } else {
        options.strip_inline_comment(value)
    };

    trace!(
        section,
        key,
        line = state.line_number,
        "Storing key-value pair."
    );

    store.insert(section, key.to_owned(), value.to_owned());

    Ok(())
}
