//! Line tokenizer for delimited bill files
//!
//! The dialect is deliberately lenient: every `"` toggles quoting and is
//! dropped, so a quoted segment may hold the delimiter but there is no way to
//! write a literal quote. Doubled quotes (`""`) simply toggle twice.

/// Default field delimiter
pub const DEFAULT_DELIMITER: char = ',';

/// Quote character that toggles literal mode
pub const QUOTE: char = '"';

/// Split one line into trimmed fields
///
/// A trailing field is always emitted, so an empty line yields one empty
/// field and `"a,"` yields `["a", ""]`.
pub fn tokenize_line(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == QUOTE {
            in_quotes = !in_quotes;
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    fields.push(current.trim().to_string());
    fields
}
