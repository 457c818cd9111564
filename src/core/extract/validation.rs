//! Line scanner for protovalidate CEL rule blocks.
//!
//! Rule identifiers live inside option values, e.g.
//!
//! ```text
//! string name = 1 [(buf.validate.field).cel = {
//!   id: "name_required"
//!   message: "name must not be empty"
//!   expression: "this.size() > 0"
//! }];
//! ```
//!
//! The parsed descriptor keeps these as uninterpreted options, so the raw text
//! is scanned instead.

use crate::utils::quoted_value;

const ID_FIELD: &str = "id:";
const MESSAGE_FIELD: &str = "message:";
const BLOCK_CLOSERS: &[&str] = &["}];", "},"];

/// A rule identifier and the message declared next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRule {
    pub id: String,
    pub message: Option<String>,
}

#[derive(Debug)]
enum ScanState {
    Seeking,
    InBlock {
        /// Index in the output of the last id seen in this block.
        rule: Option<usize>,
        message: Option<String>,
    },
}

/// Scans `content` for rule blocks opened by a line containing `marker`.
///
/// Every `id:` value is returned, in order. When a block is closed with `}];`
/// or `},` its last id carries the block's message, or `""` if it declared
/// none. A block still open at end of input keeps its id without a message.
pub fn scan_validation_rules(content: &str, marker: &str) -> Vec<ValidationRule> {
    let mut rules: Vec<ValidationRule> = Vec::new();
    let mut state = ScanState::Seeking;

    for line in content.lines() {
        state = match state {
            ScanState::Seeking if line.contains(marker) => ScanState::InBlock {
                rule: None,
                message: None,
            },
            ScanState::Seeking => ScanState::Seeking,
            ScanState::InBlock { rule, message } => {
                let line = line.trim();
                if line.starts_with(ID_FIELD) {
                    let rule = match quoted_value(line) {
                        Some(id) => {
                            rules.push(ValidationRule {
                                id: id.to_string(),
                                message: None,
                            });
                            Some(rules.len() - 1)
                        }
                        None => rule,
                    };
                    ScanState::InBlock { rule, message }
                } else if line.starts_with(MESSAGE_FIELD) {
                    let message = quoted_value(line).map(str::to_string).or(message);
                    ScanState::InBlock { rule, message }
                } else if BLOCK_CLOSERS.iter().any(|closer| line.starts_with(closer)) {
                    if let Some(index) = rule {
                        rules[index].message = Some(message.unwrap_or_default());
                    }
                    ScanState::Seeking
                } else {
                    ScanState::InBlock { rule, message }
                }
            }
        };
    }

    rules
}
