//! Tool directive parsing from model replies.
//!
//! The model is asked to answer with a bare JSON object when it wants a
//! tool, but compliance is not guaranteed: replies may wrap the object in a
//! ` ```json` fence, surround it with prose, or contain several JSON-like
//! fragments. [`interpret`] is a best-effort heuristic over those shapes,
//! not a strict grammar.
//!
//! Candidates are tried in this order, and the first one that parses and
//! has the directive shape wins:
//!
//! 1. The contents of each ` ```json` fenced block (label is case-insensitive)
//! 2. Every balanced `{...}` substring, by position of its opening brace
//!
//! Anything else is a plain assistant reply and yields `None`.

use crate::core::error::DomainError;
use crate::tool::entities::ToolCall;

/// Extract a tool directive from raw model text.
///
/// Never panics; malformed candidates are skipped.
pub fn interpret(raw_text: &str) -> Option<ToolCall> {
    if let Some(call) = fenced_json_blocks(raw_text)
        .iter()
        .find_map(|block| parse_directive(block).ok())
    {
        return Some(call);
    }

    balanced_objects(raw_text).find_map(|candidate| parse_directive(candidate).ok())
}

/// Parse a single candidate substring into a directive.
pub fn parse_directive(candidate: &str) -> Result<ToolCall, DomainError> {
    let value: serde_json::Value = serde_json::from_str(candidate.trim())
        .map_err(|e| DomainError::MalformedDirective(e.to_string()))?;
    ToolCall::from_json(&value)
}

/// Collect the bodies of ` ```json ... ``` ` blocks.
fn fenced_json_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        match current.as_mut() {
            None => {
                if let Some(label) = trimmed.strip_prefix("```")
                    && label.trim().eq_ignore_ascii_case("json")
                {
                    current = Some(String::new());
                }
            }
            Some(block) => {
                if trimmed == "```" {
                    blocks.extend(current.take());
                } else {
                    block.push_str(line);
                    block.push('\n');
                }
            }
        }
    }

    blocks
}

/// Iterate over every balanced `{...}` substring, ordered by the position of
/// the opening brace.
fn balanced_objects(text: &str) -> impl Iterator<Item = &str> {
    let mut spans = brace_spans(text.as_bytes());
    spans.sort_unstable_by_key(|&(start, _)| start);
    spans.into_iter().map(move |(start, end)| &text[start..=end])
}

/// Pair every `{` with its closing `}` in a single left-to-right pass.
///
/// String literals are tracked only inside an open object, so quotes in the
/// surrounding prose do not hide the braces that follow them. Braces inside
/// string literals are ignored. Unmatched braces produce no span.
fn brace_spans(bytes: &[u8]) -> Vec<(usize, usize)> {
    let mut open = Vec::new();
    let mut spans = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (index, &byte) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if byte == b'\\' {
                escaped = true;
            } else if byte == b'"' {
                in_string = false;
            }
            continue;
        }

        match byte {
            b'"' if !open.is_empty() => in_string = true,
            b'{' => open.push(index),
            b'}' => {
                if let Some(start) = open.pop() {
                    spans.push((start, index));
                }
            }
            _ => {}
        }
    }

    spans
}
