//! Simulated code assistance: a substring-based run check, a whitespace and
//! brace fixer, and a fixed help table. Nothing here parses or executes code.

use crate::code::{RunResponse, RunStatus};
use std::collections::HashMap;

const TOPICS: [(&str, &str); 4] = [
    (
        "error",
        "Common errors include missing semicolons, undefined variables, or incorrect package imports.",
    ),
    (
        "loop",
        "In Go, use 'for' for loops. Example: for i := 0; i < 5; i++ { ... }",
    ),
    (
        "function",
        "Define functions with 'func' keyword. Example: func add(a, b int) int { return a + b }",
    ),
    (
        "syntax",
        "Go syntax requires proper formatting. Use 'go fmt' to format your code.",
    ),
];

lazy_static::lazy_static! {
    static ref HELP: HashMap<&'static str, &'static str> = TOPICS.iter().copied().collect();
    static ref FALLBACK: String = {
        let names: Vec<&str> = TOPICS.iter().map(|(name, _)| *name).collect();
        format!("I can help with: {}. Ask about any of these topics.", names.join(", "))
    };
}

/// Pretends to run `code`, reporting the first rule it trips.
pub fn check_run(code: &str) -> RunResponse {
    let (status, output) = if code.trim().is_empty() {
        (RunStatus::Error, "Empty code provided")
    } else if code.contains("func main()") && !code.contains("package main") {
        (RunStatus::Error, "Missing 'package main' declaration")
    } else {
        (RunStatus::Success, "Code executed successfully (simulated)")
    };
    RunResponse {
        status,
        output: output.to_string(),
    }
}

/// Strips trailing blanks, closes unbalanced braces, then normalizes line
/// endings. Braces are counted before `\r` is rewritten.
pub fn autofix(code: &str) -> String {
    let lines: Vec<&str> = code
        .split('\n')
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect();
    let mut fixed = lines.join("\n").trim_end_matches('\n').to_string();

    let open = fixed.matches('{').count();
    let close = fixed.matches('}').count();
    if open > close {
        fixed.push_str(&"\n}".repeat(open - close));
    }

    fixed.replace("\r\n", "\n").replace('\r', "\n")
}

/// Looks up a help topic by its lowercased name.
pub fn help_text(query: &str) -> &'static str {
    HELP.get(query.to_lowercase().as_str())
        .copied()
        .unwrap_or_else(|| FALLBACK.as_str())
}
