use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STRUCT_START: Regex = Regex::new(r"^\s*uniform\s+struct\s+(\w+)").unwrap();
    static ref PLAIN_UNIFORM: Regex = Regex::new(r"^\s*uniform\s+\w.*\s+(\w.*);").unwrap();
    static ref STRUCT_END: Regex = Regex::new(r"\}(.*?);").unwrap();
}

/// Match `uniform struct <Type>`, returning the declared type name.
pub fn struct_start(line: &str) -> Option<&str> {
    STRUCT_START
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Match a single-identifier plain uniform declaration. The capture is the
/// text between the last whitespace run and the trailing semicolon;
/// comma-separated declarator lists are not supported.
pub fn plain_uniform(line: &str) -> Option<&str> {
    PLAIN_UNIFORM
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// Match a struct-terminating `}...;` line, returning the instance name
/// between the brace and the semicolon. A `}` without a `;` on the same line
/// does not terminate a struct body.
pub fn struct_end(line: &str) -> Option<&str> {
    STRUCT_END
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}
