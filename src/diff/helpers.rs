//! Helper functions for diff parsing.

use regex::Regex;
use std::sync::LazyLock;

/// `@@ -199,8 +208,9 @@`, `@@ -0,0 +1 @@`, `@@ -1 +1,60 @@`, ...
///
/// Searched anywhere in the line so trailing function context is accepted.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"@@ -\d+(,\d+)? \+(\d+)(,\d+)? @@").expect("hunk header regex is valid")
});

/// Extract the new-file start line from a hunk header.
///
/// Returns `None` if the header does not match the unified diff grammar
/// or the start line does not fit in a `usize`.
pub(super) fn parse_hunk_new_start(line: &str) -> Option<usize> {
    let caps = HUNK_HEADER.captures(line)?;
    caps.get(2)?.as_str().parse().ok()
}

/// Parse the destination path from the remainder of a "diff --git" line.
///
/// Handles:
/// - "a/path/to/file b/path/to/file" (normal)
/// - "a/path/to/file b/path/to/renamed" (rename)
/// - "\"a/with space\" \"b/with space\"" (quoted)
///
/// Returns the "b/" path, or None if parsing fails.
pub(super) fn parse_diff_git_line(rest: &str) -> Option<String> {
    if let Some(quoted) = rest.strip_suffix('"')
        && let Some(start) = quoted.rfind("\"b/")
    {
        return Some(unquote(&quoted[start + 3..]));
    }

    // Paths can contain spaces; the last " b/" separates the two sides.
    let b_pos = rest.rfind(" b/")?;
    Some(rest[b_pos + 3..].to_string())
}

/// Parse the path from a "+++ " line.
///
/// Returns `Some(None)` for `/dev/null` (deleted file), `Some(Some(path))`
/// for `b/<path>`, and `None` if the line has an unexpected shape.
pub(super) fn parse_new_file_line(rest: &str) -> Option<Option<String>> {
    let rest = rest.trim_end_matches('\t');
    if rest == "/dev/null" {
        return Some(None);
    }

    let unquoted = match rest.strip_prefix('"').and_then(|r| r.strip_suffix('"')) {
        Some(inner) => unquote(inner),
        None => rest.to_string(),
    };

    unquoted.strip_prefix("b/").map(|path| Some(path.to_string()))
}

/// Undo git's C-style path quoting.
///
/// Octal escapes encode raw bytes, so the path is rebuilt as bytes and
/// decoded afterwards. Unknown escapes are kept verbatim.
fn unquote(s: &str) -> String {
    let mut out: Vec<u8> = Vec::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();
    while let Some(b) = bytes.next() {
        if b != b'\\' {
            out.push(b);
            continue;
        }
        let Some(esc) = bytes.next() else {
            out.push(b'\\');
            break;
        };
        match esc {
            b'a' => out.push(0x07),
            b'b' => out.push(0x08),
            b'f' => out.push(0x0c),
            b'n' => out.push(b'\n'),
            b'r' => out.push(b'\r'),
            b't' => out.push(b'\t'),
            b'v' => out.push(0x0b),
            b'"' => out.push(b'"'),
            b'\\' => out.push(b'\\'),
            b'0'..=b'7' => {
                let mut value = u32::from(esc - b'0');
                for _ in 0..2 {
                    match bytes.peek() {
                        Some(&d @ b'0'..=b'7') => {
                            value = value * 8 + u32::from(d - b'0');
                            bytes.next();
                        }
                        _ => break,
                    }
                }
                // Git never emits escapes above \377
                out.push((value & 0xff) as u8);
            }
            other => {
                out.push(b'\\');
                out.push(other);
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
