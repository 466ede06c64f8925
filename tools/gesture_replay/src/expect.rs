use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

const KNOWN_KINDS: [&str; 15] = [
    "down",
    "move",
    "up",
    "tap",
    "double_tap",
    "swipe_up",
    "swipe_down",
    "swipe_left",
    "swipe_right",
    "swipe_upper_left",
    "swipe_upper_right",
    "swipe_bottom_left",
    "swipe_bottom_right",
    "pinch_in",
    "pinch_out",
];

pub fn read_expected_kinds(path: &Path) -> Result<Vec<String>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_expected_kinds(&text, &path.display().to_string())
}

pub fn parse_expected_kinds(text: &str, origin: &str) -> Result<Vec<String>> {
    let mut kinds = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() || token.starts_with('#') {
            continue;
        }
        let normalized = token.to_ascii_lowercase();
        if !KNOWN_KINDS.contains(&normalized.as_str()) {
            bail!(
                "{origin}:{} invalid expected event kind: {token}",
                line_no + 1
            );
        }
        kinds.push(normalized);
    }
    Ok(kinds)
}
