//! Removal of code fences that completions wrap around structured output.

use super::patterns::{GENERIC_FENCE, JSON_FENCE};

/// Return the inner content of the first fenced block in `text`.
///
/// A ```` ```json ```` block wins over an untagged ```` ``` ```` block; when
/// neither is present the whole input is returned trimmed.
pub fn strip_fencing(text: &str) -> String {
    for pattern in [&*JSON_FENCE, &*GENERIC_FENCE] {
        if let Some(inner) = pattern.captures(text).and_then(|caps| caps.get(1)) {
            return inner.as_str().trim().to_string();
        }
    }

    text.trim().to_string()
}
