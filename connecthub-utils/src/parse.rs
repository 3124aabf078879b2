use crate::COMMAND_PREFIX;

/// Split a shell line like `!award 20 "shared a post"` into words.
///
/// Returns `None` when the line does not start with the command prefix or a
/// quote is left open. Double quotes group words; they are not kept.
pub fn split_command_line(raw: &str) -> Option<Vec<String>> {
    let line = raw.trim().strip_prefix(COMMAND_PREFIX)?;

    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut saw_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => {
                in_quotes = !in_quotes;
                saw_quotes = true;
            }
            ch if ch.is_whitespace() && !in_quotes => {
                if !current.is_empty() || saw_quotes {
                    words.push(std::mem::take(&mut current));
                }
                saw_quotes = false;
            }
            ch => current.push(ch),
        }
    }

    if in_quotes {
        return None;
    }

    if !current.is_empty() || saw_quotes {
        words.push(current);
    }

    if words.is_empty() {
        return None;
    }

    words[0] = words[0].to_ascii_lowercase();
    Some(words)
}

/// Parse a 1-based page number.
pub fn parse_page(raw: &str) -> Option<usize> {
    raw.trim().parse::<usize>().ok().filter(|page| *page >= 1)
}
