//! Label wrapping for annotation text

/// Break `text` into lines of at most `max_chars` characters.
///
/// Words (split on single spaces) are packed greedily. A word that does not
/// fit on a line by itself is cut into `max_chars`-sized pieces; its last
/// piece starts the next line. Lengths are counted in chars.
pub fn wrap_label(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    if text.chars().count() <= max_chars {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split(' ') {
        let word_len = word.chars().count();
        let joined_len = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if joined_len <= max_chars {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = joined_len;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        let mut rest: Vec<char> = word.chars().collect();
        while rest.len() > max_chars {
            lines.push(rest.drain(..max_chars).collect());
        }
        current = rest.into_iter().collect();
        current_len = current.chars().count();
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
