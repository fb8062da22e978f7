/// Discord's per-message content limit, in characters.
pub const MESSAGE_LIMIT: usize = 2000;

/// Split `text` into messages of at most `limit` characters, breaking on line
/// boundaries where possible.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let mut messages = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.lines() {
        let line_len = line.chars().count();
        let needed = if current.is_empty() { line_len } else { line_len + 1 };

        if current_len + needed > limit && !current.is_empty() {
            messages.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            // A single line that can't fit anywhere gets cut hard.
            let chars: Vec<char> = line.chars().collect();
            for piece in chars.chunks(limit) {
                messages.push(piece.iter().collect());
            }
            continue;
        }

        if !current.is_empty() {
            current.push('\n');
            current_len += 1;
        }
        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        messages.push(current);
    }
    messages
}
