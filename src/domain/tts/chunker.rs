/// Default synthesis unit size in characters
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 5000;

/// Split text into chunks of at most `max_chars` characters, breaking at
/// whitespace.
///
/// Whitespace runs collapse to a single space. When every break falls on
/// whitespace, `chunks.join(" ")` gives back the normalized source. A word
/// longer than the limit is cut into `max_chars`-sized pieces with no space
/// between them. Sizes are counted in `char`s, not bytes.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }

            let chars: Vec<char> = word.chars().collect();
            let mut pieces = chars.chunks(max_chars).peekable();
            while let Some(piece) = pieces.next() {
                let piece: String = piece.iter().collect();
                if pieces.peek().is_some() {
                    chunks.push(piece);
                } else {
                    // The tail may still share a chunk with the following words
                    current_len = piece.chars().count();
                    current = piece;
                }
            }
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_chars {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            chunks.push(std::mem::replace(&mut current, word.to_string()));
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
