/// Characters with meaning in the post grammar. Inside code and after a
/// backslash these are written as numeric entities so no rule can see them.
pub const MARKUP_CHARS: &[char] = &[
    '\\', '`', '*', '_', '{', '}', '[', ']', '(', ')', '#', '+', '-', '.', '!', ' ', '~', '<',
    '>', ':', '/',
];

pub fn is_markup_char(ch: char) -> bool {
    MARKUP_CHARS.contains(&ch)
}

pub fn push_entity(out: &mut String, ch: char) {
    out.push_str("&#");
    out.push_str(&(ch as u32).to_string());
    out.push(';');
}

pub fn escape_html_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub fn escape_html_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes code content: markup characters become numeric entities.
pub fn escape_code(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() * 2);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            c if is_markup_char(c) => push_entity(&mut escaped, c),
            _ => escaped.push(ch),
        }
    }
    escaped
}
