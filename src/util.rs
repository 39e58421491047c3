//! String helpers for class names and CSS tokens.

/// Turns a style key into a fragment safe for a CSS class name.
///
/// ASCII letters are lower-cased and every character outside `[a-z0-9_-]`
/// is replaced with `-`, one dash per character.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::sanitize_key;
///
/// assert_eq!(sanitize_key("My Key!"), "my-key-");
/// assert_eq!(sanitize_key("dark_mode-2"), "dark_mode-2");
/// ```
pub fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Escapes a selector, property name or value for output inside a `<style>` element.
///
/// Characters that could close a declaration or block, open a string,
/// start an at-rule, open a comment or end the surrounding element are
/// written as CSS hex escapes (`\7d ` for `}`), so they stay part of the
/// token they appear in. Parentheses and square brackets are kept only when
/// they pair up inside the token; an unmatched one would hold a block open
/// past the end of the token, so it is escaped too. Everything else passes
/// through untouched, which keeps ordinary values such as `var(--x)`,
/// `#fff` or `.a > .b` readable.
///
/// # Example
///
/// ```rust
/// use page_style_inheritance::escape_css_token;
///
/// assert_eq!(escape_css_token("#fff"), "#fff");
/// assert_eq!(escape_css_token("red; }"), "red\\3b  \\7d ");
/// assert_eq!(escape_css_token("calc("), "calc\\28 ");
/// ```
pub fn escape_css_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let unmatched = unmatched_brackets(&chars);
    let mut escaped = String::with_capacity(token.len());

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '{' | '}' | ';' | '\\' | '<' | '@' | '"' | '\'' => push_hex_escape(&mut escaped, c),
            '/' if chars.get(i + 1) == Some(&'*') => push_hex_escape(&mut escaped, c),
            '(' | ')' | '[' | ']' if unmatched[i] => push_hex_escape(&mut escaped, c),
            c if c.is_control() => push_hex_escape(&mut escaped, c),
            c => escaped.push(c),
        }
    }

    escaped
}

/// Marks every `(`, `)`, `[` or `]` that has no partner within the token.
///
/// Quotes, backslashes and comment openers are always escaped, so every
/// bracket left in the output is a structural one and plain nesting decides.
fn unmatched_brackets(chars: &[char]) -> Vec<bool> {
    let mut unmatched = vec![false; chars.len()];
    let mut open: Vec<(char, usize)> = Vec::new();

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '(' | '[' => open.push((c, i)),
            ')' | ']' => {
                let opener = if c == ')' { '(' } else { '[' };
                match open.last() {
                    Some(&(top, _)) if top == opener => {
                        open.pop();
                    }
                    _ => unmatched[i] = true,
                }
            }
            _ => {}
        }
    }

    for (_, i) in open {
        unmatched[i] = true;
    }
    unmatched
}

fn push_hex_escape(out: &mut String, c: char) {
    // The trailing space terminates the escape and is consumed by the tokenizer.
    out.push_str(&format!("\\{:x} ", c as u32));
}
