//! SQL `LIKE` pattern helpers shared by the query layer and the in-memory
//! store.
//!
//! Patterns use `%` for any run of characters, `_` for exactly one
//! character and `\` to escape either wildcard. Matching is
//! case-insensitive, mirroring `ILIKE` in PostgreSQL.

/// Escapes user text so it matches literally inside a `LIKE` pattern.
pub fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// `%raw%`: rows whose column contains `raw` anywhere.
pub fn contains_pattern(raw: &str) -> String {
    format!("%{}%", escape_like(raw))
}

/// `raw%`: rows whose column starts with `raw`.
pub fn prefix_pattern(raw: &str) -> String {
    format!("{}%", escape_like(raw))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Literal(char),
    AnyOne,
    AnyMany,
}

fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(ch) = chars.next() {
        let token = match ch {
            '%' => Token::AnyMany,
            '_' => Token::AnyOne,
            // A trailing backslash matches itself.
            '\\' => Token::Literal(chars.next().unwrap_or('\\')),
            other => Token::Literal(other),
        };
        tokens.push(token);
    }
    tokens
}

fn fold(ch: char) -> impl Iterator<Item = char> {
    ch.to_lowercase()
}

/// Case-insensitive `LIKE` evaluation of `pattern` against `candidate`.
pub fn like_matches(pattern: &str, candidate: &str) -> bool {
    let tokens: Vec<Token> = tokenize(pattern)
        .into_iter()
        .flat_map(|token| match token {
            Token::Literal(ch) => {
                fold(ch).map(Token::Literal).collect::<Vec<_>>()
            }
            other => vec![other],
        })
        .collect();
    let text: Vec<char> = candidate.chars().flat_map(fold).collect();

    // Greedy wildcard matching with a single backtrack point.
    let (mut t, mut p) = (0usize, 0usize);
    let mut backtrack: Option<(usize, usize)> = None;
    while t < text.len() {
        match tokens.get(p) {
            Some(Token::AnyMany) => {
                backtrack = Some((p, t));
                p += 1;
            }
            Some(Token::AnyOne) => {
                p += 1;
                t += 1;
            }
            Some(Token::Literal(ch)) if *ch == text[t] => {
                p += 1;
                t += 1;
            }
            _ => match backtrack {
                Some((star, resume)) => {
                    p = star + 1;
                    t = resume + 1;
                    backtrack = Some((star, resume + 1));
                }
                None => return false,
            },
        }
    }
    tokens[p..].iter().all(|token| *token == Token::AnyMany)
}
