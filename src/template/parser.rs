//! Template string tokenizer

use crate::template::token::{Directive, Token};
use smallvec::SmallVec;

/// Directive marker character
pub const MARKER: char = '%';

/// Token sequence of a parsed template; most templates have only a few parts
pub type Tokens = SmallVec<[Token; 4]>;

/// Tokenize a template string in a single left-to-right pass
///
/// Every `%` consumes exactly one following character as its specifier. A
/// trailing `%` with nothing after it reads a blank specifier. Formatting
/// directives (`%%`, `%>`, `%n`) and unknown specifiers are folded into the
/// surrounding literal text, so only score-bearing directives survive as
/// [`Token::Directive`].
pub fn tokenize(template: &str) -> Tokens {
    let mut tokens = Tokens::new();
    let mut literal = String::new();
    let mut chars = template.chars();

    while let Some(c) = chars.next() {
        if c != MARKER {
            literal.push(c);
            continue;
        }

        let specifier = chars.next().unwrap_or(' ');

        if let Some(directive) = Directive::from_specifier(specifier) {
            if !literal.is_empty() {
                tokens.push(Token::Literal(std::mem::take(&mut literal)));
            }
            tokens.push(Token::Directive(directive));
            continue;
        }

        match specifier {
            '%' => literal.push('%'),
            '>' => literal.push_str("%>"),
            'n' => literal.push('\n'),
            other => {
                literal.push(MARKER);
                literal.push(other);
            }
        }
    }

    if !literal.is_empty() {
        tokens.push(Token::Literal(literal));
    }

    tokens
}
