//! Restricted structured-literal parsing for list input.
//!
//! [`ListValidator`](crate::validators::ListValidator) needs to turn text
//! like `[1, "two", (3.0, None)]` into data. The original approach in tools
//! of this kind is to hand the string to a general literal evaluator; here
//! the grammar is a closed, hand-written one instead, so arbitrary code
//! evaluation is impossible by construction. The parser recognizes numbers,
//! strings, booleans, `None`/`null`, and nested lists, tuples and dicts —
//! nothing else.

use thiserror::Error;

/// Maximum nesting depth accepted before parsing bails out.
const MAX_DEPTH: usize = 64;

/// A parsed structured literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    None,
    List(Vec<Literal>),
    Tuple(Vec<Literal>),
    Dict(Vec<(Literal, Literal)>),
}

/// Errors raised while parsing a structured literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },
    #[error("unterminated string starting at position {position}")]
    UnterminatedString { position: usize },
    #[error("invalid escape sequence at position {position}")]
    InvalidEscape { position: usize },
    #[error("invalid number at position {position}")]
    InvalidNumber { position: usize },
    #[error("unexpected end of input")]
    UnexpectedEnd,
    #[error("trailing input at position {position}")]
    TrailingInput { position: usize },
    #[error("literal nesting exceeds {MAX_DEPTH} levels")]
    TooDeep,
}

/// Parses a complete structured literal out of `input`.
///
/// Surrounding whitespace is ignored; anything left over after one complete
/// literal is an error.
pub fn parse(input: &str) -> Result<Literal, ParseError> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    match parser.peek() {
        Some((position, _)) => Err(ParseError::TrailingInput { position }),
        None => Ok(value),
    }
}

struct Parser<'a> {
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            chars: input.char_indices().peekable(),
        }
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<(usize, char)> {
        self.chars.next()
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some((_, c)) if c.is_whitespace()) {
            self.bump();
        }
    }

    /// Consumes `expected` or fails with the position of whatever is there.
    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        match self.peek() {
            Some((_, c)) if c == expected => {
                self.bump();
                Ok(())
            }
            Some((position, character)) => Err(ParseError::UnexpectedCharacter {
                character,
                position,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Literal, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep);
        }

        match self.peek() {
            Some((_, '[')) => self.parse_list(depth),
            Some((_, '(')) => self.parse_parenthesized(depth),
            Some((_, '{')) => self.parse_dict(depth),
            Some((_, '\'')) | Some((_, '"')) => self.parse_string(),
            Some((_, c)) if c.is_ascii_digit() || c == '-' || c == '+' || c == '.' => {
                self.parse_number()
            }
            Some((_, c)) if c.is_alphabetic() => self.parse_word(),
            Some((position, character)) => Err(ParseError::UnexpectedCharacter {
                character,
                position,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_list(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('[')?;
        let items = self.parse_items(']', depth)?;
        Ok(Literal::List(items))
    }

    /// Parentheses follow the original list-literal notation: `()` is the
    /// empty tuple, a single element without a trailing comma is mere
    /// grouping, and anything with a comma is a tuple.
    fn parse_parenthesized(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('(')?;
        self.skip_whitespace();
        if matches!(self.peek(), Some((_, ')'))) {
            self.bump();
            return Ok(Literal::Tuple(Vec::new()));
        }

        let first = self.parse_value(depth + 1)?;
        self.skip_whitespace();
        match self.peek() {
            Some((_, ')')) => {
                self.bump();
                Ok(first)
            }
            Some((_, ',')) => {
                self.bump();
                let mut items = vec![first];
                items.extend(self.parse_items(')', depth)?);
                Ok(Literal::Tuple(items))
            }
            Some((position, character)) => Err(ParseError::UnexpectedCharacter {
                character,
                position,
            }),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Parses the comma-separated tail of a sequence up to `close`.
    /// A trailing comma before the closing bracket is accepted.
    fn parse_items(&mut self, close: char, depth: usize) -> Result<Vec<Literal>, ParseError> {
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if matches!(self.peek(), Some((_, c)) if c == close) {
                self.bump();
                return Ok(items);
            }
            items.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some((_, ',')) => {
                    self.bump();
                }
                Some((_, c)) if c == close => {
                    self.bump();
                    return Ok(items);
                }
                Some((position, character)) => {
                    return Err(ParseError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }

    fn parse_dict(&mut self, depth: usize) -> Result<Literal, ParseError> {
        self.expect('{')?;
        let mut entries = Vec::new();
        loop {
            self.skip_whitespace();
            if matches!(self.peek(), Some((_, '}'))) {
                self.bump();
                return Ok(Literal::Dict(entries));
            }
            let key = self.parse_value(depth + 1)?;
            self.skip_whitespace();
            self.expect(':')?;
            self.skip_whitespace();
            let value = self.parse_value(depth + 1)?;
            entries.push((key, value));
            self.skip_whitespace();
            match self.peek() {
                Some((_, ',')) => {
                    self.bump();
                }
                Some((_, '}')) => {
                    self.bump();
                    return Ok(Literal::Dict(entries));
                }
                Some((position, character)) => {
                    return Err(ParseError::UnexpectedCharacter {
                        character,
                        position,
                    });
                }
                None => return Err(ParseError::UnexpectedEnd),
            }
        }
    }

    fn parse_string(&mut self) -> Result<Literal, ParseError> {
        let (start, quote) = self.bump().ok_or(ParseError::UnexpectedEnd)?;
        let mut text = String::new();
        loop {
            match self.bump() {
                Some((_, c)) if c == quote => return Ok(Literal::Str(text)),
                Some((position, '\\')) => match self.bump() {
                    Some((_, '\\')) => text.push('\\'),
                    Some((_, '\'')) => text.push('\''),
                    Some((_, '"')) => text.push('"'),
                    Some((_, 'n')) => text.push('\n'),
                    Some((_, 't')) => text.push('\t'),
                    Some((_, 'r')) => text.push('\r'),
                    Some((_, '0')) => text.push('\0'),
                    Some(_) => return Err(ParseError::InvalidEscape { position }),
                    None => return Err(ParseError::UnterminatedString { position: start }),
                },
                Some((_, c)) => text.push(c),
                None => return Err(ParseError::UnterminatedString { position: start }),
            }
        }
    }

    fn parse_number(&mut self) -> Result<Literal, ParseError> {
        let (start, _) = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        let mut text = String::new();
        let mut is_float = false;

        if matches!(self.peek(), Some((_, '+')) | Some((_, '-'))) {
            let (_, sign) = self.bump().ok_or(ParseError::UnexpectedEnd)?;
            text.push(sign);
        }

        while let Some((_, c)) = self.peek() {
            match c {
                '0'..='9' => text.push(c),
                '.' | 'e' | 'E' => {
                    is_float = true;
                    text.push(c);
                }
                // Exponent sign, only valid right after e/E.
                '+' | '-' if matches!(text.chars().last(), Some('e') | Some('E')) => {
                    text.push(c);
                }
                _ => break,
            }
            self.bump();
        }

        if is_float {
            text.parse::<f64>()
                .map(Literal::Float)
                .map_err(|_| ParseError::InvalidNumber { position: start })
        } else {
            text.parse::<i64>()
                .map(Literal::Int)
                .map_err(|_| ParseError::InvalidNumber { position: start })
        }
    }

    fn parse_word(&mut self) -> Result<Literal, ParseError> {
        let (start, _) = self.peek().ok_or(ParseError::UnexpectedEnd)?;
        let mut word = String::new();
        while matches!(self.peek(), Some((_, c)) if c.is_alphanumeric()) {
            let (_, c) = self.bump().ok_or(ParseError::UnexpectedEnd)?;
            word.push(c);
        }

        match word.as_str() {
            "True" | "true" => Ok(Literal::Bool(true)),
            "False" | "false" => Ok(Literal::Bool(false)),
            "None" | "null" => Ok(Literal::None),
            _ => Err(ParseError::UnexpectedCharacter {
                character: word.chars().next().unwrap_or('\0'),
                position: start,
            }),
        }
    }
}
