//! Recursive-descent parser for function expressions and definition files.

use crate::{
    err::MuError,
    lexer::{Lexer, Tok},
    library::{Library, constant},
    registry::*,
    syntax::{Func, MAX_DEPTH},
};
use std::{collections::HashSet, iter::Peekable};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid token at byte {at}")]
    InvalidToken { at: usize },
    #[error("unexpected `{found}` at byte {at}, expected {expected}")]
    UnexpectedToken { found: String, at: usize, expected: &'static str },
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: &'static str },
    #[error("integer `{text}` at byte {at} is out of range")]
    BadInteger { text: String, at: usize },
    #[error("unknown function `{0}`")]
    UnknownName(String),
    #[error("`{0}` is defined twice")]
    DuplicateName(String),
    #[error("expression at byte {at} nests deeper than {limit} levels")]
    TooDeep { at: usize, limit: usize },
    #[error(transparent)]
    Arity(#[from] MuError),
}

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse a single expression; names refer to `lib`.
pub fn parse_func(src: &str, lib: &Library) -> Result<Func> {
    let mut p = Parser::new(src);
    let func = p.expr(lib)?;
    p.end()?;
    Ok(func)
}

/// Parse a sequence of `def NAME = EXPR;` on top of `base`. Later definitions
/// may use earlier ones. A name from `base` may be redefined once.
pub fn parse_library(src: &str, base: &Library) -> Result<Library> {
    let mut lib = base.clone();
    let mut seen = HashSet::new();
    let mut p = Parser::new(src);
    while !p.at_end()? {
        p.expect(Tok::Define, "`def`")?;
        let name = p.ident()?;
        p.expect(Tok::Equals, "`=`")?;
        let func = p.expr(&lib)?;
        p.expect(Tok::Semicolon, "`;`")?;
        if !seen.insert(name.to_owned()) {
            Err(ParseError::DuplicateName(name.to_owned()))?
        }
        log::debug!("defined {} of arity {}", name, func.arity());
        lib.define(name, func);
    }
    Ok(lib)
}

struct Parser<'src> {
    toks: Peekable<Lexer<'src>>,
    depth: usize,
}

impl<'src> Parser<'src> {
    fn new(src: &'src str) -> Self {
        Parser { toks: Lexer::new(src).peekable(), depth: 0 }
    }
    fn peek(&mut self) -> Result<Option<Tok<'src>>> {
        match self.toks.peek() {
            | None => Ok(None),
            | Some(Ok((_, tok, _))) => Ok(Some(*tok)),
            | Some(Err(at)) => Err(ParseError::InvalidToken { at: *at }),
        }
    }
    fn next(&mut self, expected: &'static str) -> Result<(usize, Tok<'src>)> {
        match self.toks.next() {
            | None => Err(ParseError::UnexpectedEof { expected }),
            | Some(Ok((at, tok, _))) => Ok((at, tok)),
            | Some(Err(at)) => Err(ParseError::InvalidToken { at }),
        }
    }
    fn at_end(&mut self) -> Result<bool> {
        Ok(self.peek()?.is_none())
    }
    fn end(&mut self) -> Result<()> {
        match self.toks.next() {
            | None => Ok(()),
            | Some(Ok((at, tok, _))) => {
                Err(ParseError::UnexpectedToken { found: tok.to_string(), at, expected: "end of input" })
            }
            | Some(Err(at)) => Err(ParseError::InvalidToken { at }),
        }
    }
    fn expect(&mut self, want: Tok<'static>, expected: &'static str) -> Result<()> {
        let (at, tok) = self.next(expected)?;
        if tok != want {
            Err(ParseError::UnexpectedToken { found: tok.to_string(), at, expected })?
        }
        Ok(())
    }
    fn ident(&mut self) -> Result<&'src str> {
        match self.next("a name")? {
            | (_, Tok::Ident(name)) => Ok(name),
            | (at, tok) => {
                Err(ParseError::UnexpectedToken { found: tok.to_string(), at, expected: "a name" })
            }
        }
    }
    fn int<T: std::str::FromStr>(&mut self) -> Result<T> {
        match self.next("an integer")? {
            | (at, Tok::IntLit(text)) => {
                text.parse().map_err(|_| ParseError::BadInteger { text: text.to_owned(), at })
            }
            | (at, tok) => {
                Err(ParseError::UnexpectedToken { found: tok.to_string(), at, expected: "an integer" })
            }
        }
    }
    fn expr(&mut self, lib: &Library) -> Result<Func> {
        const EXPECTED: &str = "a function expression";
        let (at, tok) = self.next(EXPECTED)?;
        if self.depth == MAX_DEPTH {
            Err(ParseError::TooDeep { at, limit: MAX_DEPTH })?
        }
        self.depth += 1;
        let func = self.node(lib, at, tok)?;
        self.depth -= 1;
        Ok(func)
    }
    fn node(&mut self, lib: &Library, at: usize, tok: Tok<'src>) -> Result<Func> {
        const EXPECTED: &str = "a function expression";
        let func = match tok {
            | Tok::Succ => successor(),
            | Tok::Zero => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let arity = self.int()?;
                self.expect(Tok::ParenClose, "`)`")?;
                zero(arity)
            }
            | Tok::Proj => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let arity = self.int()?;
                self.expect(Tok::Comma, "`,`")?;
                let index = self.int()?;
                self.expect(Tok::ParenClose, "`)`")?;
                projection(arity, index)?
            }
            | Tok::Const => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let n = self.int()?;
                self.expect(Tok::Comma, "`,`")?;
                let arity = self.int()?;
                self.expect(Tok::ParenClose, "`)`")?;
                constant(n, arity)?
            }
            | Tok::Comp => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let outer = self.expr(lib)?;
                let mut inner = Vec::new();
                loop {
                    match self.next("`,` or `)`")? {
                        | (_, Tok::Comma) => inner.push(self.expr(lib)?),
                        | (_, Tok::ParenClose) if !inner.is_empty() => break,
                        | (at, tok) => Err(ParseError::UnexpectedToken {
                            found: tok.to_string(),
                            at,
                            expected: "`,` or `)`",
                        })?,
                    }
                }
                substitution(outer, inner)?
            }
            | Tok::Rec => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let base = self.expr(lib)?;
                self.expect(Tok::Comma, "`,`")?;
                let step = self.expr(lib)?;
                self.expect(Tok::ParenClose, "`)`")?;
                primitive_recursion(base, step)?
            }
            | Tok::Min => {
                self.expect(Tok::ParenOpen, "`(`")?;
                let body = self.expr(lib)?;
                self.expect(Tok::ParenClose, "`)`")?;
                minimisation(body)?
            }
            | Tok::Ident(name) => {
                lib.get(name).cloned().ok_or_else(|| ParseError::UnknownName(name.to_owned()))?
            }
            | tok => Err(ParseError::UnexpectedToken { found: tok.to_string(), at, expected: EXPECTED })?,
        };
        Ok(func)
    }
}
