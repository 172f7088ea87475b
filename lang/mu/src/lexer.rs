use logos::{Logos, SpannedIter};
use std::fmt::{Debug, Display};

#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"#[^\n]*")]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Tok<'input> {
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident(&'input str),
    #[regex(r"[0-9]+")]
    IntLit(&'input str),

    #[token("def")]
    Define,
    #[token("zero")]
    Zero,
    #[token("succ")]
    Succ,
    #[token("proj")]
    Proj,
    #[token("const")]
    Const,
    #[token("comp")]
    Comp,
    #[token("rec")]
    Rec,
    #[token("min")]
    Min,

    #[token("(")]
    ParenOpen,
    #[token(")")]
    ParenClose,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token(";")]
    Semicolon,
}

impl Display for Tok<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            | Tok::Ident(s) => write!(f, "Ident({})", s),
            | Tok::IntLit(s) => write!(f, "IntLit({})", s),
            | Tok::Define => write!(f, "def"),
            | Tok::Zero => write!(f, "zero"),
            | Tok::Succ => write!(f, "succ"),
            | Tok::Proj => write!(f, "proj"),
            | Tok::Const => write!(f, "const"),
            | Tok::Comp => write!(f, "comp"),
            | Tok::Rec => write!(f, "rec"),
            | Tok::Min => write!(f, "min"),
            | Tok::ParenOpen => write!(f, "("),
            | Tok::ParenClose => write!(f, ")"),
            | Tok::Comma => write!(f, ","),
            | Tok::Equals => write!(f, "="),
            | Tok::Semicolon => write!(f, ";"),
        }
    }
}

/// Tokens with their byte span; `Err(offset)` where no token matches.
pub struct Lexer<'source> {
    inner: SpannedIter<'source, Tok<'source>>,
}

impl<'source> Lexer<'source> {
    pub fn new(source: &'source str) -> Self {
        Self { inner: Tok::lexer(source).spanned() }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<(usize, Tok<'source>, usize), usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.inner.next()? {
            | (Ok(tok), range) => Some(Ok((range.start, tok, range.end))),
            | (Err(()), range) => Some(Err(range.start)),
        }
    }
}
