use std::{fmt, iter::FusedIterator};

use logos::Logos;
use tracing::debug;

use crate::error::LexError;

/// A zero-based location in the source text.
///
/// Rows count newlines; columns count characters from the start of the row.
/// `Display` renders the position one-based, the way editors show it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based line number.
    pub row: usize,
    /// Zero-based column, in characters.
    pub col: usize,
}

impl Position {
    /// Creates a position from a zero-based row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.col + 1)
    }
}

/// The kind of a lexical token.
///
/// This is the logos token enum: every variant except [`TokenKind::Eof`] is
/// recognized directly from the source text. Keywords are exact lowercase
/// spellings and win over the identifier pattern.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
// Every Unicode space except `\n`, which the `NewLine` token counts.
#[logos(skip r"[\t\x0B\x0C\r\x1C-\x1F \x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]+")]
pub enum TokenKind {
    /// End of input. Appended once by [`Lexer`], never matched by logos.
    Eof,
    /// Identifier tokens; variable or function names such as `fib`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", no_leading_zeros)]
    Integer,
    /// `// Comments.` The content is discarded, the token is kept.
    #[regex(r"//[^\n]*", allow_greedy = true)]
    Comment,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `return`
    #[token("return")]
    Return,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `%`
    #[token("%")]
    Percent,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `&&`
    #[token("&&")]
    AndAnd,
    /// `||`
    #[token("||")]
    OrOr,
    /// Line breaks. Only advance the row counter.
    #[token("\n", newline)]
    NewLine,
}

impl TokenKind {
    /// Returns `true` for kinds whose token keeps its source slice as text.
    ///
    /// Punctuation and keywords are fully described by their kind and carry
    /// empty text.
    #[must_use]
    pub const fn carries_text(self) -> bool {
        matches!(self, Self::Identifier | Self::Integer)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let spelling = match self {
            Self::Eof => "end of input",
            Self::Identifier => "identifier",
            Self::Integer => "integer literal",
            Self::Comment => "comment",
            Self::NewLine => "line break",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::Fun => "'fun'",
            Self::Return => "'return'",
            Self::Var => "'var'",
            Self::While => "'while'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Percent => "'%'",
            Self::Slash => "'/'",
            Self::Less => "'<'",
            Self::LessEqual => "'<='",
            Self::Greater => "'>'",
            Self::GreaterEqual => "'>='",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::AndAnd => "'&&'",
            Self::OrOr => "'||'",
        };
        f.write_str(spelling)
    }
}

/// Additional information carried by logos during tokenization.
///
/// Tracks the current row and the byte offset where it starts, so columns can
/// be derived from token spans.
#[derive(Default)]
pub struct LexerExtras {
    /// The current zero-based row.
    pub row:        usize,
    /// Byte offset of the first character of the current row.
    pub line_start: usize,
}

/// Rejects integer literals such as `007`.
fn no_leading_zeros(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let slice = lex.slice();
    slice.len() == 1 || !slice.starts_with('0')
}

fn newline(lex: &mut logos::Lexer<TokenKind>) -> logos::Skip {
    lex.extras.row += 1;
    lex.extras.line_start = lex.span().end;
    logos::Skip
}

/// A lexical token: its kind, literal text and source position.
///
/// Equality and hashing consider only `kind` and `text`, so token sequences
/// from differently formatted sources compare equal.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The source slice for identifiers and integers, empty otherwise.
    pub text: String,
    /// Zero-based row of the first character.
    pub row:  usize,
    /// Zero-based column of the first character.
    pub col:  usize,
}

impl Token {
    /// Creates a token at the given position.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position) -> Self {
        Self { kind,
               text: text.into(),
               row: position.row,
               col: position.col }
    }

    /// Creates a position-less token, mostly useful for comparisons.
    ///
    /// # Example
    /// ```
    /// use fimp::interpreter::lexer::{Token, TokenKind};
    ///
    /// let tokens = fimp::tokenize("\n\n  x").unwrap();
    /// assert_eq!(tokens[0], Token::of(TokenKind::Identifier, "x"));
    /// assert_eq!((tokens[0].row, tokens[0].col), (2, 2));
    /// ```
    #[must_use]
    pub fn of(kind: TokenKind, text: impl Into<String>) -> Self {
        Self::new(kind, text, Position::default())
    }

    /// Returns the token's source position.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl std::hash::Hash for Token {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} '{}'", self.kind, self.text)
        }
    }
}

/// A forward-only token stream over a source string.
///
/// Yields every token in order, comments included, followed by exactly one
/// [`TokenKind::Eof`] token. The first lexical error is yielded as `Err` and
/// ends the stream. Creating a new `Lexer` over the same text restarts it.
pub struct Lexer<'src> {
    source:   &'src str,
    inner:    logos::Lexer<'src, TokenKind>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { source,
               inner: TokenKind::lexer_with_extras(source, LexerExtras::default()),
               finished: false }
    }

    /// Converts a byte offset on the current row into a [`Position`].
    fn position_of(&self, offset: usize) -> Position {
        let line_start = self.inner.extras.line_start;
        Position::new(self.inner.extras.row,
                      self.source[line_start..offset].chars().count())
    }

    /// Classifies the slice logos rejected.
    fn error_at(&self, slice: &str, position: Position) -> LexError {
        match slice.chars().next() {
            Some(c) if c.is_ascii_digit() => LexError::LeadingZeros { literal: slice.to_string(),
                                                                      position },
            Some('!') => LexError::IncompleteOperator { expected: "!=",
                                                        position },
            Some('&') => LexError::IncompleteOperator { expected: "&&",
                                                        position },
            Some('|') => LexError::IncompleteOperator { expected: "||",
                                                        position },
            Some(found) => LexError::UnexpectedCharacter { found, position },
            None => LexError::UnexpectedCharacter { found: '\0',
                                                    position },
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let position = self.position_of(self.inner.span().start);
                let text = if kind.carries_text() { self.inner.slice() } else { "" };
                Some(Ok(Token::new(kind, text, position)))
            },
            Some(Err(())) => {
                self.finished = true;
                let position = self.position_of(self.inner.span().start);
                Some(Err(self.error_at(self.inner.slice(), position)))
            },
            None => {
                self.finished = true;
                let position = self.position_of(self.source.len());
                Some(Ok(Token::new(TokenKind::Eof, "", position)))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes a whole source string.
///
/// The returned vector ends with a single [`TokenKind::Eof`] token and still
/// contains comment tokens; the parser filters them out itself.
///
/// # Errors
/// Returns the first [`LexError`] encountered.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    let tokens = Lexer::new(source).collect::<Result<Vec<_>, _>>()?;
    debug!(count = tokens.len(), "tokenized source");
    Ok(tokens)
}
