use logos::Logos;

/// Raw lexer output, straight from the generated state machine.
///
/// This enum only describes the shapes logos can match. The public [`Token`]
/// type is produced from it by [`Lexer::next_token`], which resolves string
/// escapes and folds everything unmatchable into [`Token::Illegal`].
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(extras = LexerExtras)]
enum RawToken {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Identifiers: ASCII letters and underscores, such as `x` or `add_two`.
    #[regex(r"[A-Za-z_]+")]
    Ident,
    /// Integer literals, such as `42`. The numeric value is parsed later so
    /// that out-of-range literals become parser errors, not lexer errors.
    #[regex(r"[0-9]+")]
    Int,
    /// A double-quoted string literal, closing quote included. Escape
    /// sequences are still raw here; [`Lexer::next_token`] resolves them.
    #[regex(r#""([^"\\]|\\.)*""#, track_string_lines)]
    Str,
    /// A string literal that reaches the end of input before its closing
    /// quote. Kept as its own shape so the whole tail becomes one
    /// [`Token::Illegal`] instead of a cascade of stray tokens.
    #[regex(r#""([^"\\]|\\.)*"#, track_string_lines)]
    UnterminatedStr,

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
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `!`
    #[token("!")]
    Bang,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    Lparen,
    /// `)`
    #[token(")")]
    Rparen,
    /// `{`
    #[token("{")]
    Lbrace,
    /// `}`
    #[token("}")]
    Rbrace,
    /// `[`
    #[token("[")]
    Lbracket,
    /// `]`
    #[token("]")]
    Rbracket,

    /// Line breaks are skipped like any other whitespace, but advance the
    /// line counter first.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Horizontal whitespace.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Advances the line counter past any line breaks inside a string literal.
///
/// String literals are the one token kind that may span lines; the newline
/// rule above never sees those line breaks.
fn track_string_lines(lex: &mut logos::Lexer<RawToken>) {
    lex.extras.line += lex.slice().bytes().filter(|&b| b == b'\n').count();
}

/// A lexical token together with its literal content where one exists.
///
/// Unlike [`RawToken`] this type is total: every input, valid or not, becomes
/// a stream of these, terminated by an endless run of [`Token::Eof`].
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Input the lexer could not make sense of, carrying the offending text.
    Illegal(String),
    /// End of input.
    Eof,

    /// An identifier, such as `x` or `add_two`.
    Ident(String),
    /// An integer literal, still in its textual form.
    Int(String),
    /// A string literal with all escape sequences resolved.
    Str(String),

    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `!`
    Bang,
    /// `==`
    Eq,
    /// `!=`
    NotEq,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `(`
    Lparen,
    /// `)`
    Rparen,
    /// `{`
    Lbrace,
    /// `}`
    Rbrace,
    /// `[`
    Lbracket,
    /// `]`
    Rbracket,

    /// `fn`
    Function,
    /// `let`
    Let,
    /// `true`
    True,
    /// `false`
    False,
    /// `if`
    If,
    /// `else`
    Else,
    /// `return`
    Return,
}

impl std::fmt::Display for Token {
    /// Writes the token's kind name as it appears in parser error messages:
    /// literal-carrying kinds by their category (`IDENT`, `INT`, `STRING`,
    /// `ILLEGAL`), keywords by their uppercase name, operators and
    /// delimiters by their spelling.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Illegal(_) => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Bang => "!",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::Lparen => "(",
            Self::Rparen => ")",
            Self::Lbrace => "{",
            Self::Rbrace => "}",
            Self::Lbracket => "[",
            Self::Rbracket => "]",
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
        };
        write!(f, "{name}")
    }
}

/// Streams [`Token`]s from a source string on demand.
///
/// The parser pulls one token at a time via [`Lexer::next_token`]; nothing is
/// buffered beyond what logos itself keeps. Once the input is exhausted every
/// further call yields [`Token::Eof`].
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, RawToken>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over `source`. Line numbering starts at 1.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self { inner: RawToken::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }

    /// Returns the next token and the line it ends on.
    ///
    /// Anything the raw lexer rejects, and any string literal with an
    /// unknown escape or a missing closing quote, comes back as a single
    /// [`Token::Illegal`] carrying the raw text.
    pub fn next_token(&mut self) -> (Token, usize) {
        let token = match self.inner.next() {
            None => Token::Eof,
            Some(Err(())) => Token::Illegal(self.inner.slice().to_string()),
            Some(Ok(raw)) => self.cook(raw),
        };
        (token, self.inner.extras.line)
    }

    /// Turns a raw token into its public form, resolving literals.
    fn cook(&self, raw: RawToken) -> Token {
        let slice = self.inner.slice();
        match raw {
            RawToken::Ident => Token::Ident(slice.to_string()),
            RawToken::Int => Token::Int(slice.to_string()),
            RawToken::Str => match unescape(&slice[1..slice.len() - 1]) {
                Some(contents) => Token::Str(contents),
                None => Token::Illegal(slice.to_string()),
            },
            RawToken::UnterminatedStr => Token::Illegal(slice.to_string()),
            RawToken::Function => Token::Function,
            RawToken::Let => Token::Let,
            RawToken::True => Token::True,
            RawToken::False => Token::False,
            RawToken::If => Token::If,
            RawToken::Else => Token::Else,
            RawToken::Return => Token::Return,
            RawToken::Assign => Token::Assign,
            RawToken::Plus => Token::Plus,
            RawToken::Minus => Token::Minus,
            RawToken::Asterisk => Token::Asterisk,
            RawToken::Slash => Token::Slash,
            RawToken::Lt => Token::Lt,
            RawToken::Gt => Token::Gt,
            RawToken::Bang => Token::Bang,
            RawToken::Eq => Token::Eq,
            RawToken::NotEq => Token::NotEq,
            RawToken::Comma => Token::Comma,
            RawToken::Semicolon => Token::Semicolon,
            RawToken::Colon => Token::Colon,
            RawToken::Lparen => Token::Lparen,
            RawToken::Rparen => Token::Rparen,
            RawToken::Lbrace => Token::Lbrace,
            RawToken::Rbrace => Token::Rbrace,
            RawToken::Lbracket => Token::Lbracket,
            RawToken::Rbracket => Token::Rbracket,
            // Skipped by logos; never reaches the cooker.
            RawToken::NewLine | RawToken::Ignored => unreachable!("whitespace is skipped"),
        }
    }
}

/// Resolves the escape sequences of a string literal body.
///
/// The supported escapes are `\'`, `\"`, `\\`, `\a`, `\b`, `\f`, `\n`, `\r`,
/// `\t` and `\v`. Returns `None` on any other escape so the caller can turn
/// the whole literal into an illegal token.
fn unescape(body: &str) -> Option<String> {
    let mut contents = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            contents.push(c);
            continue;
        }
        match chars.next() {
            Some('\'') => contents.push('\''),
            Some('"') => contents.push('"'),
            Some('\\') => contents.push('\\'),
            Some('a') => contents.push('\u{07}'),
            Some('b') => contents.push('\u{08}'),
            Some('f') => contents.push('\u{0C}'),
            Some('n') => contents.push('\n'),
            Some('r') => contents.push('\r'),
            Some('t') => contents.push('\t'),
            Some('v') => contents.push('\u{0B}'),
            _ => return None,
        }
    }
    Some(contents)
}
