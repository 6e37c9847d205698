use crate::{
    ast::{BlockStatement, Program, Statement},
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence},
    },
};

impl Parser<'_> {
    /// Parses the whole token stream into a program.
    ///
    /// Parsing is best-effort: a statement that fails to parse is skipped
    /// (its errors are recorded) and parsing resumes at the next token.
    /// Callers must check [`Parser::errors`] before trusting the result.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.curr != Token::Eof {
            if let Some(statement) = self.parse_statement() {
                program.statements.push(statement);
            }
            self.next_token();
        }

        program
    }

    /// Parses one statement, dispatching on the current token: `let`,
    /// `return`, or a bare expression.
    pub(super) fn parse_statement(&mut self) -> Option<Statement> {
        match self.curr {
            Token::Let => self.parse_let_statement(),
            Token::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses `let <ident> = <expr>` with an optional trailing semicolon.
    fn parse_let_statement(&mut self) -> Option<Statement> {
        let name = self.expect_ident()?;

        if !self.expect_peek(&Token::Assign) {
            return None;
        }
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.next_token();
        }

        Some(Statement::Let { name, value })
    }

    /// Parses `return <expr>` with an optional trailing semicolon.
    fn parse_return_statement(&mut self) -> Option<Statement> {
        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.next_token();
        }

        Some(Statement::Return { value })
    }

    /// Parses a bare expression in statement position. The trailing
    /// semicolon is optional so REPL input doesn't need one.
    fn parse_expression_statement(&mut self) -> Option<Statement> {
        let expr = self.parse_expression(Precedence::Lowest)?;

        if self.peek == Token::Semicolon {
            self.next_token();
        }

        Some(Statement::Expression { expr })
    }

    /// Parses statements up to the closing `}` (or end of input). Called
    /// with the current token on the opening `{`.
    pub(super) fn parse_block_statement(&mut self) -> BlockStatement {
        let mut statements = Vec::new();

        self.next_token();
        while self.curr != Token::Rbrace && self.curr != Token::Eof {
            if let Some(statement) = self.parse_statement() {
                statements.push(statement);
            }
            self.next_token();
        }

        BlockStatement { statements }
    }
}
