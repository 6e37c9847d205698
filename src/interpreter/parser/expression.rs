use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{Parser, Precedence, token_precedence},
    },
};

impl Parser<'_> {
    /// Dispatches the current token to its prefix handler.
    ///
    /// This is the entry for every new (sub-)expression. A token with no
    /// prefix role records a `no prefix parse function` error.
    pub(super) fn parse_prefix(&mut self) -> Option<Expr> {
        match self.curr.clone() {
            Token::Ident(name) => Some(Expr::Identifier(name)),
            Token::Int(literal) => self.parse_integer_literal(&literal),
            Token::Str(value) => Some(Expr::StringLiteral(value)),
            Token::True => Some(Expr::BooleanLiteral(true)),
            Token::False => Some(Expr::BooleanLiteral(false)),
            Token::Bang => self.parse_prefix_expression(PrefixOperator::Bang),
            Token::Minus => self.parse_prefix_expression(PrefixOperator::Minus),
            Token::Lparen => self.parse_grouped_expression(),
            Token::If => self.parse_if_expression(),
            Token::Function => self.parse_function_literal(),
            Token::Lbracket => self.parse_array_literal(),
            Token::Lbrace => self.parse_hash_literal(),
            token => {
                self.errors.push(ParseError::NoPrefixParseFn { token: token.to_string(),
                                                               line:  self.curr_line, });
                None
            },
        }
    }

    /// Returns the infix operator a token stands for, if any. Call and
    /// subscript have their own handlers and are not listed here.
    pub(super) const fn infix_operator(token: &Token) -> Option<InfixOperator> {
        match token {
            Token::Plus => Some(InfixOperator::Plus),
            Token::Minus => Some(InfixOperator::Minus),
            Token::Asterisk => Some(InfixOperator::Asterisk),
            Token::Slash => Some(InfixOperator::Slash),
            Token::Lt => Some(InfixOperator::Lt),
            Token::Gt => Some(InfixOperator::Gt),
            Token::Eq => Some(InfixOperator::Eq),
            Token::NotEq => Some(InfixOperator::NotEq),
            _ => None,
        }
    }

    /// Parses an integer literal as a signed 64-bit value. Out-of-range
    /// literals record an error.
    fn parse_integer_literal(&mut self, literal: &str) -> Option<Expr> {
        match literal.parse::<i64>() {
            Ok(value) => Some(Expr::IntegerLiteral(value)),
            Err(_) => {
                self.errors.push(ParseError::InvalidInteger { literal: literal.to_string(),
                                                              line:    self.curr_line, });
                None
            },
        }
    }

    /// Parses `!<expr>` or `-<expr>`; the operand binds at prefix strength.
    fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Option<Expr> {
        self.next_token();
        let right = self.parse_expression(Precedence::Prefix)?;
        Some(Expr::Prefix { operator, right: Box::new(right) })
    }

    /// Parses the right operand of an infix operator. Called with the
    /// current token on the operator; left associativity comes from passing
    /// the operator's own precedence down.
    pub(super) fn parse_infix_expression(&mut self,
                                         operator: InfixOperator,
                                         left: Expr)
                                         -> Option<Expr> {
        let precedence = token_precedence(&self.curr);
        self.next_token();
        let right = self.parse_expression(precedence)?;

        Some(Expr::Infix { operator, left: Box::new(left), right: Box::new(right) })
    }

    /// Parses `(<expr>)`; grouping resets the precedence floor.
    fn parse_grouped_expression(&mut self) -> Option<Expr> {
        self.next_token();

        let expr = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }

        Some(expr)
    }

    /// Parses `if (<cond>) { ... }` with an optional `else { ... }`. The
    /// parentheses and both brace pairs are required.
    fn parse_if_expression(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }
        self.next_token();

        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }
        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek == Token::Else {
            self.next_token();
            if !self.expect_peek(&Token::Lbrace) {
                return None;
            }
            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expr::If { condition: Box::new(condition), consequence, alternative })
    }

    /// Parses `fn(<params>) { ... }`; parameters are identifiers only.
    fn parse_function_literal(&mut self) -> Option<Expr> {
        if !self.expect_peek(&Token::Lparen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(&Token::Lbrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expr::FunctionLiteral { parameters, body })
    }

    /// Parses a comma-separated identifier list up to the closing `)`.
    fn parse_function_parameters(&mut self) -> Option<Vec<String>> {
        let mut parameters = Vec::new();

        if self.peek == Token::Rparen {
            self.next_token();
            return Some(parameters);
        }

        parameters.push(self.expect_ident()?);
        while self.peek == Token::Comma {
            self.next_token();
            parameters.push(self.expect_ident()?);
        }

        if !self.expect_peek(&Token::Rparen) {
            return None;
        }

        Some(parameters)
    }

    /// Parses a call's argument list. Called with the current token on the
    /// `(` that triggered the infix dispatch.
    pub(super) fn parse_call_expression(&mut self, function: Expr) -> Option<Expr> {
        let arguments = self.parse_separated_expressions(&Token::Rparen)?;
        Some(Expr::Call { function: Box::new(function), arguments })
    }

    /// Parses `[<elems>]`; the empty array is legal.
    fn parse_array_literal(&mut self) -> Option<Expr> {
        let elements = self.parse_separated_expressions(&Token::Rbracket)?;
        Some(Expr::ArrayLiteral(elements))
    }

    /// Parses a comma-separated expression list until `closing`. Shared by
    /// call arguments and array literals.
    fn parse_separated_expressions(&mut self, closing: &Token) -> Option<Vec<Expr>> {
        let mut exprs = Vec::new();

        if self.peek == *closing {
            self.next_token();
            return Some(exprs);
        }

        self.next_token();
        exprs.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek == Token::Comma {
            self.next_token();
            self.next_token();
            exprs.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(closing) {
            return None;
        }

        Some(exprs)
    }

    /// Parses `{<key>: <value>, ...}`; the empty hash is legal. Pairs keep
    /// their source order; duplicate keys are left for the evaluator.
    fn parse_hash_literal(&mut self) -> Option<Expr> {
        let mut pairs = Vec::new();

        if self.peek == Token::Rbrace {
            self.next_token();
            return Some(Expr::HashLiteral(pairs));
        }

        loop {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(&Token::Colon) {
                return None;
            }
            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if self.peek != Token::Comma {
                break;
            }
            self.next_token();
        }

        if !self.expect_peek(&Token::Rbrace) {
            return None;
        }

        Some(Expr::HashLiteral(pairs))
    }

    /// Parses `<expr>[<index>]`. Called with the current token on the `[`
    /// that triggered the infix dispatch.
    pub(super) fn parse_subscript_expression(&mut self, left: Expr) -> Option<Expr> {
        self.next_token();

        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(&Token::Rbracket) {
            return None;
        }

        Some(Expr::Subscript { left: Box::new(left), index: Box::new(index) })
    }
}
