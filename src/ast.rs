use std::fmt;

/// A complete parsed program: an ordered sequence of statements.
///
/// This is the root the parser hands to the evaluator. Its `Display`
/// implementation renders the canonical source form; parsing that rendering
/// again yields a program with the same rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited statement list, as used by `if` arms and function
/// bodies. The braces themselves belong to the surrounding construct.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// The statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let x = 5;`.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
    },
    /// A `return` statement: `return x + 1;`.
    Return {
        /// The returned expression.
        value: Expr,
    },
    /// A bare expression in statement position.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers all expression forms of the language, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls, composite literals and subscripts.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A boolean literal: `true` or `false`.
    BooleanLiteral(bool),
    /// A string literal, escapes already resolved.
    StringLiteral(String),
    /// A prefix operator application, such as `!ok` or `-x`.
    Prefix {
        /// The operator.
        operator: PrefixOperator,
        /// The operand.
        right:    Box<Expr>,
    },
    /// An infix operator application, such as `a + b`.
    Infix {
        /// The operator.
        operator: InfixOperator,
        /// Left operand.
        left:     Box<Expr>,
        /// Right operand.
        right:    Box<Expr>,
    },
    /// A conditional expression with an optional `else` arm.
    If {
        /// The condition.
        condition:   Box<Expr>,
        /// Evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Evaluated otherwise, when present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal: `fn(x, y) { x + y }`.
    FunctionLiteral {
        /// Parameter names.
        parameters: Vec<String>,
        /// The function body.
        body:       BlockStatement,
    },
    /// A call: any expression applied to an argument list.
    Call {
        /// The callee expression.
        function:  Box<Expr>,
        /// Arguments in source order.
        arguments: Vec<Expr>,
    },
    /// An array literal: `[1, 2, 3]`.
    ArrayLiteral(Vec<Expr>),
    /// A hash literal: `{"one": 1}`. Pairs keep their source order.
    HashLiteral(Vec<(Expr, Expr)>),
    /// A subscript: `arr[0]` or `h["key"]`.
    Subscript {
        /// The indexed expression.
        left:  Box<Expr>,
        /// The index expression.
        index: Box<Expr>,
    },
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Bang,
    /// Arithmetic negation (`-x`).
    Minus,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Plus,
    /// Subtraction (`-`)
    Minus,
    /// Multiplication (`*`)
    Asterisk,
    /// Division (`/`)
    Slash,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Bang => "!",
            Self::Minus => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    /// Renders the statement in canonical form. Every statement is
    /// semicolon-terminated so that statement boundaries survive a re-parse
    /// of the rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expr } => write!(f, "{expr};"),
        }
    }
}

impl fmt::Display for Expr {
    /// Renders the expression in canonical form. Operator applications are
    /// fully parenthesised, so the rendering encodes the tree shape and
    /// re-parses to it regardless of the original precedence context.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "\"{}\"", escape_string(value)),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix { operator, left, right } => write!(f, "({left} {operator} {right})"),
            Self::If { condition, consequence, alternative } => {
                write!(f, "if ({condition}) {{ {consequence} }}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            },
            Self::Call { function, arguments } => {
                let arguments: Vec<String> = arguments.iter().map(ToString::to_string).collect();
                write!(f, "{function}({})", arguments.join(", "))
            },
            Self::ArrayLiteral(elements) => {
                let elements: Vec<String> = elements.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", elements.join(", "))
            },
            Self::HashLiteral(pairs) => {
                let pairs: Vec<String> =
                    pairs.iter().map(|(key, value)| format!("{key}: {value}")).collect();
                write!(f, "{{{}}}", pairs.join(", "))
            },
            Self::Subscript { left, index } => write!(f, "({left}[{index}])"),
        }
    }
}

/// Re-escapes a string literal body for display, inverting the lexer's
/// escape resolution.
fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{07}' => escaped.push_str("\\a"),
            '\u{08}' => escaped.push_str("\\b"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\u{0B}' => escaped.push_str("\\v"),
            _ => escaped.push(c),
        }
    }
    escaped
}
