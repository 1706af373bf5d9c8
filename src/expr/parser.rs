use std::collections::BTreeSet;
use std::fmt;

use super::error::{ExprError, describe};
use super::token::TokenKind;

/// 二元运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `^`：两个缓冲区字节不相等的偏移
    Xor,
    /// `.`：交集
    And,
    /// `+`：并集
    Or,
    /// `-`：差集
    Subtract,
}

impl Operator {
    pub fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Xor => Some(Operator::Xor),
            TokenKind::And => Some(Operator::And),
            TokenKind::Or => Some(Operator::Or),
            TokenKind::Subtract => Some(Operator::Subtract),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Xor => "^",
            Operator::And => ".",
            Operator::Or => "+",
            Operator::Subtract => "-",
        }
    }
}

/// 解析后的表达式树
///
/// 语法没有优先级，每个二元运算恰好两个操作数，嵌套必须加括号：
///
/// ```text
/// expr     := operand operator operand
/// operand  := '{' expr '}' | FILE_NAME
/// operator := '^' | '.' | '+' | '-'
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Leaf(String),
    Binary {
        op: Operator,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// 从记号序列解析完整表达式，多余的记号视为错误
    ///
    /// ```
    /// use byte_diff_expr::expr::{Expr, Operator};
    ///
    /// let expr = Expr::parse(&["{", "A", "^", "B", "}", "-", "{", "A", "^", "C", "}"]).unwrap();
    /// assert!(matches!(expr, Expr::Binary { op: Operator::Subtract, .. }));
    /// ```
    pub fn parse<S: AsRef<str>>(tokens: &[S]) -> Result<Self, ExprError> {
        if tokens.is_empty() {
            return Err(ExprError::Empty);
        }

        let mut parser = Parser::new(tokens);
        let expr = parser.parse_expr()?;

        if let Some(extra) = parser.peek() {
            return Err(ExprError::TrailingTokens {
                position: parser.cursor,
                found: describe(Some(extra)),
            });
        }

        Ok(expr)
    }

    /// 表达式中出现的所有文件标识
    pub fn identifiers(&self) -> BTreeSet<&str> {
        let mut identifiers = BTreeSet::new();
        self.collect_identifiers(&mut identifiers);
        identifiers
    }

    fn collect_identifiers<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        match self {
            Expr::Leaf(name) => {
                out.insert(name.as_str());
            }
            Expr::Binary { lhs, rhs, .. } => {
                lhs.collect_identifiers(out);
                rhs.collect_identifiers(out);
            }
        }
    }

    /// 运算符节点数
    pub fn operator_count(&self) -> usize {
        match self {
            Expr::Leaf(_) => 0,
            Expr::Binary { lhs, rhs, .. } => 1 + lhs.operator_count() + rhs.operator_count(),
        }
    }

    /// 还原为可重新解析的记号序列
    pub fn to_tokens(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.push_tokens(&mut tokens, false);
        tokens
    }

    fn push_tokens(&self, tokens: &mut Vec<String>, bracketed: bool) {
        match self {
            Expr::Leaf(name) => tokens.push(name.clone()),
            Expr::Binary { op, lhs, rhs } => {
                if bracketed {
                    tokens.push("{".to_string());
                }
                lhs.push_tokens(tokens, true);
                tokens.push(op.symbol().to_string());
                rhs.push_tokens(tokens, true);
                if bracketed {
                    tokens.push("}".to_string());
                }
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_tokens().join(" "))
    }
}

struct Parser<'t, S> {
    tokens: &'t [S],
    cursor: usize,
}

impl<'t, S: AsRef<str>> Parser<'t, S> {
    fn new(tokens: &'t [S]) -> Self {
        Self { tokens, cursor: 0 }
    }

    fn peek(&self) -> Option<&'t str> {
        self.tokens.get(self.cursor).map(|token| token.as_ref())
    }

    fn next_token(&mut self) -> Option<&'t str> {
        let token = self.peek();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    fn parse_expr(&mut self) -> Result<Expr, ExprError> {
        let lhs = self.parse_operand()?;
        let op = self.parse_operator()?;
        let rhs = self.parse_operand()?;

        Ok(Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        })
    }

    fn parse_operand(&mut self) -> Result<Expr, ExprError> {
        let position = self.cursor;
        let token = self.next_token();

        match token.map(|t| (t, TokenKind::classify(t))) {
            Some((_, TokenKind::OpenBracket)) => {
                let inner = self.parse_expr()?;
                self.expect_close_bracket()?;
                Ok(inner)
            }
            Some((name, TokenKind::FileName)) => Ok(Expr::Leaf(name.to_string())),
            _ => Err(ExprError::ExpectedOperand {
                position,
                found: describe(token),
            }),
        }
    }

    fn parse_operator(&mut self) -> Result<Operator, ExprError> {
        let position = self.cursor;
        let token = self.next_token();

        token
            .map(TokenKind::classify)
            .and_then(Operator::from_kind)
            .ok_or_else(|| ExprError::ExpectedOperator {
                position,
                found: describe(token),
            })
    }

    fn expect_close_bracket(&mut self) -> Result<(), ExprError> {
        let position = self.cursor;
        let token = self.next_token();

        match token.map(TokenKind::classify) {
            Some(TokenKind::CloseBracket) => Ok(()),
            _ => Err(ExprError::ExpectedCloseBracket {
                position,
                found: describe(token),
            }),
        }
    }
}
