/// 记号类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Xor,
    And,
    Or,
    Subtract,
    OpenBracket,
    CloseBracket,
    FileName,
}

const TOKEN_TABLE: &[(&str, TokenKind)] = &[
    ("^", TokenKind::Xor),
    (".", TokenKind::And),
    ("+", TokenKind::Or),
    ("-", TokenKind::Subtract),
    ("{", TokenKind::OpenBracket),
    ("}", TokenKind::CloseBracket),
];

impl TokenKind {
    /// 对单个记号分类，不在符号表中的一律视为文件名
    pub fn classify(token: &str) -> Self {
        TOKEN_TABLE
            .iter()
            .find(|(symbol, _)| *symbol == token)
            .map(|(_, kind)| *kind)
            .unwrap_or(TokenKind::FileName)
    }
}

/// 等价于 [`TokenKind::classify`]
pub fn classify(token: &str) -> TokenKind {
    TokenKind::classify(token)
}
