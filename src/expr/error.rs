use thiserror::Error;

/// 表达式解析与求值错误
///
/// `position` 为出错记号在参数序列中的下标（从 0 开始）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    /// 没有任何记号
    #[error("表达式为空")]
    Empty,

    /// 操作数位置出现了运算符、右括号或表达式已结束
    #[error("第 {position} 个记号处应为文件名或 '{{'，实际为 {found}")]
    ExpectedOperand { position: usize, found: String },

    /// 运算符位置不是 `^ . + -` 之一
    #[error("第 {position} 个记号处应为运算符，实际为 {found}")]
    ExpectedOperator { position: usize, found: String },

    /// 括号子表达式之后缺少 `}`
    #[error("第 {position} 个记号处应为 '}}'，实际为 {found}")]
    ExpectedCloseBracket { position: usize, found: String },

    /// 完整表达式之后仍有多余记号
    #[error("第 {position} 个记号处有多余内容 {found}，嵌套运算需要使用 '{{ }}'")]
    TrailingTokens { position: usize, found: String },

    /// 表达式引用了没有对应缓冲区的文件
    #[error("未知的文件: {0}")]
    UnknownIdentifier(String),
}

/// 将可能缺失的记号描述为错误信息中的文本
pub(crate) fn describe(token: Option<&str>) -> String {
    match token {
        Some(token) => format!("'{}'", token),
        None => "表达式结尾".to_string(),
    }
}
