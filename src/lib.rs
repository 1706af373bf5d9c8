//! # Byte Diff Expr
//!
//! 按表达式组合多个二进制文件之间逐字节差异的工具库
//!
//! ## 功能
//!
//! - 以固定大小的窗口同步读取多个文件，不足一个窗口的部分补零
//! - 用 `^`（字节不同）、`.`（交集）、`+`（并集）、`-`（差集）和 `{ }` 组合差异
//! - 对每个窗口输出满足表达式的偏移以及各文件在该处的字节值
//! - 可选输出 TOML 格式的比较报告
//!
//! ## 使用示例
//!
//! ```no_run
//! use byte_diff_expr::diff::compare;
//! use byte_diff_expr::expr::Expr;
//! use byte_diff_expr::utils::{file_identifiers, open_inputs};
//!
//! // A 与 B 不同、但 A 与 C 相同的字节
//! let tokens = ["{", "A", "^", "B", "}", "-", "{", "A", "^", "C", "}"];
//! let expr = Expr::parse(&tokens).unwrap();
//! let inputs = open_inputs(file_identifiers(&tokens)).unwrap();
//!
//! let mut out = std::io::stdout();
//! compare(&expr, inputs, 4096, &mut out).unwrap();
//! ```

pub mod cli;
pub mod diff;
pub mod expr;
pub mod utils;

// 重新导出常用类型
pub use diff::{DiffSummary, Report, compare};
pub use expr::{Expr, ExprError, OffsetSet, Operator, TokenKind};
