mod error;
mod eval;
mod parser;
mod token;

pub use error::ExprError;
pub use eval::{BufferMap, OffsetSet, apply};
pub use parser::{Expr, Operator};
pub use token::{TokenKind, classify};
