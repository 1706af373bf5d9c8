use std::collections::{BTreeMap, BTreeSet};

use super::error::ExprError;
use super::parser::{Expr, Operator};

/// 文件标识到当前窗口缓冲区的映射
pub type BufferMap = BTreeMap<String, Vec<u8>>;

/// 一个子表达式在当前窗口内的求值结果
///
/// `values` 指向供后续 `^` 比较使用的缓冲区。叶子节点指向自身文件的缓冲区，
/// 运算节点总是沿用左操作数的缓冲区，因此对非叶子做 `^` 时比较的是最左侧叶子的原始字节。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetSet<'a> {
    offsets: BTreeSet<usize>,
    values: &'a [u8],
}

impl<'a> OffsetSet<'a> {
    /// 叶子操作数：偏移集合为空
    pub fn leaf(values: &'a [u8]) -> Self {
        Self::new(values, BTreeSet::new())
    }

    pub fn new(values: &'a [u8], offsets: BTreeSet<usize>) -> Self {
        Self { offsets, values }
    }

    pub fn offsets(&self) -> &BTreeSet<usize> {
        &self.offsets
    }

    pub fn values(&self) -> &'a [u8] {
        self.values
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.offsets.contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// 按升序遍历偏移
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.offsets.iter().copied()
    }

    pub fn into_offsets(self) -> BTreeSet<usize> {
        self.offsets
    }
}

/// 对两个操作数应用运算符
///
/// `^` 只比较原始字节，忽略两侧已有的偏移集合；其余运算只看偏移集合。
pub fn apply<'a>(lhs: &OffsetSet<'a>, rhs: &OffsetSet<'a>, op: Operator) -> OffsetSet<'a> {
    let offsets = match op {
        Operator::Xor => lhs
            .values
            .iter()
            .zip(rhs.values)
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect(),
        Operator::And => lhs.offsets.intersection(&rhs.offsets).copied().collect(),
        Operator::Or => lhs.offsets.union(&rhs.offsets).copied().collect(),
        Operator::Subtract => lhs.offsets.difference(&rhs.offsets).copied().collect(),
    };

    OffsetSet::new(lhs.values, offsets)
}

impl Expr {
    /// 在当前窗口的缓冲区上对表达式求值
    pub fn evaluate<'a>(&self, buffers: &'a BufferMap) -> Result<OffsetSet<'a>, ExprError> {
        match self {
            Expr::Leaf(name) => buffers
                .get(name)
                .map(|values| OffsetSet::leaf(values))
                .ok_or_else(|| ExprError::UnknownIdentifier(name.clone())),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.evaluate(buffers)?;
                let rhs = rhs.evaluate(buffers)?;
                Ok(apply(&lhs, &rhs, *op))
            }
        }
    }
}
