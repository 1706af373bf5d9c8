mod render;
mod report;
mod window;

pub use render::{write_header, write_row, write_window};
pub use report::{DiffSummary, InputFile, Report, WindowSummary};
pub use window::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE, Window, WindowReader, fill_window};

use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;
use std::io::{Read, Write};

use crate::expr::{Expr, ExprError};

/// 逐窗口比较所有输入，把每个窗口的结果写入 `out`
///
/// 表达式中的每个标识都必须在 `sources` 中，否则在读取任何数据之前失败。
pub fn compare<R: Read, W: Write>(
    expr: &Expr,
    sources: BTreeMap<String, R>,
    window_size: usize,
    out: &mut W,
) -> Result<DiffSummary> {
    if let Some(missing) = expr
        .identifiers()
        .into_iter()
        .find(|identifier| !sources.contains_key(*identifier))
    {
        return Err(ExprError::UnknownIdentifier(missing.to_string()).into());
    }

    let mut reader = WindowReader::new(sources, window_size)?;
    let mut summary = DiffSummary::new(window_size);

    while let Some(window) = reader.next_window()? {
        let result = expr.evaluate(window.buffers)?;
        debug!("窗口 {}: {} 个偏移", window.index, result.len());

        write_window(out, &window, &result)?;
        summary.record(window.index, window.base_offset(), result.len());
    }

    out.flush()?;
    Ok(summary)
}
