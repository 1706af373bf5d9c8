use std::io::{self, Write};

use super::window::Window;
use crate::expr::{BufferMap, OffsetSet};

/// 表头：8 个空格占住偏移列，随后每个文件标识前加一个空格
pub fn write_header<W: Write>(out: &mut W, buffers: &BufferMap) -> io::Result<()> {
    write!(out, "        ")?;
    for identifier in buffers.keys() {
        write!(out, " {}", identifier)?;
    }
    writeln!(out)
}

/// 一行差异：十六进制绝对偏移，随后是各文件在该处的字节值（十进制，按标识的字节长度右对齐）
pub fn write_row<W: Write>(
    out: &mut W,
    absolute_offset: u64,
    offset: usize,
    buffers: &BufferMap,
) -> io::Result<()> {
    write!(out, "{:08x} ", absolute_offset)?;
    for (identifier, values) in buffers {
        let value = values.get(offset).copied().unwrap_or(0);
        write!(out, "{:>width$} ", value, width = identifier.len())?;
    }
    writeln!(out)
}

pub fn write_window<W: Write>(out: &mut W, window: &Window, result: &OffsetSet) -> io::Result<()> {
    write_header(out, window.buffers)?;
    for offset in result.iter() {
        write_row(out, window.absolute_offset(offset), offset, window.buffers)?;
    }
    Ok(())
}
