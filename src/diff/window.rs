use anyhow::{Context, Result};
use log::debug;
use std::collections::BTreeMap;
use std::io::{self, Read};

use crate::expr::BufferMap;

/// 默认窗口大小 (1 MiB)
pub const DEFAULT_WINDOW_SIZE: usize = 1024 * 1024;

/// 窗口大小上限 (1 GiB)，每个输入各占一份
pub const MAX_WINDOW_SIZE: usize = 1024 * 1024 * 1024;

/// 一次循环中所有输入文件的同一段数据
#[derive(Debug)]
pub struct Window<'a> {
    pub index: usize,
    pub size: usize,
    pub buffers: &'a BufferMap,
}

impl Window<'_> {
    /// 窗口首字节在文件中的绝对偏移
    pub fn base_offset(&self) -> u64 {
        self.index as u64 * self.size as u64
    }

    pub fn absolute_offset(&self, offset: usize) -> u64 {
        self.base_offset() + offset as u64
    }
}

/// 按固定窗口同步读取多个输入
///
/// 每个标识对应一个缓冲区，在各个窗口之间复用。
pub struct WindowReader<R> {
    sources: BTreeMap<String, R>,
    buffers: BufferMap,
    window_size: usize,
    next_index: usize,
}

impl<R: Read> WindowReader<R> {
    /// 为每个输入分配窗口缓冲区，内存不足时返回错误
    pub fn new(sources: BTreeMap<String, R>, window_size: usize) -> Result<Self> {
        let mut buffers = BufferMap::new();
        for identifier in sources.keys() {
            buffers.insert(identifier.clone(), alloc_window(window_size)?);
        }

        Ok(Self {
            sources,
            buffers,
            window_size,
            next_index: 0,
        })
    }

    /// 读取下一个窗口
    ///
    /// 任一输入读不到任何字节时返回 `None`，其余输入剩下的数据不再处理。
    pub fn next_window(&mut self) -> Result<Option<Window<'_>>> {
        let index = self.next_index;

        for ((identifier, source), dest) in self.sources.iter_mut().zip(self.buffers.values_mut())
        {
            let bytes_read = fill_window(source, dest)
                .with_context(|| format!("读取文件失败: {}", identifier))?;
            debug!("窗口 {} 从 {} 读取 {} 字节", index, identifier, bytes_read);

            if bytes_read == 0 {
                return Ok(None);
            }
        }

        self.next_index += 1;
        Ok(Some(Window {
            index,
            size: self.window_size,
            buffers: &self.buffers,
        }))
    }
}

fn alloc_window(window_size: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(window_size)
        .with_context(|| format!("无法分配 {} 字节的窗口缓冲区", window_size))?;
    buffer.resize(window_size, 0);
    Ok(buffer)
}

/// 尽量读满 `dest`，不足部分补零，返回实际读取的字节数
pub fn fill_window<R: Read>(reader: &mut R, dest: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;

    while filled < dest.len() {
        match reader.read(&mut dest[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    dest[filled..].fill(0);
    Ok(filled)
}
