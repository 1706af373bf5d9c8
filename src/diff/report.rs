use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::expr::Expr;
use crate::utils::{HashResult, compute_file_hash, file_size};

/// 一次比较的统计结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub window_size: usize,
    pub windows: usize,
    pub total_offsets: usize,
    /// 只记录至少有一个偏移的窗口
    pub differences: Vec<WindowSummary>,
}

impl DiffSummary {
    pub fn new(window_size: usize) -> Self {
        Self {
            window_size,
            ..Self::default()
        }
    }

    pub fn record(&mut self, index: usize, base_offset: u64, count: usize) {
        self.windows += 1;
        self.total_offsets += count;
        if count > 0 {
            self.differences.push(WindowSummary {
                index,
                base_offset,
                count,
            });
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "窗口: {} 个 ({} 字节/窗口), 命中偏移: {} 个, 有差异的窗口: {} 个",
            self.windows,
            self.window_size,
            self.total_offsets,
            self.differences.len()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSummary {
    pub index: usize,
    pub base_offset: u64,
    pub count: usize,
}

/// 输入文件信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFile {
    pub identifier: String,
    pub size: u64,
    pub sha256: HashResult,
}

impl InputFile {
    /// 标识即路径
    pub fn from_identifier(identifier: &str) -> Result<Self> {
        let path = Path::new(identifier);
        Ok(Self {
            identifier: identifier.to_string(),
            size: file_size(path)?,
            sha256: compute_file_hash(path)?,
        })
    }
}

/// 比较报告
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    pub version: String,
    pub created_at: String,
    pub expression: String,
    pub window_size: usize,
    pub windows: usize,
    pub total_offsets: usize,
    pub files: Vec<InputFile>,
    pub differences: Vec<WindowSummary>,
}

impl Report {
    pub fn new(expr: &Expr, summary: &DiffSummary, files: Vec<InputFile>) -> Self {
        Self {
            version: "1.0".to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            expression: expr.to_string(),
            window_size: summary.window_size,
            windows: summary.windows,
            total_offsets: summary.total_offsets,
            files,
            differences: summary.differences.clone(),
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).with_context(|| format!("无法写入报告: {:?}", path))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("无法读取报告: {:?}", path))?;
        let report: Report =
            toml::from_str(&content).with_context(|| format!("无法解析报告: {:?}", path))?;
        Ok(report)
    }
}
