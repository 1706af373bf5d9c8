use clap::Parser;
use std::path::PathBuf;

use crate::diff::{DEFAULT_WINDOW_SIZE, MAX_WINDOW_SIZE};

/// 按表达式组合多个二进制文件之间的逐字节差异
#[derive(Parser)]
#[command(name = "bdx")]
#[command(
    about = "按表达式组合多个二进制文件之间的逐字节差异",
    long_about = "按表达式组合多个二进制文件之间的逐字节差异\n\n\
        运算符: ^ 字节不同, . 交集, + 并集, - 差集, { } 嵌套。\n\
        每个运算恰好两个操作数，没有优先级，例如:\n\n    \
        bdx { A ^ B } - { A ^ C }"
)]
pub struct Cli {
    /// 窗口大小 (字节，须为 2 的幂，不超过 1 GiB)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE, value_parser = parse_window_size)]
    pub window_size: usize,

    /// 将比较摘要写入 TOML 报告
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// 输出更多日志 (-v 信息, -vv 调试)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// 表达式记号，文件名同时作为列标识
    #[arg(
        required = true,
        num_args = 1..,
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    pub expression: Vec<String>,
}

impl Cli {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
}

/// 解析窗口大小
pub fn parse_window_size(value: &str) -> Result<usize, String> {
    let size: usize = value
        .parse()
        .map_err(|_| format!("不是有效的字节数: {}", value))?;
    if !size.is_power_of_two() {
        return Err(format!("窗口大小必须是 2 的幂: {}", size));
    }
    if size > MAX_WINDOW_SIZE {
        return Err(format!(
            "窗口大小不能超过 {} 字节: {}",
            MAX_WINDOW_SIZE, size
        ));
    }
    Ok(size)
}
