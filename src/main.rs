use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufWriter};

use byte_diff_expr::cli::Cli;
use byte_diff_expr::diff::{InputFile, Report, compare};
use byte_diff_expr::expr::Expr;
use byte_diff_expr::utils::{file_identifiers, open_inputs};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .format_timestamp(None)
        .format_target(false)
        .init();

    let expr = Expr::parse(cli.expression.as_slice()).context("表达式解析失败")?;
    info!("表达式: {} ({} 个运算)", expr, expr.operator_count());

    let identifiers = file_identifiers(cli.expression.as_slice());
    let inputs = open_inputs(&identifiers)?;
    info!("已打开 {} 个文件, 窗口大小 {} 字节", inputs.len(), cli.window_size);

    let mut out = BufWriter::new(io::stdout().lock());
    let summary = compare(&expr, inputs, cli.window_size, &mut out)?;
    info!("{}", summary.summary());

    if let Some(report_path) = &cli.report {
        let files = identifiers
            .iter()
            .map(|identifier| InputFile::from_identifier(identifier))
            .collect::<Result<Vec<_>>>()?;
        Report::new(&expr, &summary, files).write_to(report_path)?;
        info!("报告已写入: {}", report_path.display());
    }

    Ok(())
}
