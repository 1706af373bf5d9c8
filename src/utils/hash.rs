use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// 十六进制小写的 SHA256
pub type HashResult = String;

/// 输入文件的 SHA256，写入报告用于核对被比较的文件
pub fn compute_file_hash(path: &Path) -> Result<HashResult> {
    let file = File::open(path).with_context(|| format!("无法打开文件: {:?}", path))?;
    let mut hasher = Sha256::new();
    io::copy(&mut BufReader::new(file), &mut hasher)
        .with_context(|| format!("读取文件失败: {:?}", path))?;

    Ok(hex::encode(hasher.finalize()))
}
