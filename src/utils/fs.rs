use anyhow::{Context, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::expr::TokenKind;

/// 参数中所有被归类为文件名的记号（去重、有序）
pub fn file_identifiers<S: AsRef<str>>(tokens: &[S]) -> BTreeSet<String> {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .filter(|token| TokenKind::classify(token) == TokenKind::FileName)
        .map(str::to_string)
        .collect()
}

/// 以只读方式打开每个文件，键为原始标识
pub fn open_inputs<I, S>(identifiers: I) -> Result<BTreeMap<String, BufReader<File>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut inputs = BTreeMap::new();

    for identifier in identifiers {
        let identifier = identifier.as_ref();
        let file =
            File::open(identifier).with_context(|| format!("无法打开文件: {:?}", identifier))?;
        inputs.insert(identifier.to_string(), BufReader::new(file));
    }

    Ok(inputs)
}

pub fn file_size(path: &Path) -> Result<u64> {
    let metadata = path
        .metadata()
        .with_context(|| format!("无法读取文件信息: {:?}", path))?;
    Ok(metadata.len())
}
