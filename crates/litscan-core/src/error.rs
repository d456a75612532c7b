//! 错误类型
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LitscanError {
    /// 读取输入流失败
    #[error("read input: {0}")]
    Io(#[from] std::io::Error),

    /// 阈值配置文件无法读取或解析
    #[error("load config {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error("write report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LitscanError>;
