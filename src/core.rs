//! 公共错误类型与默认常量

use thiserror::Error;

/// 未指定编码时使用的默认文本编码
pub const DEFAULT_ENCODING: &str = "utf-8";

/// 常用的分隔符集合：空格、制表符、逗号
pub const DEFAULT_SPLIT_CHARS: [&str; 3] = [" ", "\t", ","];

/// 合法化URL时保持原样、不再转义的字符
pub const URL_SAFE_CHARS: &str = "%/:=&?~#+!$,;'@()*[]|";

/// Errors returned by the parsing helpers
///
/// Only caller contract violations are reported as errors; malformed
/// input text degrades to a default value instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpiderParseError {
    /// 参数不满足调用约定
    #[error("参数无效: {0}")]
    InvalidArgument(String),
}

impl SpiderParseError {
    /// 创建参数无效错误
    pub fn invalid_argument<T: Into<String>>(msg: T) -> Self {
        SpiderParseError::InvalidArgument(msg.into())
    }
}

pub type SpiderParseResult<T> = Result<T, SpiderParseError>;
