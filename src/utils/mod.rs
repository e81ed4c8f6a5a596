//! # 工具模块
//!
//! 这个模块包含爬虫字段提取阶段常用的工具函数：
//!
//! - 带单位后缀的数字解析（中文数量词、百分号、字节单位）
//! - 多分隔符切分和空白规范化
//! - URL合法化和查询参数拆分
//!
//! # 模块组织
//!
//! - `number` - 数字解析
//! - `string` - 字符串切分、空白规范化
//! - `url` - URL合法化、URL拆分、查询字符串解析

pub mod number;
pub mod string;
pub mod url;

// Re-export commonly used items for convenience
pub use number::parse_number;
pub use string::{normalize_whitespace, split_multi, split_multi_default};
pub use self::url::{decompose_url, legalize_url, lookup_encoding, parse_query_string, QueryParams, Url};
