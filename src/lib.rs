//! # Spider Parse Library
//!
//! 爬虫字段提取用的文本与URL工具库。所有函数都是无状态的纯函数，可在任意线程中并发调用。
//!
//! ## 模块组织
//!
//! - `core` - 错误类型和默认常量
//! - `env` - 环境变量配置（供命令行工具使用）
//! - `utils` - 数字解析、字符串处理、URL处理

pub mod core;
pub mod env;
pub mod utils;

// Re-export commonly used items for convenience
pub use self::core::*;
pub use utils::*;
