//! `spider-parse` 命令行的环境变量
//!
//! 日志级别、颜色输出，以及各子命令缺省使用的字符集、字节单位基数和
//! 空值参数策略都可以通过环境变量设置，命令行参数优先。
//! 库函数本身不读取环境变量，所有取值都由调用方显式传入。

use std::env;
use std::fmt;

/// 环境变量解析错误
#[derive(Debug, Clone)]
pub struct EnvError {
    pub variable: String,
    pub message: String,
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Environment variable '{}': {}", self.variable, self.message)
    }
}

impl std::error::Error for EnvError {}

pub type EnvResult<T> = Result<T, EnvError>;

/// 环境变量访问器特性
pub trait EnvVar<T> {
    const NAME: &'static str;
    const DEFAULT: Option<T>;
    const DESCRIPTION: &'static str;

    fn parse(value: &str) -> EnvResult<T>;

    fn get() -> EnvResult<T> {
        match env::var(Self::NAME) {
            Ok(value) => Self::parse(&value),
            Err(_) => {
                if let Some(default) = Self::DEFAULT {
                    Ok(default)
                } else {
                    Err(EnvError {
                        variable: Self::NAME.to_string(),
                        message: "Required environment variable not set".to_string(),
                    })
                }
            }
        }
    }

    fn get_or_default(default: T) -> T {
        Self::get().unwrap_or(default)
    }
}

/// 日志与终端输出
pub mod core {
    use super::*;

    /// 日志过滤级别，缺省只输出警告；`-v` 会覆盖为 debug
    pub struct LogLevel;
    impl EnvVar<String> for LogLevel {
        const NAME: &'static str = "SPIDER_PARSE_LOG_LEVEL";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok("warn".to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Log level: trace, debug, info, warn, error";

        fn parse(value: &str) -> EnvResult<String> {
            match value.to_lowercase().as_str() {
                "trace" | "debug" | "info" | "warn" | "error" => Ok(value.to_lowercase()),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Invalid log level '{}'. Use: trace, debug, info, warn, error", value),
                }),
            }
        }
    }

    /// 关闭错误信息和日志中的 ANSI 颜色
    pub struct NoColor;
    impl EnvVar<bool> for NoColor {
        const NAME: &'static str = "NO_COLOR";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Disable colored output when set to any value";

        fn parse(value: &str) -> EnvResult<bool> {
            // NO_COLOR 遵循标准：任何值都表示禁用颜色
            Ok(!value.is_empty())
        }
    }
}

/// 子命令 `num`、`legal`、`params` 的缺省参数
pub mod parse {
    use super::*;

    /// `legal` 与 `params` 编解码 URL 时使用的字符集，取 WHATWG 规范名
    pub struct Encoding;
    impl EnvVar<String> for Encoding {
        const NAME: &'static str = "SPIDER_PARSE_ENCODING";
        const DEFAULT: Option<String> = None;

        fn get() -> EnvResult<String> {
            match env::var(Self::NAME) {
                Ok(value) => Self::parse(&value),
                Err(_) => Ok(crate::core::DEFAULT_ENCODING.to_string()),
            }
        }
        const DESCRIPTION: &'static str = "Charset label used to encode and decode URLs (e.g. utf-8, gbk)";

        fn parse(value: &str) -> EnvResult<String> {
            match encoding_rs::Encoding::for_label(value.trim().as_bytes()) {
                Some(encoding) => Ok(encoding.name().to_lowercase()),
                None => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Unknown charset label '{}'", value),
                }),
            }
        }
    }

    /// `num` 中 K/M/G/T 的基数，未设置时字节单位不生效
    pub struct NumberBase;
    impl EnvVar<Option<f64>> for NumberBase {
        const NAME: &'static str = "SPIDER_PARSE_NUMBER_BASE";
        const DEFAULT: Option<Option<f64>> = Some(None);
        const DESCRIPTION: &'static str = "Base for K/M/G/T suffixes when parsing numbers (e.g. 1000, 1024)";

        fn parse(value: &str) -> EnvResult<Option<f64>> {
            match value.trim().parse::<f64>() {
                Ok(base) if base.is_finite() && base > 0.0 => Ok(Some(base)),
                _ => Err(EnvError {
                    variable: Self::NAME.to_string(),
                    message: format!("Base must be a positive number, got '{}'", value),
                }),
            }
        }
    }

    /// `params` 是否保留空值参数
    pub struct KeepBlankValues;
    impl EnvVar<bool> for KeepBlankValues {
        const NAME: &'static str = "SPIDER_PARSE_KEEP_BLANK_VALUES";
        const DEFAULT: Option<bool> = Some(false);
        const DESCRIPTION: &'static str = "Keep query parameters with empty values";

        fn parse(value: &str) -> EnvResult<bool> {
            parse_bool(value, Self::NAME)
        }
    }
}

fn parse_bool(value: &str, var_name: &str) -> EnvResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(EnvError {
            variable: var_name.to_string(),
            message: format!("Invalid boolean value '{}'. Use: true/false, 1/0, yes/no, on/off", value),
        }),
    }
}

/// 从环境变量汇总的配置
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    pub log_level: String,
    pub no_color: bool,
    pub encoding: String,
    pub number_base: Option<f64>,
    pub keep_blank_values: bool,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            no_color: false,
            encoding: crate::core::DEFAULT_ENCODING.to_string(),
            number_base: None,
            keep_blank_values: false,
        }
    }
}

impl EnvConfig {
    /// 从环境变量加载配置，任一变量取值无效即返回错误
    pub fn from_env() -> EnvResult<Self> {
        Ok(Self {
            log_level: core::LogLevel::get()?,
            no_color: core::NoColor::get()?,
            encoding: parse::Encoding::get()?,
            number_base: parse::NumberBase::get()?,
            keep_blank_values: parse::KeepBlankValues::get()?,
        })
    }
}

/// 环境变量文档生成器
pub fn generate_env_docs() -> String {
    let mut docs = String::new();
    docs.push_str("# Environment Variables Documentation\n\n");

    docs.push_str("## Core Configuration\n\n");
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        core::LogLevel::NAME, core::LogLevel::DESCRIPTION, "warn"));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        core::NoColor::NAME, core::NoColor::DESCRIPTION, core::NoColor::DEFAULT));

    docs.push_str("\n## Parsing Configuration\n\n");
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        parse::Encoding::NAME, parse::Encoding::DESCRIPTION, crate::core::DEFAULT_ENCODING));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        parse::NumberBase::NAME, parse::NumberBase::DESCRIPTION, parse::NumberBase::DEFAULT));
    docs.push_str(&format!("- `{}`: {} (default: {:?})\n",
        parse::KeepBlankValues::NAME, parse::KeepBlankValues::DESCRIPTION, parse::KeepBlankValues::DEFAULT));

    docs
}
