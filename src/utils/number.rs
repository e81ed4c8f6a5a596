//! 带单位后缀的数字解析

use regex::Regex;
use std::sync::OnceLock;

/// 数量级因子
#[derive(Clone, Copy, Debug, PartialEq)]
enum Factor {
    Multiply(f64),
    Divide(f64),
}

/// 中文数量词与百分号，按固定顺序依次生效
const MAGNITUDE_MARKERS: [(&str, Factor); 7] = [
    ("兆", Factor::Multiply(10_000_000_000_000.0)),
    ("亿", Factor::Multiply(100_000_000.0)),
    ("万", Factor::Multiply(10_000.0)),
    ("千", Factor::Multiply(1_000.0)),
    ("百", Factor::Multiply(100.0)),
    ("十", Factor::Multiply(10.0)),
    ("%", Factor::Divide(100.0)),
];

/// 字节单位字母及其对应的基数幂次
const BYTE_UNITS: [(char, u32); 4] = [('K', 1), ('M', 2), ('G', 3), ('T', 4)];

fn number_regex() -> &'static Regex {
    static NUMBER_REGEX: OnceLock<Regex> = OnceLock::new();
    NUMBER_REGEX.get_or_init(|| {
        Regex::new(r"\d+(?:\.\d+)?").expect("numeric token pattern is valid")
    })
}

fn is_decimal_digit(c: char) -> bool {
    static DIGIT_REGEX: OnceLock<Regex> = OnceLock::new();
    let digit = DIGIT_REGEX.get_or_init(|| Regex::new(r"^\d$").expect("digit pattern is valid"));
    digit.is_match(c.encode_utf8(&mut [0; 4]))
}

/// Value of a Unicode decimal digit such as `５` or `٣`
///
/// Decimal digits come in contiguous runs starting at zero, so the value is
/// the distance to the start of the run, modulo ten.
fn decimal_digit_value(c: char) -> Option<u32> {
    if let Some(value) = c.to_digit(10) {
        return Some(value);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0;
    let mut code = c as u32;
    while let Some(previous) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(previous) {
            break;
        }
        offset += 1;
        code -= 1;
    }
    Some(offset % 10)
}

/// Rewrites a numeric token in ASCII so that `f64` can parse it
fn ascii_token(token: &str) -> Option<String> {
    token
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            c => decimal_digit_value(c).and_then(|value| char::from_digit(value, 10)),
        })
        .collect()
}

/// Extracts a magnitude-adjusted number from free text
///
/// The text is uppercased and trimmed, then the rightmost numeric token is
/// located; whatever follows it is treated as the unit suffix.
///
/// # Arguments
///
/// * `text` - Raw text such as `"3.5万"`, `"50%"` or `"1.2GB"`
/// * `base` - Byte multiplier base; when set, `K`/`M`/`G`/`T` in the suffix
///   multiply by `base`, `base²`, `base³`, `base⁴`
/// * `only_num` - Return the bare numeric token, ignoring the suffix
///
/// # Returns
///
/// The adjusted number, or `0.0` when the text holds no digits.
///
/// # Examples
///
/// ```
/// use spider_parse::parse_number;
///
/// assert_eq!(parse_number("3.5万", None, false), 35000.0);
/// assert_eq!(parse_number("2K", Some(1024.0), false), 2048.0);
/// assert_eq!(parse_number("abc", None, false), 0.0);
/// ```
pub fn parse_number(text: &str, base: Option<f64>, only_num: bool) -> f64 {
    let upper = text.to_uppercase();
    let trimmed = upper.trim();

    let token = match number_regex().find_iter(trimmed).last() {
        Some(token) => token,
        None => {
            tracing::debug!("未找到数字: {:?}", text);
            return 0.0;
        }
    };

    let parsed = ascii_token(token.as_str()).and_then(|token| token.parse::<f64>().ok());
    let mut num = match parsed {
        Some(num) => num,
        None => {
            tracing::debug!("无法解析数字 {:?}", token.as_str());
            return 0.0;
        }
    };
    if only_num {
        return num;
    }

    let suffix = &trimmed[token.end()..];
    for (marker, factor) in MAGNITUDE_MARKERS.iter() {
        if suffix.contains(marker) {
            num = match factor {
                Factor::Multiply(value) => num * value,
                Factor::Divide(value) => num / value,
            };
        }
    }

    if let Some(base) = base.filter(|base| *base != 0.0) {
        for (letter, power) in BYTE_UNITS.iter() {
            if suffix.contains(*letter) {
                // 逐次相乘，与 base * base * ... 的舍入结果保持一致
                num *= (0..*power).fold(1.0, |acc, _| acc * base);
            }
        }
    }

    num
}
