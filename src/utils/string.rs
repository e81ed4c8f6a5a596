//! 字符串切分与空白规范化

use crate::core::{SpiderParseError, SpiderParseResult, DEFAULT_SPLIT_CHARS};

/// Splits a string on several delimiters, one delimiter at a time
///
/// The text is split on the first delimiter, then every fragment is split
/// again on the second delimiter, and so on, keeping encounter order.
///
/// # Arguments
///
/// * `text` - The string to split
/// * `delimiters` - At least two non-empty delimiters
/// * `remove_empty` - Trim every fragment and drop the ones left empty
///
/// # Errors
///
/// Returns [`SpiderParseError::InvalidArgument`] when fewer than two
/// delimiters are given or one of them is empty.
///
/// # Examples
///
/// ```
/// use spider_parse::split_multi;
///
/// let parts = split_multi("a\tb a,c", &["\t", " ", ","], false).unwrap();
/// assert_eq!(parts, vec!["a", "b", "a", "c"]);
/// ```
pub fn split_multi(
    text: &str,
    delimiters: &[&str],
    remove_empty: bool,
) -> SpiderParseResult<Vec<String>> {
    if delimiters.len() < 2 {
        return Err(SpiderParseError::invalid_argument(format!(
            "split_multi: delimiters {:?} is invalid, the length of it must >= 2",
            delimiters
        )));
    }
    if delimiters.iter().any(|delimiter| delimiter.is_empty()) {
        return Err(SpiderParseError::invalid_argument(format!(
            "split_multi: delimiters {:?} contains an empty delimiter",
            delimiters
        )));
    }

    Ok(collect_fragments(split_each(text, delimiters), remove_empty))
}

/// Splits on spaces, tabs and commas
pub fn split_multi_default(text: &str, remove_empty: bool) -> Vec<String> {
    collect_fragments(split_each(text, &DEFAULT_SPLIT_CHARS), remove_empty)
}

fn split_each<'a>(text: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    let mut fragments: Vec<&str> = vec![text];
    for delimiter in delimiters {
        fragments = fragments
            .into_iter()
            .flat_map(|fragment| fragment.split(*delimiter))
            .collect();
    }
    fragments
}

fn collect_fragments(fragments: Vec<&str>, remove_empty: bool) -> Vec<String> {
    if remove_empty {
        fragments
            .into_iter()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .map(String::from)
            .collect()
    } else {
        fragments.into_iter().map(String::from).collect()
    }
}

/// 将连续空白压缩为单个空格并去掉首尾空白，`None` 视为空字符串
pub fn normalize_whitespace(text: Option<&str>) -> String {
    match text {
        Some(text) if !text.is_empty() => text.split_whitespace().collect::<Vec<&str>>().join(" "),
        _ => String::new(),
    }
}
