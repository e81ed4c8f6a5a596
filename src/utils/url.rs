//! URL合法化与拆分

use encoding_rs::{Encoding, UTF_8};
use percent_encoding::{percent_decode_str, percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

pub use url::Url;

/// 查询参数映射：参数名 -> 按出现顺序排列的全部取值
pub type QueryParams = HashMap<String, Vec<String>>;

/// Everything except unreserved characters and the URL-safe punctuation
/// `% / : = & ? ~ # + ! $ , ; ' @ ( ) * [ ] |` gets percent-encoded
const LEGAL_URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_').remove(b'.').remove(b'-').remove(b'~')
    .remove(b'%').remove(b'/').remove(b':').remove(b'=').remove(b'&').remove(b'?')
    .remove(b'#').remove(b'+').remove(b'!').remove(b'$').remove(b',').remove(b';')
    .remove(b'\'').remove(b'@').remove(b'(').remove(b')').remove(b'*')
    .remove(b'[').remove(b']').remove(b'|');

/// 根据编码标签查找编码，未知或缺省时使用 UTF-8
pub fn lookup_encoding(label: Option<&str>) -> &'static Encoding {
    match label {
        Some(label) => Encoding::for_label(label.trim().as_bytes()).unwrap_or_else(|| {
            tracing::warn!("未知编码 {:?}，改用 UTF-8", label);
            UTF_8
        }),
        None => UTF_8,
    }
}

/// Percent-encodes `text` after converting it to bytes in `encoding`
fn quote(text: &str, encoding: &'static Encoding) -> String {
    let (bytes, _, _) = encoding.encode(text);
    percent_encode(&bytes, LEGAL_URL_ENCODE_SET).to_string()
}

/// Components of a URL reference, borrowed from the original text
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct UrlReference<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> UrlReference<'a> {
    /// Splits `text` into its five components without normalizing any of them
    fn split(text: &'a str) -> Self {
        match reference_regex().captures(text) {
            Some(caps) => UrlReference {
                scheme: caps.name("scheme").map(|m| m.as_str()),
                authority: caps.name("authority").map(|m| m.as_str()),
                path: caps.name("path").map_or("", |m| m.as_str()),
                query: caps.name("query").map(|m| m.as_str()),
                fragment: caps.name("fragment").map(|m| m.as_str()),
            },
            None => UrlReference {
                path: text,
                ..UrlReference::default()
            },
        }
    }

    fn main_part(&self) -> String {
        let mut main_part = String::new();
        if let Some(scheme) = self.scheme {
            main_part.push_str(scheme);
            main_part.push(':');
        }
        if let Some(authority) = self.authority {
            main_part.push_str("//");
            main_part.push_str(authority);
        }
        main_part.push_str(self.path);
        main_part
    }

    fn compose(&self, path: &str, with_fragment: bool) -> String {
        let mut composed = UrlReference { path, ..*self }.main_part();
        if let Some(query) = self.query {
            composed.push('?');
            composed.push_str(query);
        }
        if let Some(fragment) = self.fragment.filter(|_| with_fragment) {
            composed.push('#');
            composed.push_str(fragment);
        }
        composed
    }
}

fn reference_regex() -> &'static Regex {
    static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();
    REFERENCE_REGEX.get_or_init(|| {
        Regex::new(
            r"(?s)^(?:(?P<scheme>[A-Za-z][A-Za-z0-9+.\-]*):)?(?://(?P<authority>[^/?#]*))?(?P<path>[^?#]*)(?:\?(?P<query>[^#]*))?(?:#(?P<fragment>.*))?$",
        )
        .expect("URL reference pattern is valid")
    })
}

/// Resolves `reference` against `base`, returning the target as text
///
/// Both sides keep their original spelling; only dot segments in the
/// merged path are removed.
fn resolve_reference(base: &UrlReference, reference: &UrlReference, with_fragment: bool) -> String {
    let same_scheme = match (reference.scheme, base.scheme) {
        (Some(scheme), Some(base_scheme)) => scheme.eq_ignore_ascii_case(base_scheme),
        _ => false,
    };
    if reference.scheme.is_some() && (!same_scheme || reference.authority.is_some()) {
        return reference.compose(&remove_dot_segments(reference.path), with_fragment);
    }

    let mut target = UrlReference {
        scheme: base.scheme,
        authority: base.authority,
        path: "",
        query: reference.query,
        fragment: reference.fragment,
    };
    let path = if reference.authority.is_some() {
        target.authority = reference.authority;
        remove_dot_segments(reference.path)
    } else if reference.path.is_empty() {
        target.query = reference.query.or(base.query);
        base.path.to_string()
    } else if reference.path.starts_with('/') {
        remove_dot_segments(reference.path)
    } else {
        remove_dot_segments(&merge_paths(base, reference.path))
    };

    target.compose(&path, with_fragment)
}

fn merge_paths(base: &UrlReference, path: &str) -> String {
    if base.authority.is_some() && base.path.is_empty() {
        return format!("/{}", path);
    }
    match base.path.rfind('/') {
        Some(index) => format!("{}{}", &base.path[..=index], path),
        None => path.to_string(),
    }
}

fn remove_dot_segments(path: &str) -> String {
    let (prefix, rest) = match path.strip_prefix('/') {
        Some(rest) => ("/", rest),
        None => ("", path),
    };

    let segments: Vec<&str> = rest.split('/').collect();
    let last = segments.len() - 1;
    let mut output: Vec<&str> = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        match *segment {
            "." => {}
            ".." => {
                output.pop();
            }
            segment => {
                output.push(segment);
                continue;
            }
        }
        // 以 "." 或 ".." 结尾时保留末尾的斜杠
        if index == last {
            output.push("");
        }
    }

    format!("{}{}", prefix, output.join("/"))
}

/// Makes a crawled link absolute and safe to request
///
/// `url` is resolved against `base_url` following the usual relative
/// reference rules, then every character outside the URL-safe set is
/// percent-encoded using the bytes of `encoding` (UTF-8 when `None`).
/// Existing `%XX` escapes are left as they are, and scheme, host, port
/// and query keep their original spelling.
///
/// # Arguments
///
/// * `url` - The link as found on the page, absolute or relative
/// * `base_url` - URL of the page the link was found on
/// * `encoding` - Charset label used to encode non-ASCII characters
/// * `remove_fragment` - Drop the `#fragment` part of the result
///
/// # Examples
///
/// ```
/// use spider_parse::legalize_url;
///
/// let url = legalize_url("player/#!/201566/?p=westbrook", "http://stats.nba.com/", None, true);
/// assert_eq!(url, "http://stats.nba.com/player/");
/// ```
pub fn legalize_url(
    url: &str,
    base_url: &str,
    encoding: Option<&str>,
    remove_fragment: bool,
) -> String {
    let encoding = lookup_encoding(encoding);
    let reference = UrlReference::split(url);
    let base = UrlReference::split(base_url);

    let resolved = match Url::parse(base_url) {
        Ok(parsed) if !parsed.cannot_be_a_base() => {
            resolve_reference(&base, &reference, !remove_fragment)
        }
        _ if reference.scheme.is_some() => {
            resolve_reference(&UrlReference::default(), &reference, !remove_fragment)
        }
        _ => {
            tracing::debug!("无法解析基础URL {:?}，保留原链接 {:?}", base_url, url);
            reference.compose(reference.path, !remove_fragment)
        }
    };

    quote(&resolved, encoding)
}

/// Splits a URL into its main part and its decoded query parameters
///
/// The main part keeps scheme, authority, path and `;params`, and drops
/// both the query and the fragment. Parameter values are grouped by name
/// in the order they appear.
///
/// # Arguments
///
/// * `url` - The URL to split
/// * `keep_blank_values` - Keep parameters whose value is empty as `""`
/// * `encoding` - Charset label used to decode `%XX` escapes
///
/// # Examples
///
/// ```
/// use spider_parse::decompose_url;
///
/// let (main_part, query_part) =
///     decompose_url("http://example.com/p?a=1&a=2&b=", false, "utf-8");
/// assert_eq!(main_part, "http://example.com/p");
/// assert_eq!(query_part["a"], vec!["1", "2"]);
/// assert!(!query_part.contains_key("b"));
/// ```
pub fn decompose_url(url: &str, keep_blank_values: bool, encoding: &str) -> (String, QueryParams) {
    let url: String = url
        .trim_start_matches(|c: char| c <= ' ')
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let parts = UrlReference::split(&url);
    let scheme = parts.scheme.map(str::to_ascii_lowercase);
    let main_part = UrlReference {
        scheme: scheme.as_deref(),
        ..parts
    }
    .main_part();

    (
        main_part,
        parse_query_string(parts.query.unwrap_or(""), keep_blank_values, encoding),
    )
}

/// Parses a query string (without the leading `?`) into a parameter mapping
///
/// `+` decodes to a space and `%XX` escapes are decoded with `encoding`;
/// bytes that are invalid in that encoding become U+FFFD. A pair without
/// `=` counts as a blank value.
pub fn parse_query_string(query: &str, keep_blank_values: bool, encoding: &str) -> QueryParams {
    let encoding = lookup_encoding(Some(encoding));
    let mut params = QueryParams::new();

    for pair in query.split('&').filter(|pair| !pair.is_empty()) {
        let (name, value) = pair.split_once('=').unwrap_or((pair, ""));
        if value.is_empty() && !keep_blank_values {
            continue;
        }
        params
            .entry(unquote_plus(name, encoding))
            .or_default()
            .push(unquote_plus(value, encoding));
    }

    params
}

fn unquote_plus(component: &str, encoding: &'static Encoding) -> String {
    let component = component.replace('+', " ");
    if !component.contains('%') {
        return component;
    }

    let mut decoded = String::with_capacity(component.len());
    let mut rest = component.as_str();
    while let Some(start) = rest.find('%') {
        decoded.push_str(&rest[..start]);
        let run_len = escaped_run_len(&rest[start..]);
        if run_len == 0 {
            decoded.push('%');
            rest = &rest[start + 1..];
            continue;
        }
        // 连续的转义字节作为一个整体解码，多字节字符才能还原
        let bytes: Vec<u8> = percent_decode_str(&rest[start..start + run_len]).collect();
        let (text, _) = encoding.decode_without_bom_handling(&bytes);
        decoded.push_str(&text);
        rest = &rest[start + run_len..];
    }
    decoded.push_str(rest);

    decoded
}

/// Length of the run of well-formed `%XX` escapes at the start of `text`
fn escaped_run_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut len = 0;
    while len + 2 < bytes.len()
        && bytes[len] == b'%'
        && bytes[len + 1].is_ascii_hexdigit()
        && bytes[len + 2].is_ascii_hexdigit()
    {
        len += 3;
    }
    len
}
