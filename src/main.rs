use std::collections::BTreeMap;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spider_parse::env::{generate_env_docs, EnvConfig};
use spider_parse::{
    decompose_url, legalize_url, normalize_whitespace, parse_number, split_multi,
    DEFAULT_SPLIT_CHARS,
};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

#[derive(Parser, Debug)]
#[command(
    name = "spider-parse",
    version,
    about = "Text and URL parsing helpers for web crawlers"
)]
struct Cli {
    /// Print debug logs to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract a number with its magnitude suffix applied
    Num {
        text: String,
        /// Base for K/M/G/T suffixes [env: SPIDER_PARSE_NUMBER_BASE]
        #[arg(short, long)]
        base: Option<f64>,
        /// Ignore the suffix entirely
        #[arg(short = 'n', long)]
        only_num: bool,
    },
    /// Split text on several delimiters, one after another
    Split {
        text: String,
        /// Delimiter, repeat for more (\t and \n are unescaped) [default: space, tab, comma]
        #[arg(short = 'd', long = "delimiter")]
        delimiters: Vec<String>,
        /// Trim fragments and drop empty ones
        #[arg(short, long)]
        remove_empty: bool,
    },
    /// Collapse whitespace runs into single spaces
    Strip { text: Option<String> },
    /// Resolve a link against a base URL and percent-encode it
    Legal {
        url: String,
        base_url: String,
        /// Charset for non-ASCII characters [env: SPIDER_PARSE_ENCODING]
        #[arg(short, long)]
        encoding: Option<String>,
        /// Keep the #fragment part
        #[arg(short, long)]
        keep_fragment: bool,
    },
    /// Split a URL into its main part and query parameters (JSON)
    Params {
        url: String,
        /// Keep parameters with empty values [env: SPIDER_PARSE_KEEP_BLANK_VALUES]
        #[arg(short, long)]
        keep_blank_values: bool,
        /// Charset for decoding escapes [env: SPIDER_PARSE_ENCODING]
        #[arg(short, long)]
        encoding: Option<String>,
    },
    /// List the environment variables that set defaults
    EnvDocs,
}

fn init_logging(verbose: bool, config: &EnvConfig) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_ansi(!config.no_color)
        .with_writer(std::io::stderr)
        .init();
}

fn unescape_delimiter(delimiter: &str) -> String {
    delimiter.replace("\\t", "\t").replace("\\n", "\n")
}

fn print_error_message(text: &str, no_color: bool) {
    if no_color {
        eprintln!("{}", text);
    } else {
        eprintln!("{}{}{}", ANSI_COLOR_RED, text, ANSI_COLOR_RESET);
    }
}

fn main() {
    let cli = Cli::parse();
    let (config, env_error) = match EnvConfig::from_env() {
        Ok(config) => (config, None),
        Err(e) => (EnvConfig::default(), Some(e)),
    };
    init_logging(cli.verbose, &config);
    if let Some(e) = env_error {
        tracing::warn!("{}，改用缺省配置", e);
    }
    let no_color = config.no_color;

    match cli.command {
        Command::Num {
            text,
            base,
            only_num,
        } => {
            let base = base.or(config.number_base);
            println!("{}", parse_number(&text, base, only_num));
        }
        Command::Split {
            text,
            delimiters,
            remove_empty,
        } => {
            let delimiters: Vec<String> = if delimiters.is_empty() {
                DEFAULT_SPLIT_CHARS.iter().map(|d| d.to_string()).collect()
            } else {
                delimiters.iter().map(|d| unescape_delimiter(d)).collect()
            };
            let delimiters: Vec<&str> = delimiters.iter().map(String::as_str).collect();

            match split_multi(&text, &delimiters, remove_empty) {
                Ok(fragments) => println!("{}", serde_json::json!(fragments)),
                Err(e) => {
                    print_error_message(&format!("Error: {}", e), no_color);
                    process::exit(1);
                }
            }
        }
        Command::Strip { text } => {
            println!("{}", normalize_whitespace(text.as_deref()));
        }
        Command::Legal {
            url,
            base_url,
            encoding,
            keep_fragment,
        } => {
            let encoding = encoding.unwrap_or(config.encoding);
            println!(
                "{}",
                legalize_url(&url, &base_url, Some(&encoding), !keep_fragment)
            );
        }
        Command::Params {
            url,
            keep_blank_values,
            encoding,
        } => {
            let keep_blank_values = keep_blank_values || config.keep_blank_values;
            let encoding = encoding.unwrap_or(config.encoding);
            let (main_part, query_part) = decompose_url(&url, keep_blank_values, &encoding);

            // 排序后输出，保证结果稳定
            let query_part: BTreeMap<String, Vec<String>> = query_part.into_iter().collect();
            println!(
                "{}",
                serde_json::json!({
                    "main_part": main_part,
                    "query_part": query_part,
                })
            );
        }
        Command::EnvDocs => {
            print!("{}", generate_env_docs());
        }
    }
}
