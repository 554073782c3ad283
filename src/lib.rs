pub mod config;
pub mod core;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::config::{ToolsConfig, WrapConfig};

pub use crate::core::strings::{
    capitalize_first_letter, find_nth_index_of, get_java_sanitized_name, remove_commas,
    remove_quotes, reverse, trim_all,
};
pub use crate::core::wrap::{
    wrap, wrap_at, wrap_html_safe, wrap_html_safe_at, wrap_with, Wrapper,
    DEFAULT_MAX_CHARS_PER_LINE, HTML_LINE_BREAK,
};
pub use crate::utils::error::{Result, StringToolsError};
