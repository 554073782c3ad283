pub mod strings;
pub mod wrap;

pub use strings::{
    capitalize_first_letter, find_nth_index_of, get_java_sanitized_name, remove_commas,
    remove_quotes, reverse, trim_all,
};
pub use wrap::{
    wrap, wrap_at, wrap_html_safe, wrap_html_safe_at, wrap_with, Wrapper,
    DEFAULT_MAX_CHARS_PER_LINE, HTML_LINE_BREAK,
};
