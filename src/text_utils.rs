use chrono::NaiveDateTime;
use lazy_static::lazy_static;
use regex::Regex;

pub const MAX_FILE_NAME_LEN: usize = 250;

/// Removes the characters that are reserved in file names on at least one
/// common platform and truncates the result to [`MAX_FILE_NAME_LEN`] characters.
pub fn sanitize_filename(text: &str) -> String {
    lazy_static! {
        static ref RESERVED_REGEX: Regex = Regex::new(r#"[\\/*?:"<>|]"#).unwrap();
    }

    RESERVED_REGEX.replace_all(text, "")
        .chars()
        .take(MAX_FILE_NAME_LEN)
        .collect()
}

/// First character upper-cased, remainder lower-cased.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut res: String = first.to_uppercase().collect();
            res.push_str(&chars.as_str().to_lowercase());
            res
        }
    }
}

pub fn format_timestamp(date_time: &NaiveDateTime) -> String {
    date_time.format("%d/%m/%Y %H:%M:%S").to_string()
}
