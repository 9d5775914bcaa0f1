//! Common regex patterns for identity extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // CNP (Romanian personal numeric code): sex/century digit 1-8, then 12 digits
    pub static ref CNP_FORMAT: Regex = Regex::new(
        r"^[1-8][0-9]{12}$"
    ).unwrap();

    // Fenced block explicitly tagged as JSON
    pub static ref JSON_FENCE: Regex = Regex::new(
        r"```json\s*\n([\s\S]*?)\n```"
    ).unwrap();

    // Any fenced block without a language tag
    pub static ref GENERIC_FENCE: Regex = Regex::new(
        r"```\s*\n([\s\S]*?)\n```"
    ).unwrap();
}
