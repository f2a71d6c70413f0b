extern crate once_cell;
extern crate regex;

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+code: '(.*)',\n").expect("template regex is valid"));

pub fn search_text(text: &str, regex: &Regex) -> Option<String> {
    regex
        .captures(text)
        .and_then(|v| v.get(1))
        .map(|v| v.as_str().to_owned())
}

/// Pulls the `code: '...'` literal out of a playground page and unescapes it.
pub fn extract_template(body: &str) -> Result<String> {
    search_text(body, &TEMPLATE)
        .map(|v| unescape(&v))
        .ok_or(Error::TemplateExtractionFailed)
}

fn hex_value(chars: &mut std::str::Chars<'_>, len: usize) -> Option<u32> {
    let digits: String = chars.by_ref().take(len).collect();
    if digits.len() == len {
        u32::from_str_radix(&digits, 16).ok()
    } else {
        None
    }
}

/// Decodes backslash escapes of a quoted script literal. Unknown escapes are
/// kept verbatim.
pub fn unescape(text: &str) -> String {
    let mut ret = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            ret.push(c);
            continue;
        }
        let Some(e) = chars.next() else {
            ret.push('\\');
            break;
        };
        match e {
            'n' => ret.push('\n'),
            't' => ret.push('\t'),
            'r' => ret.push('\r'),
            'b' => ret.push('\u{8}'),
            'f' => ret.push('\u{c}'),
            'v' => ret.push('\u{b}'),
            '0' => ret.push('\0'),
            '\\' | '\'' | '"' | '/' => ret.push(e),
            'x' | 'u' => {
                let len = if e == 'x' { 2 } else { 4 };
                let rest = chars.as_str();
                match hex_value(&mut chars, len) {
                    Some(high @ 0xD800..=0xDBFF) => {
                        let tail = chars.as_str();
                        let low = tail
                            .strip_prefix("\\u")
                            .and_then(|t| u32::from_str_radix(t.get(..4)?, 16).ok())
                            .filter(|low| (0xDC00..=0xDFFF).contains(low));
                        match low {
                            Some(low) => {
                                let code = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
                                ret.push(char::from_u32(code).unwrap_or('\u{FFFD}'));
                                chars = tail[6..].chars();
                            }
                            None => ret.push('\u{FFFD}'),
                        }
                    }
                    Some(v) => ret.push(char::from_u32(v).unwrap_or('\u{FFFD}')),
                    None => {
                        ret.push('\\');
                        ret.push(e);
                        chars = rest.chars();
                    }
                }
            }
            other => {
                ret.push('\\');
                ret.push(other);
            }
        }
    }
    ret
}
