//! Preset name markup.
//!
//! Preset names use the client's pseudo-HTML, e.g.
//! `  <color=0xffff0000>Hostiles</color>`. Only what the overview needs is
//! recognised: start tags, end tags and text, plus a `color=` directive
//! inside a start tag. Leading spaces in front of the text are the preset's
//! indentation in the client's preset list.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{OverviewError, Result};
use crate::models::{PresetName, RgbColor};

static COLOR_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)color=([^\s/]*)").expect("color directive regex"));

/// Markup token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    /// `<name attrs>` with the brackets stripped
    StartTag(&'a str),
    /// `</name>` with the brackets and slash stripped
    EndTag(&'a str),
    /// Text between tags, entities decoded
    Text(String),
}

/// Splits markup into [`Token`]s.
///
/// A `<` only opens a tag when followed by a letter or `/`; anything else is
/// literal text. A tag without a closing `>` yields a single
/// [`OverviewError::Markup`] and ends the stream.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `input`.
    pub const fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn next_tag(&mut self) -> Result<Token<'a>> {
        let input = self.input;
        let rest = &input[self.pos..];
        let Some(close) = rest.find('>') else {
            let offset = self.pos;
            self.pos = input.len();
            return Err(OverviewError::Markup {
                offset,
                reason: format!("unterminated tag '{rest}'"),
            });
        };
        self.pos += close + 1;

        let body = &rest[1..close];
        Ok(match body.strip_prefix('/') {
            Some(name) => Token::EndTag(name.trim()),
            None => Token::StartTag(body.trim_end_matches('/').trim()),
        })
    }

    fn next_text(&mut self) -> Token<'a> {
        let input = self.input;
        let rest = &input[self.pos..];
        // Skip index 0: we only get here when it is not a tag start
        let end = rest
            .match_indices('<')
            .map(|(idx, _)| idx)
            .find(|&idx| idx > 0 && is_tag_start(&rest[idx..]))
            .unwrap_or(rest.len());
        self.pos += end;
        Token::Text(decode_entities(&rest[..end]))
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }
        if is_tag_start(&self.input[self.pos..]) {
            Some(self.next_tag())
        } else {
            Some(Ok(self.next_text()))
        }
    }
}

fn is_tag_start(rest: &str) -> bool {
    let mut chars = rest.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/')
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

/// Value of the last `color=` directive in a start tag, quotes removed.
fn color_directive(tag: &str) -> Option<&str> {
    COLOR_DIRECTIVE
        .captures_iter(tag)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|value| value.as_str().trim_matches(|c| c == '"' || c == '\''))
}

fn count_leading_spaces(text: &str) -> usize {
    text.chars().take_while(|&c| c == ' ').count()
}

/// Tokenizes a preset display name into a [`PresetName`].
///
/// The last color directive and the last non-blank text run win. The indent
/// is the number of spaces in front of that text, including blank runs
/// directly before it (`"  <b>PvP</b>"` has indent 2).
///
/// # Errors
///
/// - [`OverviewError::InvalidColorTag`] for `color=` without a value
/// - [`OverviewError::InvalidHexFormat`] for an unparsable color
/// - [`OverviewError::Markup`] for an unterminated tag
pub fn parse_preset_name(raw: &str) -> Result<PresetName> {
    let mut name = PresetName {
        raw: raw.to_string(),
        text: String::new(),
        color: None,
        indent: 0,
    };
    let mut pending_indent = 0;

    for token in Tokenizer::new(raw) {
        match token? {
            Token::StartTag(tag) => {
                if let Some(value) = color_directive(tag) {
                    if value.is_empty() {
                        return Err(OverviewError::InvalidColorTag {
                            tag: tag.to_string(),
                        });
                    }
                    name.color = Some(RgbColor::parse_color(value)?);
                }
            }
            Token::EndTag(_) => {}
            Token::Text(text) => {
                let leading = count_leading_spaces(&text);
                if text.trim().is_empty() {
                    pending_indent += leading;
                    continue;
                }
                name.text = text[leading..].to_string();
                name.indent = pending_indent + leading;
                pending_indent = 0;
            }
        }
    }

    Ok(name)
}
