use std::fmt;
use unicode_general_category::{GeneralCategory, get_general_category};

const ENTITY_PREFIX: &str = "&#x";
const ENTITY_SUFFIX: char = ';';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Encode,
    Decode,
    Demo,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::Encode => "encode",
            Action::Decode => "decode",
            Action::Demo => "demo",
        }
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            Action::Encode => encode(input),
            Action::Decode => decode(input),
            Action::Demo => demo(input),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Hex character reference for a single character, e.g. `&#x41;` for `A`.
pub fn entity(character: char) -> String {
    format!("{ENTITY_PREFIX}{:X}{ENTITY_SUFFIX}", character as u32)
}

pub fn encode(input: &str) -> String {
    let mut output = String::with_capacity(input.len() * 6);
    for character in input.chars() {
        output.push_str(&entity(character));
    }
    output
}

/// Replaces every `&#x<hex digits>;` with the character it names.
///
/// Anything else, including malformed references and references to values
/// that are not valid `char`s, is copied through untouched.
pub fn decode(input: &str) -> String {
    if !input.contains(ENTITY_PREFIX) {
        return input.to_string();
    }

    let mut result = String::with_capacity(input.len());
    let mut remaining = input;

    while let Some(position) = remaining.find(ENTITY_PREFIX) {
        result.push_str(&remaining[..position]);
        remaining = &remaining[position + ENTITY_PREFIX.len()..];

        let digit_count = remaining
            .bytes()
            .take_while(|byte| byte.is_ascii_hexdigit())
            .count();
        let terminated = remaining[digit_count..].starts_with(ENTITY_SUFFIX);

        if digit_count == 0 || !terminated {
            result.push_str(ENTITY_PREFIX);
            continue;
        }

        let digits = &remaining[..digit_count];
        match parse_code_point(digits) {
            Some(character) => result.push(character),
            None => {
                log::debug!("leaving out-of-range reference &#x{digits}; undecoded");
                result.push_str(ENTITY_PREFIX);
                result.push_str(digits);
                result.push(ENTITY_SUFFIX);
            }
        }
        remaining = &remaining[digit_count + 1..];
    }

    result.push_str(remaining);
    result
}

fn parse_code_point(digits: &str) -> Option<char> {
    u32::from_str_radix(digits, 16)
        .ok()
        .and_then(char::from_u32)
}

/// One `<char> = &#xHH;` line per input character.
pub fn demo(input: &str) -> String {
    input.chars().map(demo_line).collect::<Vec<_>>().join("\n")
}

fn demo_line(character: char) -> String {
    let reference = entity(character);
    match character {
        ' ' => format!("[SPACE] = {reference}"),
        '\n' => format!("[NEWLINE] = {reference}"),
        '\t' => format!("[TAB] = {reference}"),
        printable if is_printable(printable) => format!("{printable} = {reference}"),
        other => format!("[{}] = {reference}", quoted_escape(other)),
    }
}

/// Quoted literal for a non-printable character that always carries an escape.
///
/// `Debug` prints a character raw when std's Unicode tables know it as a
/// glyph. The general-category tables can lag behind std, so such characters
/// still land here as Unassigned and fall back to a `\u{..}` escape.
fn quoted_escape(character: char) -> String {
    let debug = format!("{character:?}");
    if debug.contains('\\') {
        debug
    } else {
        format!("'{}'", character.escape_unicode())
    }
}

/// True for characters that render as a visible glyph, plus the ASCII space.
///
/// Controls, format characters, surrogates, private-use and unassigned code
/// points, and every separator other than `' '` are not printable.
/// "Unassigned" follows the Unicode version of `unicode-general-category`,
/// which may be older than the one std uses.
pub fn is_printable(character: char) -> bool {
    if character == ' ' {
        return true;
    }
    !matches!(
        get_general_category(character),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
            | GeneralCategory::SpaceSeparator
    )
}
