//! Stepwise extraction of the main MIME type from a data URI.
//!
//! A data URI is shaped `data:<mediatype>;<params>,<payload>`. Each step
//! below narrows the string by one delimiter and returns `None` only when
//! the segment it needs is genuinely absent. Nothing here inspects or
//! decodes the payload.

const SCHEME: &str = "data:";

/// Everything before the first `,`, or the whole URI when there is no comma.
/// Returns `None` when the URI does not use the `data:` scheme.
pub fn header(uri: &str) -> Option<&str> {
    if !uri.starts_with(SCHEME) {
        return None;
    }
    Some(before(uri, ','))
}

/// The segment between the first and second `:` of the header.
///
/// The text after the second colon, if any, is not part of the result
/// (`data:image:png` yields `image`).
pub fn mime_part(header: &str) -> Option<&str> {
    header.split(':').nth(1)
}

/// The media type with its `;` parameters stripped.
pub fn mime_type(mime_part: &str) -> &str {
    before(mime_part, ';')
}

/// The top-level category token, i.e. everything before the first `/`.
pub fn main_type(mime_type: &str) -> &str {
    before(mime_type, '/')
}

/// Run every step over a full URI and return the main type token.
///
/// The token is returned verbatim: no case folding, no trimming.
pub fn extract_main_type(uri: &str) -> Option<&str> {
    let header = header(uri)?;
    let part = mime_part(header)?;
    Some(main_type(mime_type(part)))
}

fn before(s: &str, delimiter: char) -> &str {
    s.split_once(delimiter).map_or(s, |(head, _)| head)
}
