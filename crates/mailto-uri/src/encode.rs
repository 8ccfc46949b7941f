//! RFC 3986 percent-encoding.
//!
//! The mailto scheme (RFC 6068) requires strict percent-encoding:
//! spaces become `%20`, never the form-encoding `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Every byte except the RFC 3986 unreserved set
/// (`A-Z a-z 0-9 - . _ ~`) gets encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a string per RFC 3986.
///
/// Non-ASCII characters are encoded byte-wise as UTF-8.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_unreserved_characters_pass_through() {
        let input = "AZaz09-._~";
        assert_eq!(percent_encode(input), input);
    }

    #[test]
    fn test_space_encodes_to_percent_20() {
        assert_eq!(percent_encode("Hi there"), "Hi%20there");
    }

    #[test]
    fn test_reserved_characters() {
        assert_eq!(percent_encode("a@example.com"), "a%40example.com");
        assert_eq!(percent_encode("a,b"), "a%2Cb");
        assert_eq!(percent_encode("Hello, world!"), "Hello%2C%20world%21");
        assert_eq!(percent_encode("k=v&k2=v2"), "k%3Dv%26k2%3Dv2");
        assert_eq!(percent_encode("50%"), "50%25");
        assert_eq!(percent_encode("a?b#c/d"), "a%3Fb%23c%2Fd");
    }

    #[test]
    fn test_utf8_is_encoded_byte_wise() {
        assert_eq!(percent_encode("é"), "%C3%A9");
        assert_eq!(percent_encode("tüxt"), "t%C3%BCxt");
    }
}
