//! HTTP Basic credential parsing

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Username/password pair extracted from an Authorization header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

/// Parse an `Authorization: Basic <base64(user:pass)>` header value
///
/// Returns None for any other scheme or a malformed payload.
pub fn parse_basic_header(value: &str) -> Option<BasicCredentials> {
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some(BasicCredentials {
        username: username.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(raw: &str) -> String {
        format!("Basic {}", STANDARD.encode(raw))
    }

    #[test]
    fn parses_valid_header() {
        let creds = parse_basic_header(&encode("actuator:actuator")).unwrap();
        assert_eq!(creds.username, "actuator");
        assert_eq!(creds.password, "actuator");
    }

    #[test]
    fn password_may_contain_colons() {
        let creds = parse_basic_header(&encode("user:pa:ss")).unwrap();
        assert_eq!(creds.username, "user");
        assert_eq!(creds.password, "pa:ss");
    }

    #[test]
    fn rejects_other_schemes() {
        assert!(parse_basic_header("Bearer abcdef").is_none());
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_basic_header(&encode("no-colon-here")).is_none());
    }

    #[test]
    fn rejects_invalid_base64() {
        assert!(parse_basic_header("Basic !!!not-base64!!!").is_none());
    }
}
