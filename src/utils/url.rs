// Helpers de URL para los valores de query

/// Codifica un valor de query (RFC 3986, unreserved se deja igual)
pub fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Separa `/path?query#hash` y devuelve solo el path
pub fn strip_query_and_fragment(url: &str) -> &str {
    let end = url.find(|c| c == '?' || c == '#').unwrap_or(url.len());
    &url[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_value() {
        assert_eq!(encode_query_value("witcher"), "witcher");
        assert_eq!(encode_query_value("RPG,Action"), "RPG%2CAction");
        assert_eq!(encode_query_value("the witcher 3"), "the%20witcher%203");
        assert_eq!(encode_query_value("é"), "%C3%A9");
    }

    #[test]
    fn test_strip_query_and_fragment() {
        assert_eq!(strip_query_and_fragment("/games/42?tab=reviews"), "/games/42");
        assert_eq!(strip_query_and_fragment("/reviews#top"), "/reviews");
        assert_eq!(strip_query_and_fragment("/admin"), "/admin");
    }
}
