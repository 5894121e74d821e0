//! Handle extraction from inbound HTTP requests.
//!
//! The handle being resolved is the hostname of the request URL. Depending on how the client
//! (or a fronting proxy) speaks HTTP, the authority arrives either inside an absolute-form
//! request target or in the `Host` header. Both are accepted, and the host is normalised the
//! way a browser URL parser would: domains go through non-transitional UTS-46 processing and
//! become lowercase punycode, IP literals are kept.
use crate::error::Error;
use axum::http::header::HOST;
use axum::http::uri::Authority;
use axum::http::{HeaderMap, Uri};
use std::net::{Ipv4Addr, Ipv6Addr};

/// Return the normalised hostname for a request with the given target and headers.
///
/// # Errors
///
/// Returns [`Error::MissingHost`] if the target has no authority and there's no `Host` header.
///
/// Returns [`Error::MalformedHost`] if the authority can't be parsed or its host is invalid.
pub fn from_request(uri: &Uri, headers: &HeaderMap) -> Result<String, Error> {
    if let Some(authority) = uri.authority() {
        return normalize(authority.host());
    }

    let value = headers.get(HOST).ok_or(Error::MissingHost)?;
    let authority = Authority::try_from(value.as_bytes())
        .map_err(|_| Error::MalformedHost(String::from_utf8_lossy(value.as_bytes()).into()))?;
    normalize(authority.host())
}

/// Normalise a bare host (no port, no user-info) into its canonical hostname form.
///
/// # Errors
///
/// Returns [`Error::MalformedHost`] if the host is empty, a broken IP literal, or fails IDNA
/// processing.
pub fn normalize(host: &str) -> Result<String, Error> {
    if host.is_empty() {
        return Err(Error::MalformedHost(host.to_string()));
    }

    if let Some(literal) = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
        return literal
            .parse::<Ipv6Addr>()
            .map(|ip| format!("[{ip}]"))
            .map_err(|_| Error::MalformedHost(host.to_string()));
    }

    let ascii =
        idna::domain_to_ascii(host).map_err(|_| Error::MalformedHost(host.to_string()))?;
    if ascii.is_empty() {
        return Err(Error::MalformedHost(host.to_string()));
    }

    // A host whose last label is numeric can only be an IPv4 address.
    if ends_in_number(&ascii) {
        return ascii
            .strip_suffix('.')
            .unwrap_or(&ascii)
            .parse::<Ipv4Addr>()
            .map(|ip| ip.to_string())
            .map_err(|_| Error::MalformedHost(host.to_string()));
    }

    Ok(ascii)
}

fn ends_in_number(host: &str) -> bool {
    let last = host
        .strip_suffix('.')
        .unwrap_or(host)
        .rsplit('.')
        .next()
        .unwrap_or_default();
    match last.strip_prefix("0x").or_else(|| last.strip_prefix("0X")) {
        Some(hex) => hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !last.is_empty() && last.chars().all(|c| c.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn host_headers(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn absolute_uri_wins_over_host_header() {
        let uri: Uri = "https://alice.example/anything".parse().unwrap();
        let headers = host_headers("bob.example");
        assert_eq!(from_request(&uri, &headers).unwrap(), "alice.example");
    }

    #[test]
    fn host_header_port_is_dropped() {
        let uri: Uri = "/".parse().unwrap();
        let headers = host_headers("alice.example:8443");
        assert_eq!(from_request(&uri, &headers).unwrap(), "alice.example");
    }

    #[test]
    fn missing_host() {
        let uri: Uri = "/xrpc/anything".parse().unwrap();
        assert!(matches!(
            from_request(&uri, &HeaderMap::new()),
            Err(Error::MissingHost)
        ));
    }

    #[test]
    fn unparsable_host_header() {
        let uri: Uri = "/".parse().unwrap();
        let headers = host_headers("not a host");
        assert!(matches!(
            from_request(&uri, &headers),
            Err(Error::MalformedHost(_))
        ));
    }

    #[test]
    fn empty_host() {
        assert!(matches!(normalize(""), Err(Error::MalformedHost(_))));
    }

    #[test]
    fn domains_are_lowercased() {
        assert_eq!(normalize("Alice.EXAMPLE").unwrap(), "alice.example");
    }

    #[test]
    fn unicode_domains_become_punycode() {
        assert_eq!(
            normalize("bücher.example").unwrap(),
            "xn--bcher-kva.example"
        );
    }

    #[test]
    fn root_dot_is_kept() {
        assert_eq!(normalize("alice.example.").unwrap(), "alice.example.");
    }

    #[test]
    fn sharp_s_is_not_mapped_to_ss() {
        assert_eq!(normalize("faß.example").unwrap(), "xn--fa-hia.example");
    }

    #[test]
    fn underscores_and_long_labels_are_accepted() {
        assert_eq!(normalize("my_host.example").unwrap(), "my_host.example");
        let long = format!("{}.example", "a".repeat(64));
        assert_eq!(normalize(&long).unwrap(), long);
    }

    #[test]
    fn ip_literals() {
        assert_eq!(normalize("127.0.0.1").unwrap(), "127.0.0.1");
        assert_eq!(normalize("127.0.0.1.").unwrap(), "127.0.0.1");
        assert_eq!(normalize("[0:0:0:0:0:0:0:1]").unwrap(), "[::1]");
        assert!(matches!(normalize("[::zz]"), Err(Error::MalformedHost(_))));
    }

    #[test]
    fn numeric_hosts_must_be_ipv4() {
        for bad in ["999.1.1.1", "1.2.3", "alice.example.42", "alice.0x1f"] {
            assert!(
                matches!(normalize(bad), Err(Error::MalformedHost(_))),
                "{bad}"
            );
        }
        assert_eq!(normalize("alice.example42").unwrap(), "alice.example42");
    }
}
