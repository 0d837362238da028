use crate::error::ParseError;
use crate::models::{CommonProxyOptions, ProxyDescriptor, ProxyType, ShadowsocksProxy};
use crate::utils::base64::base64_decode_bytes;
use crate::utils::parse_leading_u32;
use crate::utils::url::decode_component;

fn decode_base64_text(input: &str) -> Result<String, ParseError> {
    Ok(String::from_utf8(base64_decode_bytes(input)?)?)
}

/// Split `method:password` into its halves. The password keeps any further colons.
fn split_secret(secret: &str) -> Result<(String, String), ParseError> {
    let (method, password) = secret
        .split_once(':')
        .ok_or_else(|| ParseError::missing(ProxyType::Shadowsocks, "password"))?;
    if method.is_empty() {
        return Err(ParseError::missing(ProxyType::Shadowsocks, "cipher"));
    }
    Ok((method.to_string(), password.to_string()))
}

/// Split `server:port`. A missing or non-numeric port leaves the port unset.
fn split_server(server_port: &str) -> Result<(String, Option<u32>), ParseError> {
    let (server, port) = match server_port.rsplit_once(':') {
        Some((server, port)) => (server, parse_leading_u32(port)),
        None => (server_port, None),
    };
    if server.is_empty() {
        return Err(ParseError::missing(ProxyType::Shadowsocks, "server"));
    }
    Ok((server.to_string(), port))
}

/// Parse a Shadowsocks link into a proxy descriptor
///
/// Two layouts are accepted:
/// * legacy: `ss://base64(method:password@server:port)#name`
/// * SIP002: `ss://base64(method:password)@server:port[/?plugin=..]#name`
pub fn explode_ss(ss: &str) -> Result<ProxyDescriptor, ParseError> {
    let content = ss
        .strip_prefix("ss://")
        .ok_or_else(|| ParseError::UnsupportedScheme(ss.to_string()))?;

    // Extract fragment (remark) if present
    let (content, fragment) = match content.split_once('#') {
        Some((content, fragment)) => (content, Some(fragment)),
        None => (content, None),
    };
    let name = decode_component(fragment)
        .unwrap_or_else(|| ProxyType::Shadowsocks.default_name().to_string());

    let (secret, server_port) = match content.rsplit_once('@') {
        // SIP002: only the user info is encoded
        Some((user_info, host_part)) => {
            let host_part = host_part
                .split(['?', '/'])
                .next()
                .unwrap_or(host_part);
            (decode_base64_text(user_info)?, host_part.to_string())
        }
        None => {
            let decoded = decode_base64_text(content)?;
            if decoded.matches('@').count() != 1 {
                return Err(ParseError::MissingSeparator('@'));
            }
            match decoded.split_once('@') {
                Some((secret, server_port)) => (secret.to_string(), server_port.to_string()),
                None => return Err(ParseError::MissingSeparator('@')),
            }
        }
    };

    let (cipher, password) = split_secret(&secret)?;
    let (server, port) = split_server(&server_port)?;

    Ok(ProxyDescriptor::Shadowsocks(ShadowsocksProxy {
        common: CommonProxyOptions::new(name, server, port),
        cipher,
        password,
    }))
}
