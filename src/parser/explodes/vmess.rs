use serde_json::Value;

use crate::error::ParseError;
use crate::models::{
    CommonProxyOptions, ProxyDescriptor, ProxyType, VmessProxy, WsOptions, DEFAULT_CIPHER,
    DEFAULT_NETWORK,
};
use crate::utils::base64::base64_decode_bytes;
use crate::utils::parse_leading_u32;

/// Read a JSON field that share links write either as a string or a number.
/// Empty strings count as absent.
fn json_field(json: &Value, key: &str) -> Option<String> {
    match &json[key] {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a VMess link into a proxy descriptor
///
/// The payload after `vmess://` is base64-encoded JSON in the v2rayN layout
/// (`ps`, `add`, `port`, `id`, `aid`, `scy`, `tls`, `sni`, `net`, `path`, `host`).
pub fn explode_vmess(vmess: &str) -> Result<ProxyDescriptor, ParseError> {
    let encoded = vmess
        .strip_prefix("vmess://")
        .ok_or_else(|| ParseError::UnsupportedScheme(vmess.to_string()))?;

    let decoded = String::from_utf8(base64_decode_bytes(encoded)?)?;
    let json: Value = serde_json::from_str(&decoded)?;

    let server =
        json_field(&json, "add").ok_or_else(|| ParseError::missing(ProxyType::VMess, "add"))?;
    let uuid =
        json_field(&json, "id").ok_or_else(|| ParseError::missing(ProxyType::VMess, "id"))?;

    let port = json_field(&json, "port").and_then(|p| parse_leading_u32(&p));
    let alter_id = match json_field(&json, "aid") {
        Some(aid) => parse_leading_u32(&aid),
        None => Some(0),
    };

    let name = json_field(&json, "ps")
        .unwrap_or_else(|| ProxyType::VMess.default_name().to_string());
    let network = json_field(&json, "net").unwrap_or_else(|| DEFAULT_NETWORK.to_string());

    let ws_opts = (network == "ws").then(|| {
        WsOptions::from_parts(
            json_field(&json, "path").as_deref(),
            json_field(&json, "host").as_deref(),
        )
    });

    Ok(ProxyDescriptor::VMess(VmessProxy {
        common: CommonProxyOptions::new(name, server, port),
        uuid,
        alter_id,
        cipher: json_field(&json, "scy").unwrap_or_else(|| DEFAULT_CIPHER.to_string()),
        tls: json_field(&json, "tls").as_deref() == Some("tls"),
        servername: json_field(&json, "sni"),
        network,
        ws_opts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::base64::base64_encode;

    fn vmess_link(json: &str) -> String {
        format!("vmess://{}", base64_encode(json))
    }

    fn unwrap_vmess(proxy: ProxyDescriptor) -> VmessProxy {
        match proxy {
            ProxyDescriptor::VMess(vmess) => vmess,
            other => panic!("Expected VMess proxy, got {:?}", other),
        }
    }

    #[test]
    fn test_explode_vmess_ws_tls() {
        let link = vmess_link(
            r#"{"v":"2","ps":"HK 01","add":"hk.example.com","port":"443","id":"b831381d-6324-4d53-ad4f-8cda48b30811","aid":"0","scy":"aes-128-gcm","net":"ws","path":"/ray","host":"cdn.example.com","tls":"tls","sni":"hk.example.com"}"#,
        );
        let vmess = unwrap_vmess(explode_vmess(&link).unwrap());

        assert_eq!(vmess.common.name, "HK 01");
        assert_eq!(vmess.common.server, "hk.example.com");
        assert_eq!(vmess.common.port, Some(443));
        assert_eq!(vmess.uuid, "b831381d-6324-4d53-ad4f-8cda48b30811");
        assert_eq!(vmess.alter_id, Some(0));
        assert_eq!(vmess.cipher, "aes-128-gcm");
        assert!(vmess.tls);
        assert_eq!(vmess.servername.as_deref(), Some("hk.example.com"));
        assert_eq!(vmess.network, "ws");
        let ws = vmess.ws_opts.unwrap();
        assert_eq!(ws.path, "/ray");
        assert_eq!(ws.host(), Some("cdn.example.com"));
    }

    #[test]
    fn test_explode_vmess_defaults() {
        let link = vmess_link(r#"{"add":"1.2.3.4","port":10086,"id":"uuid"}"#);
        let vmess = unwrap_vmess(explode_vmess(&link).unwrap());

        assert_eq!(vmess.common.name, "vmess");
        assert_eq!(vmess.common.port, Some(10086));
        assert_eq!(vmess.alter_id, Some(0));
        assert_eq!(vmess.cipher, "auto");
        assert!(!vmess.tls);
        assert_eq!(vmess.servername, None);
        assert_eq!(vmess.network, "tcp");
        assert!(vmess.ws_opts.is_none());
    }

    #[test]
    fn test_explode_vmess_missing_padding() {
        let encoded = base64_encode(r#"{"add":"a.com","port":"80","id":"u1"}"#);
        let link = format!("vmess://{}", encoded.trim_end_matches('='));
        let vmess = unwrap_vmess(explode_vmess(&link).unwrap());
        assert_eq!(vmess.common.server, "a.com");
        assert_eq!(vmess.common.port, Some(80));
    }

    #[test]
    fn test_explode_vmess_non_numeric_port() {
        let link = vmess_link(r#"{"add":"a.com","port":"http","id":"u1","aid":"x"}"#);
        let vmess = unwrap_vmess(explode_vmess(&link).unwrap());
        assert_eq!(vmess.common.port, None);
        assert_eq!(vmess.alter_id, None);
    }

    #[test]
    fn test_explode_vmess_ws_default_path() {
        let link = vmess_link(r#"{"add":"a.com","port":"80","id":"u1","net":"ws"}"#);
        let vmess = unwrap_vmess(explode_vmess(&link).unwrap());
        let ws = vmess.ws_opts.unwrap();
        assert_eq!(ws.path, "/");
        assert!(ws.headers.is_empty());
    }

    #[test]
    fn test_explode_vmess_invalid_payloads() {
        assert!(matches!(
            explode_vmess("vmess://!!!not-base64!!!"),
            Err(ParseError::Base64(_))
        ));
        assert!(matches!(
            explode_vmess(&vmess_link("not json")),
            Err(ParseError::Json(_))
        ));
        assert!(matches!(
            explode_vmess(&vmess_link(r#"{"port":"80","id":"u1"}"#)),
            Err(ParseError::MissingField { field: "add", .. })
        ));
    }

    #[test]
    fn test_explode_vmess_non_object_payload() {
        for payload in ["[1,2]", r#""x""#, "42", "null"] {
            assert!(
                matches!(
                    explode_vmess(&vmess_link(payload)),
                    Err(ParseError::MissingField { field: "add", .. })
                ),
                "payload {} should be rejected",
                payload
            );
        }
    }
}
