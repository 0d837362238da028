use super::common::UrlLink;
use crate::error::ParseError;
use crate::models::{
    CommonProxyOptions, ProxyDescriptor, ProxyType, RealityOptions, VlessProxy, WsOptions,
    DEFAULT_CIPHER, DEFAULT_NETWORK,
};

/// Parse a VLESS link into a proxy descriptor
///
/// Format: `vless://uuid@host:port?security=..&type=..&sni=..#name`
pub fn explode_vless(vless: &str) -> Result<ProxyDescriptor, ParseError> {
    let link = UrlLink::parse(vless)?;

    let uuid = link
        .username()
        .ok_or_else(|| ParseError::missing(ProxyType::Vless, "uuid"))?;
    let server = link.server(ProxyType::Vless)?;

    let ws_opts = link
        .param_is("type", "ws")
        .then(|| WsOptions::from_parts(link.param("path"), link.param("host")));

    let reality_opts = link.param_is("security", "reality").then(|| RealityOptions {
        public_key: link.param_owned("pbk"),
        short_id: link.param_owned("sid"),
    });

    Ok(ProxyDescriptor::Vless(VlessProxy {
        common: CommonProxyOptions::new(link.name(ProxyType::Vless), server, link.port()),
        uuid,
        cipher: DEFAULT_CIPHER.to_string(),
        tls: link.param_is("security", "tls"),
        flow: link.param_owned("flow"),
        servername: link.param_owned("sni"),
        network: link
            .param_owned("type")
            .unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
        ws_opts,
        reality_opts,
        client_fingerprint: link.param_owned("fp"),
    }))
}
