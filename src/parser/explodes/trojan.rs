use super::common::UrlLink;
use crate::error::ParseError;
use crate::models::{
    CommonProxyOptions, ProxyDescriptor, ProxyType, TrojanProxy, WsOptions, DEFAULT_NETWORK,
};

/// Parse a Trojan link into a proxy descriptor
///
/// Format: `trojan://password@host:port?sni=..&type=ws&path=..&host=..#name`
pub fn explode_trojan(trojan: &str) -> Result<ProxyDescriptor, ParseError> {
    let link = UrlLink::parse(trojan)?;

    let password = link
        .username()
        .ok_or_else(|| ParseError::missing(ProxyType::Trojan, "password"))?;
    let server = link.server(ProxyType::Trojan)?;

    let ws_opts = link
        .param_is("type", "ws")
        .then(|| WsOptions::from_parts(link.param("path"), link.param("host")));

    Ok(ProxyDescriptor::Trojan(TrojanProxy {
        common: CommonProxyOptions::new(link.name(ProxyType::Trojan), server, link.port()),
        password,
        sni: link.param_owned("sni"),
        network: link
            .param_owned("type")
            .unwrap_or_else(|| DEFAULT_NETWORK.to_string()),
        ws_opts,
        udp: true,
    }))
}
