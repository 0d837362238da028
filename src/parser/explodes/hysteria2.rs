use super::common::UrlLink;
use crate::error::ParseError;
use crate::models::{CommonProxyOptions, Hysteria2Proxy, ProxyDescriptor, ProxyType};
use crate::utils::split_list;

/// Parse a Hysteria2 link into a proxy descriptor
///
/// Handles both the `hysteria2://` and the short `hy2://` scheme. The auth
/// secret is normally the URL username; `hy2://:secret@host` puts it in the
/// password slot instead.
pub fn explode_hysteria2(hysteria2: &str) -> Result<ProxyDescriptor, ParseError> {
    let link = UrlLink::parse(hysteria2)?;

    let password = link
        .username()
        .or_else(|| link.password())
        .ok_or_else(|| ParseError::missing(ProxyType::Hysteria2, "password"))?;
    let server = link.server(ProxyType::Hysteria2)?;

    Ok(ProxyDescriptor::Hysteria2(Hysteria2Proxy {
        common: CommonProxyOptions::new(link.name(ProxyType::Hysteria2), server, link.port()),
        password,
        sni: link.param_owned("sni"),
        skip_cert_verify: link.param_is("insecure", "1"),
        obfs: link.param_owned("obfs"),
        obfs_password: link.param_owned("obfs-password"),
        alpn: split_list(link.param("alpn")),
    }))
}
