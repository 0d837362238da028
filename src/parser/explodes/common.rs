use std::collections::HashMap;

use lazy_static::lazy_static;
use url::Url;

use crate::error::ParseError;
use crate::models::{ProxyDescriptor, ProxyType};
use crate::utils::url::decode_component;

/// A scheme-specific link decoder
pub type Decoder = fn(&str) -> Result<ProxyDescriptor, ParseError>;

lazy_static! {
    /// Scheme (the part before `://`) to decoder
    static ref DECODERS: HashMap<&'static str, (ProxyType, Decoder)> = {
        let mut decoders: HashMap<&'static str, (ProxyType, Decoder)> = HashMap::new();
        decoders.insert("vmess", (ProxyType::VMess, super::vmess::explode_vmess as Decoder));
        decoders.insert("vless", (ProxyType::Vless, super::vless::explode_vless as Decoder));
        decoders.insert("trojan", (ProxyType::Trojan, super::trojan::explode_trojan as Decoder));
        decoders.insert("ss", (ProxyType::Shadowsocks, super::ss::explode_ss as Decoder));
        decoders.insert("tuic", (ProxyType::Tuic, super::tuic::explode_tuic as Decoder));
        decoders.insert(
            "hysteria2",
            (ProxyType::Hysteria2, super::hysteria2::explode_hysteria2 as Decoder),
        );
        decoders.insert(
            "hy2",
            (ProxyType::Hysteria2, super::hysteria2::explode_hysteria2 as Decoder),
        );
        decoders
    };
}

/// Returns the scheme of a link, i.e. everything before `://`
pub fn link_scheme(link: &str) -> Option<&str> {
    link.split_once("://").map(|(scheme, _)| scheme)
}

/// Find the decoder registered for a link's scheme
pub fn lookup_decoder(link: &str) -> Option<(ProxyType, Decoder)> {
    link_scheme(link).and_then(|scheme| DECODERS.get(scheme).copied())
}

/// Explode a proxy link into a proxy descriptor
///
/// Detects the scheme of the link and calls the matching decoder.
pub fn explode(link: &str) -> Result<ProxyDescriptor, ParseError> {
    let link = link.trim();
    match lookup_decoder(link) {
        Some((_, decoder)) => decoder(link),
        None => Err(ParseError::UnsupportedScheme(
            link_scheme(link).unwrap_or(link).to_string(),
        )),
    }
}

/// A link parsed as a URL, with its query parameters collected
pub(crate) struct UrlLink {
    pub url: Url,
    params: HashMap<String, String>,
}

impl UrlLink {
    pub fn parse(link: &str) -> Result<Self, ParseError> {
        let url = Url::parse(link)?;
        let mut params = HashMap::new();
        for (key, value) in url.query_pairs() {
            // The first occurrence of a repeated key wins
            params
                .entry(key.into_owned())
                .or_insert_with(|| value.into_owned());
        }
        Ok(Self { url, params })
    }

    /// A query parameter, `None` when absent or empty
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn param_owned(&self, key: &str) -> Option<String> {
        self.param(key).map(str::to_string)
    }

    pub fn param_is(&self, key: &str, expected: &str) -> bool {
        self.param(key) == Some(expected)
    }

    pub fn server(&self, proxy_type: ProxyType) -> Result<String, ParseError> {
        self.url
            .host_str()
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .ok_or_else(|| ParseError::missing(proxy_type, "server"))
    }

    pub fn port(&self) -> Option<u32> {
        self.url.port().map(u32::from)
    }

    pub fn username(&self) -> Option<String> {
        decode_component(Some(self.url.username()))
    }

    pub fn password(&self) -> Option<String> {
        decode_component(self.url.password())
    }

    /// The percent-decoded fragment, or the scheme's default name
    pub fn name(&self, proxy_type: ProxyType) -> String {
        decode_component(self.url.fragment())
            .unwrap_or_else(|| proxy_type.default_name().to_string())
    }
}
