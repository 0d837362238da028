//! Proxy model definitions
//!
//! Contains the normalized descriptors produced by the link decoders. Every
//! descriptor serializes directly into a Clash `proxies` entry.

use serde::Serialize;
use std::collections::HashMap;

use crate::utils::{is_empty_option_string, is_none_or_empty_vec};

/// Represents the type of a proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProxyType {
    VMess,
    Vless,
    Trojan,
    Shadowsocks,
    Tuic,
    Hysteria2,
}

impl ProxyType {
    /// The value written to the `type` key of a Clash proxy entry.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Trojan => "trojan",
            ProxyType::Shadowsocks => "ss",
            ProxyType::Tuic => "tuic",
            ProxyType::Hysteria2 => "hysteria2",
        }
    }

    /// Name given to a node whose link carries no remark.
    pub fn default_name(self) -> &'static str {
        match self {
            ProxyType::VMess => VMESS_DEFAULT_NAME,
            ProxyType::Vless => VLESS_DEFAULT_NAME,
            ProxyType::Trojan => TROJAN_DEFAULT_NAME,
            ProxyType::Shadowsocks => SS_DEFAULT_NAME,
            ProxyType::Tuic => TUIC_DEFAULT_NAME,
            ProxyType::Hysteria2 => HYSTERIA2_DEFAULT_NAME,
        }
    }
}

impl std::fmt::Display for ProxyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const VMESS_DEFAULT_NAME: &str = "vmess";
pub const VLESS_DEFAULT_NAME: &str = "vless";
pub const TROJAN_DEFAULT_NAME: &str = "trojan";
pub const SS_DEFAULT_NAME: &str = "ss";
pub const TUIC_DEFAULT_NAME: &str = "tuic";
pub const HYSTERIA2_DEFAULT_NAME: &str = "hysteria2";

pub const DEFAULT_CIPHER: &str = "auto";
pub const DEFAULT_NETWORK: &str = "tcp";
pub const DEFAULT_WS_PATH: &str = "/";
pub const TUIC_DEFAULT_CONGESTION_CONTROLLER: &str = "bbr";
pub const TUIC_DEFAULT_UDP_RELAY_MODE: &str = "native";
pub const TUIC_HEARTBEAT: &str = "10s";

/// Fields shared by every proxy entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommonProxyOptions {
    pub name: String,
    pub server: String,
    /// `None` when the link carried a port that is not a number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
}

impl CommonProxyOptions {
    pub fn new(name: String, server: String, port: Option<u32>) -> Self {
        Self { name, server, port }
    }
}

/// WebSocket transport options
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WsOptions {
    pub path: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
}

impl WsOptions {
    /// Builds ws-opts from the raw `path` and `host` values of a link.
    pub fn from_parts(path: Option<&str>, host: Option<&str>) -> Self {
        let mut headers = HashMap::new();
        if let Some(host) = host.filter(|h| !h.is_empty()) {
            headers.insert("Host".to_string(), host.to_string());
        }
        Self {
            path: path
                .filter(|p| !p.is_empty())
                .unwrap_or(DEFAULT_WS_PATH)
                .to_string(),
            headers,
        }
    }

    pub fn host(&self) -> Option<&str> {
        self.headers.get("Host").map(String::as_str)
    }
}

/// REALITY options for VLESS
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RealityOptions {
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub public_key: Option<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub short_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VmessProxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub uuid: String,
    #[serde(rename = "alterId", skip_serializing_if = "Option::is_none")]
    pub alter_id: Option<u32>,
    pub cipher: String,
    pub tls: bool,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub servername: Option<String>,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOptions>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct VlessProxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub uuid: String,
    pub cipher: String,
    pub tls: bool,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub flow: Option<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub servername: Option<String>,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reality_opts: Option<RealityOptions>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub client_fingerprint: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TrojanProxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub password: String,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub sni: Option<String>,
    pub network: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ws_opts: Option<WsOptions>,
    pub udp: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShadowsocksProxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub cipher: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct TuicProxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub uuid: String,
    pub password: String,
    pub congestion_controller: String,
    pub udp_relay_mode: String,
    pub reduce_rtt: bool,
    pub heartbeat: String,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub sni: Option<String>,
    #[serde(skip_serializing_if = "is_none_or_empty_vec")]
    pub alpn: Option<Vec<String>>,
    pub disable_sni: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Hysteria2Proxy {
    #[serde(flatten)]
    pub common: CommonProxyOptions,
    pub password: String,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub sni: Option<String>,
    pub skip_cert_verify: bool,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub obfs: Option<String>,
    #[serde(skip_serializing_if = "is_empty_option_string")]
    pub obfs_password: Option<String>,
    #[serde(skip_serializing_if = "is_none_or_empty_vec")]
    pub alpn: Option<Vec<String>>,
}

/// A single decoded proxy, tagged by its `type` key on output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ProxyDescriptor {
    #[serde(rename = "vmess")]
    VMess(VmessProxy),
    #[serde(rename = "vless")]
    Vless(VlessProxy),
    #[serde(rename = "trojan")]
    Trojan(TrojanProxy),
    #[serde(rename = "ss")]
    Shadowsocks(ShadowsocksProxy),
    #[serde(rename = "tuic")]
    Tuic(TuicProxy),
    #[serde(rename = "hysteria2")]
    Hysteria2(Hysteria2Proxy),
}

impl ProxyDescriptor {
    pub fn proxy_type(&self) -> ProxyType {
        match self {
            ProxyDescriptor::VMess(_) => ProxyType::VMess,
            ProxyDescriptor::Vless(_) => ProxyType::Vless,
            ProxyDescriptor::Trojan(_) => ProxyType::Trojan,
            ProxyDescriptor::Shadowsocks(_) => ProxyType::Shadowsocks,
            ProxyDescriptor::Tuic(_) => ProxyType::Tuic,
            ProxyDescriptor::Hysteria2(_) => ProxyType::Hysteria2,
        }
    }

    pub fn common(&self) -> &CommonProxyOptions {
        match self {
            ProxyDescriptor::VMess(p) => &p.common,
            ProxyDescriptor::Vless(p) => &p.common,
            ProxyDescriptor::Trojan(p) => &p.common,
            ProxyDescriptor::Shadowsocks(p) => &p.common,
            ProxyDescriptor::Tuic(p) => &p.common,
            ProxyDescriptor::Hysteria2(p) => &p.common,
        }
    }

    pub fn common_mut(&mut self) -> &mut CommonProxyOptions {
        match self {
            ProxyDescriptor::VMess(p) => &mut p.common,
            ProxyDescriptor::Vless(p) => &mut p.common,
            ProxyDescriptor::Trojan(p) => &mut p.common,
            ProxyDescriptor::Shadowsocks(p) => &mut p.common,
            ProxyDescriptor::Tuic(p) => &mut p.common,
            ProxyDescriptor::Hysteria2(p) => &mut p.common,
        }
    }

    pub fn name(&self) -> &str {
        &self.common().name
    }

    pub fn set_name(&mut self, name: String) {
        self.common_mut().name = name;
    }

    pub fn server(&self) -> &str {
        &self.common().server
    }

    pub fn port(&self) -> Option<u32> {
        self.common().port
    }
}
