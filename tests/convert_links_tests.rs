use base64::{engine::general_purpose::STANDARD, Engine};
use sub2clash::models::ProxyDescriptor;
use sub2clash::parser::{parse_links, parse_links_with, CollectingSink};
use sub2clash::{assemble, convert};

fn vmess_link(json: &str) -> String {
    format!("vmess://{}", STANDARD.encode(json))
}

fn ss_link(plain: &str, name: &str) -> String {
    format!("ss://{}#{}", STANDARD.encode(plain), name)
}

#[cfg(test)]
mod convert_links_tests {
    use super::*;

    #[test]
    fn test_vmess_reproduces_server_port_uuid() {
        let cases = [
            ("example.com", "443", "b831381d-6324-4d53-ad4f-8cda48b30811"),
            ("10.0.0.1", "10086", "00000000-0000-0000-0000-000000000000"),
            ("[2001:db8::1]", "8080", "id-with-dashes"),
        ];

        for (add, port, id) in cases {
            let link = vmess_link(&format!(
                r#"{{"add":"{}","port":"{}","id":"{}"}}"#,
                add, port, id
            ));
            let nodes = parse_links(&link);
            assert_eq!(nodes.len(), 1, "link for {} should decode", add);
            assert_eq!(nodes[0].server(), add);
            assert_eq!(nodes[0].port(), Some(port.parse().unwrap()));
            match &nodes[0] {
                ProxyDescriptor::VMess(vmess) => assert_eq!(vmess.uuid, id),
                other => panic!("Expected VMess proxy, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_ss_legacy_reproduces_all_fields() {
        let link = ss_link("chacha20-ietf-poly1305:s3cret@ss.example.com:8388", "Tokyo");
        let nodes = parse_links(&link);

        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            ProxyDescriptor::Shadowsocks(ss) => {
                assert_eq!(ss.cipher, "chacha20-ietf-poly1305");
                assert_eq!(ss.password, "s3cret");
                assert_eq!(ss.common.server, "ss.example.com");
                assert_eq!(ss.common.port, Some(8388));
                assert_eq!(ss.common.name, "Tokyo");
            }
            other => panic!("Expected Shadowsocks proxy, got {:?}", other),
        }
    }

    #[test]
    fn test_ss_without_at_is_dropped() {
        let mut sink = CollectingSink::new();
        let nodes = parse_links_with(&ss_link("aes-256-gcm:password", "x"), &mut sink);
        assert!(nodes.is_empty());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_same_name_gets_suffix() {
        let nodes = parse_links("trojan://a@h1.example.com:443#dup\nhy2://b@h2.example.com:443#dup");
        let names: Vec<&str> = nodes.iter().map(ProxyDescriptor::name).collect();
        assert_eq!(names, vec!["dup", "dup_2"]);
    }

    #[test]
    fn test_blank_and_unsupported_input_is_empty() {
        assert!(parse_links("").is_empty());
        assert!(parse_links("\n\r\n   \r").is_empty());
        assert!(parse_links("http://example.com\nsocks5://1.2.3.4:1080\nssr://abc").is_empty());
    }

    #[test]
    fn test_assemble_empty_groups() {
        let config = assemble(Vec::new());
        assert_eq!(config.proxy_groups[0].name, "Select");
        assert_eq!(config.proxy_groups[0].proxies, vec!["DIRECT", "REJECT"]);
        assert_eq!(config.proxy_groups[1].name, "Auto");
        assert!(config.proxy_groups[1].proxies.is_empty());
        assert_eq!(config.rules, vec!["MATCH,Select"]);
    }

    #[test]
    fn test_group_sizes_follow_proxy_count() {
        let text = [
            vmess_link(r#"{"ps":"v","add":"a.com","port":"443","id":"u"}"#),
            "vless://u@b.com:443#l".to_string(),
            "trojan://p@c.com:443#t".to_string(),
            ss_link("aes-256-gcm:p@d.com:8388", "s"),
            "tuic://u:p@e.com:443#tu".to_string(),
            "hysteria2://p@f.com:443#h".to_string(),
        ]
        .join("\n");

        let nodes = parse_links(&text);
        let n = nodes.len();
        assert_eq!(n, 6);

        let config = assemble(nodes);
        let select = &config.proxy_groups[0].proxies;
        let auto = &config.proxy_groups[1].proxies;
        assert_eq!(select.len(), n + 2);
        assert_eq!(auto.len(), n);
        assert_eq!(&select[..n], &auto[..]);
        assert_eq!(auto, &vec!["v", "l", "t", "s", "tu", "h"]);
    }

    #[test]
    fn test_duplicated_vless_ws_scenario() {
        let text = "vless://uuid@host:443?security=tls&type=ws&path=/x&host=h#myproxy\n\
                    vless://uuid@host:443?security=tls&type=ws&path=/x&host=h#myproxy";
        let nodes = parse_links(text);

        assert_eq!(nodes.len(), 2);
        let expected_names = ["myproxy", "myproxy_2"];
        for (node, expected) in nodes.iter().zip(expected_names) {
            assert_eq!(node.name(), expected);
            match node {
                ProxyDescriptor::Vless(vless) => {
                    assert!(vless.tls);
                    assert_eq!(vless.network, "ws");
                    assert_eq!(vless.ws_opts.as_ref().map(|ws| ws.path.as_str()), Some("/x"));
                }
                other => panic!("Expected VLESS proxy, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_partial_batch_still_converts() {
        let text = format!(
            "vmess://@@@\n{}\nnot a link\ntrojan://pw@ok.example.com:443#ok",
            ss_link("broken", "b")
        );
        let yaml = convert(&text).unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert_eq!(doc["proxies"].as_sequence().map(Vec::len), Some(1));
        assert_eq!(doc["proxies"][0]["name"].as_str(), Some("ok"));
        assert_eq!(doc["proxies"][0]["udp"].as_bool(), Some(true));
        assert_eq!(doc["rules"][0].as_str(), Some("MATCH,Select"));
    }

    #[test]
    fn test_convert_empty_input() {
        let yaml = convert("").unwrap();
        let doc: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();

        assert!(doc["proxies"].as_sequence().unwrap().is_empty());
        assert_eq!(doc["proxy-groups"].as_sequence().map(Vec::len), Some(2));
        assert_eq!(doc["proxy-groups"][0]["proxies"][0].as_str(), Some("DIRECT"));
        assert_eq!(doc["proxy-groups"][0]["proxies"][1].as_str(), Some("REJECT"));
    }
}
