use log::{debug, info};

use crate::models::ProxyDescriptor;
use crate::parser::diagnostics::{DiagnosticSink, LogSink};
use crate::parser::explodes::{link_scheme, lookup_decoder};
use crate::parser::node_manip::NameDeduplicator;
use crate::utils::non_empty_lines;

/// Parse a block of share links into uniquely named proxies
///
/// Lines are split on any run of CR/LF and trimmed; blank lines and links
/// with an unknown scheme are skipped. Decode failures are logged and dropped.
pub fn parse_links(text: &str) -> Vec<ProxyDescriptor> {
    parse_links_with(text, &mut LogSink)
}

/// Same as [`parse_links`], reporting decode failures to `sink`
pub fn parse_links_with(text: &str, sink: &mut dyn DiagnosticSink) -> Vec<ProxyDescriptor> {
    let mut nodes = Vec::new();
    let mut dedup = NameDeduplicator::new();
    let mut failed = 0usize;
    let mut skipped = 0usize;

    for line in non_empty_lines(text) {
        let Some((proxy_type, decoder)) = lookup_decoder(line) else {
            debug!(
                "Skipping line with unsupported scheme: {}",
                link_scheme(line).unwrap_or("<none>")
            );
            skipped += 1;
            continue;
        };

        match decoder(line) {
            Ok(mut node) => {
                dedup.assign(&mut node);
                debug!("Parsed {} node '{}'", proxy_type, node.name());
                nodes.push(node);
            }
            Err(e) => {
                sink.decode_failed(line, proxy_type, &e);
                failed += 1;
            }
        }
    }

    info!(
        "Parsed {} node(s), {} failed, {} skipped",
        nodes.len(),
        failed,
        skipped
    );
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProxyType;
    use crate::parser::diagnostics::CollectingSink;
    use crate::utils::base64::base64_encode;

    #[test]
    fn test_parse_links_mixed_line_endings() {
        let text = format!(
            "\r\n  trojan://pw@a.example.com:443#A  \r\n\r\n\nss://{}#B\rhy2://pw@c.example.com:443#C\n",
            base64_encode("aes-256-gcm:pw@b.example.com:8388")
        );
        let nodes = parse_links(&text);
        let names: Vec<&str> = nodes.iter().map(ProxyDescriptor::name).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(nodes[1].proxy_type(), ProxyType::Shadowsocks);
        assert_eq!(nodes[2].proxy_type(), ProxyType::Hysteria2);
    }

    #[test]
    fn test_parse_links_skips_unknown_without_reporting() {
        let mut sink = CollectingSink::new();
        let nodes = parse_links_with("http://example.com\nssr://abc\n\n   \n", &mut sink);
        assert!(nodes.is_empty());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_parse_links_reports_failures() {
        let text = format!(
            "ss://{}\nvmess://%%%\ntrojan://pw@ok.example.com:443#ok",
            base64_encode("no-separator")
        );
        let mut sink = CollectingSink::new();
        let nodes = parse_links_with(&text, &mut sink);

        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].name(), "ok");
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.failures[0].proxy_type, ProxyType::Shadowsocks);
        assert_eq!(sink.failures[1].proxy_type, ProxyType::VMess);
    }

    #[test]
    fn test_parse_links_dedupes_default_names() {
        let nodes = parse_links("trojan://a@h1:443\ntrojan://b@h2:443\ntrojan://c@h3:443");
        let names: Vec<&str> = nodes.iter().map(ProxyDescriptor::name).collect();
        assert_eq!(names, vec!["trojan", "trojan_2", "trojan_3"]);
    }
}
