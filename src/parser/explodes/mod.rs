pub mod common;
pub mod hysteria2;
pub mod ss;
pub mod trojan;
pub mod tuic;
pub mod vless;
pub mod vmess;

pub use common::{explode, link_scheme, lookup_decoder, Decoder};
pub use hysteria2::explode_hysteria2;
pub use ss::explode_ss;
pub use trojan::explode_trojan;
pub use tuic::explode_tuic;
pub use vless::explode_vless;
pub use vmess::explode_vmess;
