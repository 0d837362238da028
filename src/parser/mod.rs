pub mod diagnostics;
pub mod explodes;
pub mod node_manip;
pub mod subparser;

pub use diagnostics::{CollectingSink, DecodeFailure, DiagnosticSink, LogSink};
pub use explodes::explode;
pub use node_manip::{dedupe_names, NameDeduplicator};
pub use subparser::{parse_links, parse_links_with};
