//! Where decode failures are reported
//!
//! The dispatcher never aborts a batch on a bad link. Each failure is handed
//! to a [`DiagnosticSink`] and the line is dropped.

use log::{debug, warn};

use crate::error::ParseError;
use crate::models::ProxyType;

pub trait DiagnosticSink {
    /// Called once for every line whose scheme is known but whose decoding failed
    fn decode_failed(&mut self, line: &str, proxy_type: ProxyType, error: &ParseError);
}

/// Reports failures through the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn decode_failed(&mut self, line: &str, proxy_type: ProxyType, error: &ParseError) {
        warn!("Failed to parse {} link: {}", proxy_type, error);
        debug!("Rejected link: {}", line);
    }
}

/// A recorded decode failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeFailure {
    pub line: String,
    pub proxy_type: ProxyType,
    pub reason: String,
}

/// Keeps every failure in memory, for callers that report them back to a user
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub failures: Vec<DecodeFailure>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl DiagnosticSink for CollectingSink {
    fn decode_failed(&mut self, line: &str, proxy_type: ProxyType, error: &ParseError) {
        self.failures.push(DecodeFailure {
            line: line.to_string(),
            proxy_type,
            reason: error.to_string(),
        });
    }
}
