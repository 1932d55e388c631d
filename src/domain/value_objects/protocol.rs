//! Protocol value object - the protocol a service port is exposed with

use serde::{Deserialize, Serialize};

/// Protocol of the exposed service port.
///
/// Used verbatim by both the target group and the listener, so the names
/// are the provider's upper-case spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    #[value(name = "HTTP")]
    Http,
    #[value(name = "TCP")]
    Tcp,
    #[value(name = "UDP")]
    Udp,
}

impl Protocol {
    /// Provider spelling of the protocol
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "HTTP",
            Protocol::Tcp => "TCP",
            Protocol::Udp => "UDP",
        }
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn protocol_display_uses_provider_spelling() {
        assert_eq!(Protocol::Http.to_string(), "HTTP");
        assert_eq!(Protocol::Tcp.to_string(), "TCP");
        assert_eq!(Protocol::Udp.to_string(), "UDP");
    }

    #[test]
    fn protocol_parses_from_cli_value() {
        assert_eq!(Protocol::from_str("HTTP", false).unwrap(), Protocol::Http);
        assert_eq!(Protocol::from_str("udp", true).unwrap(), Protocol::Udp);
        assert!(Protocol::from_str("HTTPS", false).is_err());
    }

    #[test]
    fn protocol_serializes_uppercase() {
        let json = serde_json::to_string(&Protocol::Tcp).unwrap();
        assert_eq!(json, "\"TCP\"");
    }
}
