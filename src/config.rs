//! Process configuration
//!
//! Agent selection and constructor arguments are resolved from environment
//! variables at startup into a typed, validated struct. The mapping from a
//! configuration key to a constructor lives in the agent registry; nothing
//! is loaded dynamically.
//!
//! Variables:
//! - `AGENT_KIND`: `minimax` (default) or `random`
//! - `AGENT_DEPTH_LIMITS`: three comma-separated depths for the
//!   early/mid/late phases, default `2,3,5`
//! - `AGENT_SEED`: optional RNG seed for reproducible piece choices
//! - `PORT`: TCP port for the HTTP transport, default `8000`

use std::env;
use std::str::FromStr;

use crate::error::ConfigError;

/// Which agent implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentKind {
    Minimax,
    Random,
}

impl FromStr for AgentKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, ConfigError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(AgentKind::Minimax),
            "random" => Ok(AgentKind::Random),
            _ => Err(ConfigError::UnknownAgentKind(s.to_string())),
        }
    }
}

impl AgentKind {
    /// Configuration key for this kind
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Minimax => "minimax",
            AgentKind::Random => "random",
        }
    }
}

/// Validated agent and transport configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub kind: AgentKind,
    /// Search depth per game phase (early, mid, late)
    pub depth_limits: (u8, u8, u8),
    pub seed: Option<u64>,
    pub port: u16,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            kind: AgentKind::Minimax,
            depth_limits: (2, 3, 5),
            seed: None,
            port: 8000,
        }
    }
}

impl AgentConfig {
    /// Resolve the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let kind = match env::var("AGENT_KIND") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.kind,
        };
        let depth_limits = match env::var("AGENT_DEPTH_LIMITS") {
            Ok(value) => parse_depth_limits(&value)?,
            Err(_) => defaults.depth_limits,
        };
        let seed = match env::var("AGENT_SEED") {
            Ok(value) => Some(
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(value.clone()))?,
            ),
            Err(_) => None,
        };
        let port = match env::var("PORT") {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value.clone()))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            kind,
            depth_limits,
            seed,
            port,
        })
    }
}

/// Parse a `"2,3,5"` style depth triple.
pub fn parse_depth_limits(value: &str) -> Result<(u8, u8, u8), ConfigError> {
    let parts: Vec<u8> = value
        .split(',')
        .map(|part| part.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .map_err(|_| ConfigError::InvalidDepthLimits(value.to_string()))?;
    match parts.as_slice() {
        [early, mid, late] => Ok((*early, *mid, *late)),
        _ => Err(ConfigError::InvalidDepthLimits(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AgentConfig::default();
        assert_eq!(config.kind, AgentKind::Minimax);
        assert_eq!(config.depth_limits, (2, 3, 5));
        assert_eq!(config.seed, None);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn test_parse_agent_kind() {
        assert_eq!("minimax".parse::<AgentKind>(), Ok(AgentKind::Minimax));
        assert_eq!("Random".parse::<AgentKind>(), Ok(AgentKind::Random));
        assert_eq!(" minimax ".parse::<AgentKind>(), Ok(AgentKind::Minimax));
        assert!(matches!(
            "interactive".parse::<AgentKind>(),
            Err(ConfigError::UnknownAgentKind(_))
        ));
    }

    #[test]
    fn test_parse_depth_limits() {
        assert_eq!(parse_depth_limits("2,3,5"), Ok((2, 3, 5)));
        assert_eq!(parse_depth_limits(" 1 , 2 , 3 "), Ok((1, 2, 3)));
    }

    #[test]
    fn test_parse_depth_limits_rejects_bad_input() {
        for bad in ["", "2,3", "2,3,5,7", "a,b,c", "2,3,999"] {
            assert!(
                matches!(
                    parse_depth_limits(bad),
                    Err(ConfigError::InvalidDepthLimits(_))
                ),
                "accepted {bad:?}"
            );
        }
    }
}
