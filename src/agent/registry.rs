//! Compile-time agent factory
//!
//! Maps the validated configuration to a concrete agent constructor. This
//! replaces dynamic module loading: adding an agent means adding an enum
//! variant and a match arm, checked by the compiler.

use crate::config::{AgentConfig, AgentKind};

use super::{MinimaxAgent, QuartoAgent, RandomAgent};

/// Construct the agent selected by the configuration.
#[must_use]
pub fn build_agent(config: &AgentConfig) -> Box<dyn QuartoAgent + Send> {
    match config.kind {
        AgentKind::Minimax => Box::new(MinimaxAgent::with_config(config.depth_limits, config.seed)),
        AgentKind::Random => Box::new(RandomAgent::new(config.seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_builds_each_kind() {
        let mut config = AgentConfig::default();
        assert!(build_agent(&config).identifier().starts_with("minimax:v"));

        config.kind = AgentKind::Random;
        assert!(build_agent(&config).identifier().starts_with("random:v"));
    }
}
