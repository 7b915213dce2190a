use log::debug;
use std::process::{Command, Stdio};

use crate::model::OrchestratorVariant;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Docker Compose not found: neither 'docker compose' nor 'docker-compose' responded")]
    Unavailable,
}

/// Runs a capability check and reports only whether it succeeded.
pub trait CommandProbe {
    fn succeeds(&self, args: &[&str]) -> bool;
}

/// Probes by launching the command with its output discarded.
pub struct SystemProbe;

impl CommandProbe for SystemProbe {
    fn succeeds(&self, args: &[&str]) -> bool {
        let Some((program, rest)) = args.split_first() else {
            return false;
        };

        match Command::new(program)
            .args(rest)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output.status.success(),
            Err(e) => {
                debug!("Could not launch '{}': {}", program, e);
                false
            }
        }
    }
}

/// Detect the Docker Compose variant installed on this host
pub fn detect() -> Result<OrchestratorVariant, ProbeError> {
    detect_with(&SystemProbe)
}

pub fn detect_with(probe: &dyn CommandProbe) -> Result<OrchestratorVariant, ProbeError> {
    for variant in OrchestratorVariant::ALL {
        let args = variant.probe_args();
        debug!("Probing: {}", args.join(" "));
        if probe.succeeds(&args) {
            debug!("Using {}", variant);
            return Ok(variant);
        }
    }
    Err(ProbeError::Unavailable)
}
