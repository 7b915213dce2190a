use std::fmt;

pub const DEFAULT_SERVICE: &str = "api";

/// How Docker Compose is invoked on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrchestratorVariant {
    /// Compose v2 plugin: `docker compose`
    DockerCompose,
    /// Standalone v1 binary: `docker-compose`
    LegacyDockerCompose,
}

impl OrchestratorVariant {
    /// Probe order, most preferred first.
    pub const ALL: [OrchestratorVariant; 2] = [Self::DockerCompose, Self::LegacyDockerCompose];

    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::DockerCompose => &["docker", "compose"],
            Self::LegacyDockerCompose => &["docker-compose"],
        }
    }

    /// Version query used to check that this variant responds.
    pub fn probe_args(self) -> Vec<&'static str> {
        let mut args = self.tokens().to_vec();
        args.push("version");
        args
    }
}

impl fmt::Display for OrchestratorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens().join(" "))
    }
}

/// Where forwarded commands execute: resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecTarget {
    pub variant: OrchestratorVariant,
    pub compose_file: Option<String>,
    pub service: String,
}

impl ExecTarget {
    pub fn new(variant: OrchestratorVariant) -> Self {
        Self {
            variant,
            compose_file: None,
            service: DEFAULT_SERVICE.to_string(),
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = service.into();
        self
    }

    pub fn with_compose_file(mut self, compose_file: Option<String>) -> Self {
        self.compose_file = compose_file;
        self
    }

    /// `<variant tokens> [-f <file>] exec <service>`
    pub fn prefix(&self) -> Vec<String> {
        let mut prefix: Vec<String> = self.variant.tokens().iter().map(|t| t.to_string()).collect();
        if let Some(file) = &self.compose_file {
            prefix.push("-f".to_string());
            prefix.push(file.clone());
        }
        prefix.push("exec".to_string());
        prefix.push(self.service.clone());
        prefix
    }
}
