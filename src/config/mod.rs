use crate::security::collaborator::CollaboratorKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("SIGNIN_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("SIGNIN_WORKERS must be a positive integer, got {0:?}")]
    InvalidWorkers(String),
    #[error("SIGNIN_COLLABORATOR must be \"demo\" or \"log\", got {0:?}")]
    UnknownCollaborator(String),
    #[error("SIGNIN_SUCCESS_REDIRECT must be an absolute path, got {0:?}")]
    InvalidRedirect(String),
}

/// Server settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
    pub collaborator: CollaboratorKind,
    pub success_redirect: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            workers: num_cpus::get() * 2,
            collaborator: CollaboratorKind::Demo,
            success_redirect: "/sign-in".to_string(),
        }
    }
}

impl Settings {
    /// Reads `SIGNIN_*` variables; unset ones keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Ok(host) = std::env::var("SIGNIN_HOST") {
            settings.host = host;
        }

        if let Ok(port) = std::env::var("SIGNIN_PORT") {
            settings.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Ok(workers) = std::env::var("SIGNIN_WORKERS") {
            settings.workers = match workers.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(workers)),
            };
        }

        if let Ok(kind) = std::env::var("SIGNIN_COLLABORATOR") {
            settings.collaborator = CollaboratorKind::parse(&kind)
                .ok_or_else(|| ConfigError::UnknownCollaborator(kind.clone()))?;
        }

        if let Ok(redirect) = std::env::var("SIGNIN_SUCCESS_REDIRECT") {
            // only local paths, never another origin
            if !redirect.starts_with('/')
                || redirect.starts_with("//")
                || redirect.starts_with("/\\")
            {
                return Err(ConfigError::InvalidRedirect(redirect));
            }
            settings.success_redirect = redirect;
        }

        Ok(settings)
    }
}
