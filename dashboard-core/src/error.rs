use thiserror::Error;

/// Stage-tagged failures produced by the pipeline.
///
/// Every variant except [`DashboardError::Bootstrap`] is recovered locally:
/// the orchestrator logs it and moves on to the next city. A bootstrap
/// failure aborts the whole invocation.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Network/HTTP/parse error talking to the weather provider.
    #[error("weather fetch for '{city}' failed: {cause:#}")]
    Fetch { city: String, cause: anyhow::Error },

    /// Non-not-found error probing object existence.
    #[error("existence probe for '{key}' failed: {cause:#}")]
    Probe { key: String, cause: anyhow::Error },

    /// Error serializing or writing the weather object.
    #[error("write of '{key}' failed: {cause:#}")]
    Write { key: String, cause: anyhow::Error },

    /// Error publishing the notification; always swallowed after logging.
    #[error("notification for '{city}' failed: {cause:#}")]
    Notify { city: String, cause: anyhow::Error },

    /// Error creating the bucket during bootstrap; fatal.
    #[error("failed to ensure bucket '{bucket}': {cause:#}")]
    Bootstrap { bucket: String, cause: anyhow::Error },
}

impl DashboardError {
    /// Whether this failure must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DashboardError::Bootstrap { .. })
    }

    /// Short stage tag used in log lines.
    pub fn stage(&self) -> &'static str {
        match self {
            DashboardError::Fetch { .. } => "fetch",
            DashboardError::Probe { .. } => "probe",
            DashboardError::Write { .. } => "write",
            DashboardError::Notify { .. } => "notify",
            DashboardError::Bootstrap { .. } => "bootstrap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn only_bootstrap_is_fatal() {
        let errors = [
            DashboardError::Fetch { city: "Seattle".into(), cause: anyhow!("boom") },
            DashboardError::Probe { key: "k".into(), cause: anyhow!("boom") },
            DashboardError::Write { key: "k".into(), cause: anyhow!("boom") },
            DashboardError::Notify { city: "Seattle".into(), cause: anyhow!("boom") },
        ];
        for err in &errors {
            assert!(!err.is_fatal(), "{} must not be fatal", err.stage());
        }

        let fatal = DashboardError::Bootstrap { bucket: "b".into(), cause: anyhow!("boom") };
        assert!(fatal.is_fatal());
    }

    #[test]
    fn display_includes_context() {
        let err = DashboardError::Fetch { city: "Seattle".into(), cause: anyhow!("timed out") };
        let msg = err.to_string();
        assert!(msg.contains("Seattle"));
        assert!(msg.contains("timed out"));
    }

    #[test]
    fn stage_tags() {
        let err = DashboardError::Probe { key: "k".into(), cause: anyhow!("denied") };
        assert_eq!(err.stage(), "probe");
    }
}
