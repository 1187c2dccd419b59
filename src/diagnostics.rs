// ABOUTME: Diagnostics accumulator for non-fatal warnings during deployment.
// ABOUTME: Collects failures of steps that never gate the pipeline so they can be shown at the end.

/// Collects non-fatal warnings during deployment operations.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Consume the accumulator, yielding warnings in the order recorded.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

/// A non-fatal warning collected during deployment.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Create a registry login warning.
    pub fn registry_login(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::RegistryLogin,
            message: message.into(),
        }
    }

    /// Create a repository listing warning.
    pub fn repository_listing(message: impl Into<String>) -> Self {
        Self {
            kind: WarningKind::RepositoryListing,
            message: message.into(),
        }
    }
}

/// Categories of warnings that can occur during deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// `az acr login` failed; a later push may fail as a result.
    RegistryLogin,
    /// Listing registry repositories failed (display only).
    RepositoryListing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_starts_empty() {
        assert!(Diagnostics::default().into_warnings().is_empty());
    }

    #[test]
    fn diagnostics_collects_warnings() {
        let mut diag = Diagnostics::default();

        diag.warn(Warning::registry_login("az acr login exited with status 1"));
        diag.warn(Warning::repository_listing("az not found"));

        let warnings = diag.into_warnings();
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].kind, WarningKind::RegistryLogin);
        assert_eq!(warnings[1].kind, WarningKind::RepositoryListing);
    }

    #[test]
    fn warning_constructors_set_correct_kind() {
        assert_eq!(
            Warning::registry_login("test").kind,
            WarningKind::RegistryLogin
        );
        assert_eq!(
            Warning::repository_listing("test").kind,
            WarningKind::RepositoryListing
        );
    }
}
