//! Command helper utilities

use std::path::PathBuf;

use tracing::debug;

use crate::app::App;
use crate::config::{DeploymentTarget, ProjectConfig};
use crate::error::{Result, UnistackError};

/// Resolve project path from optional argument
///
/// If a project path is provided, use it. Otherwise,
/// resolve to the current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(path) => Ok(path),
        None => std::env::current_dir().map_err(|e| UnistackError::IoError {
            message: format!("Failed to get current directory: {}", e),
        }),
    }
}

/// Load the project file and merge `-c` overrides into its context
pub fn load_app(
    project: Option<PathBuf>,
    target: Option<DeploymentTarget>,
    overrides: &[String],
) -> Result<App> {
    let project_dir = resolve_project_path(project)?;
    let config = ProjectConfig::load(&project_dir)?;
    let context = config.context().with_overrides(overrides)?;
    debug!(project = %project_dir.display(), overrides = overrides.len(), "loaded project");
    Ok(App::new(config, context).with_target(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_project_path_explicit() {
        let path = resolve_project_path(Some(PathBuf::from("/tmp/site"))).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/site"));
    }

    #[test]
    fn test_load_app_overrides_file_context() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("unistack.yaml"),
            "target: compute\ncontext:\n  env: test\n  domain: a.example.org\n",
        )
        .unwrap();

        let app = load_app(
            Some(temp.path().to_path_buf()),
            None,
            &["domain=b.example.org".to_string()],
        )
        .unwrap();
        assert_eq!(app.target(), DeploymentTarget::Compute);
        assert_eq!(app.context().try_get("env"), Some("test"));
        assert_eq!(app.context().try_get("domain"), Some("b.example.org"));
    }

    #[test]
    fn test_load_app_cli_target_wins() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("unistack.yaml"), "target: compute\n").unwrap();
        let app = load_app(
            Some(temp.path().to_path_buf()),
            Some(DeploymentTarget::All),
            &[],
        )
        .unwrap();
        assert_eq!(app.target(), DeploymentTarget::All);
    }

    #[test]
    fn test_load_app_rejects_bad_pair() {
        let temp = TempDir::new().unwrap();
        let err = load_app(Some(temp.path().to_path_buf()), None, &["domain".to_string()])
            .unwrap_err();
        assert!(matches!(err, UnistackError::ContextInvalidPair { .. }));
    }
}
