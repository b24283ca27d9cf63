//! The ordered check/effect sequence that turns a script path into a
//! registered systemd service.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::confirm::UpdateConfirmation;
use crate::error::RegistrarError;
use crate::identity::ServiceIdentity;
use crate::report;
use crate::systemd;
use crate::unit::ServiceUnit;

/// What a registration attempt did to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationOutcome {
    /// Fresh unit file written.
    Created {
        service_name: String,
        config_path: PathBuf,
    },
    /// Existing unit file overwritten after confirmation. Same mechanics
    /// as a fresh creation.
    Updated {
        service_name: String,
        config_path: PathBuf,
    },
    /// The operator declined the overwrite; nothing was touched.
    Declined,
}

pub struct Registrar {
    service_dir: PathBuf,
}

impl Registrar {
    pub fn new() -> Self {
        Self {
            service_dir: PathBuf::from(systemd::SERVICE_DIR),
        }
    }

    /// Registrar writing into a non-default unit directory.
    pub fn with_service_dir(service_dir: impl Into<PathBuf>) -> Self {
        Self {
            service_dir: service_dir.into(),
        }
    }

    /// Validate the script path, derive the service identity, and write
    /// the unit file, asking `confirmation` before overwriting an
    /// existing definition.
    ///
    /// All validation happens before any filesystem mutation; a rejected
    /// path leaves zero writes and zero permission changes behind.
    pub fn register(
        &self,
        script_path: &Path,
        user: &str,
        confirmation: &dyn UpdateConfirmation,
    ) -> Result<RegistrationOutcome, RegistrarError> {
        let identity = ServiceIdentity::derive(script_path)?;
        let config_path = identity.config_path(&self.service_dir);

        report::info(&format!(
            "The given argument is: {}, the script name: {}",
            script_path.display(),
            identity.script_name
        ));

        let exists = config_path.exists();
        if exists {
            report::prompt(&format!(
                "A service ({}) is already configured with the script {}!",
                identity.service_name, identity.script_name
            ));
            if !confirmation.confirm_update(&identity.service_name, script_path)? {
                report::error("No changes were made!");
                return Ok(RegistrationOutcome::Declined);
            }
        }

        self.apply(&identity, user, &config_path)?;

        if exists {
            Ok(RegistrationOutcome::Updated {
                service_name: identity.service_name,
                config_path,
            })
        } else {
            Ok(RegistrationOutcome::Created {
                service_name: identity.service_name,
                config_path,
            })
        }
    }

    fn apply(
        &self,
        identity: &ServiceIdentity,
        user: &str,
        config_path: &Path,
    ) -> Result<(), RegistrarError> {
        let chmod = systemd::make_executable(&identity.script_path);
        if !chmod.success {
            warn!(
                script = %identity.script_path.display(),
                detail = %chmod.detail,
                "could not set the executable bit"
            );
        }

        let unit = ServiceUnit::new(&identity.service_name, user, &identity.script_path);
        fs::write(config_path, unit.render())?;
        debug!(config = %config_path.display(), "unit file written");

        report::info(&format!(
            "The service '{}' was configured in the host's systemd.",
            identity.service_name
        ));
        report::info(&format!(
            "Run the following command to reload systemd and start the service '{}'.",
            identity.service_name
        ));
        report::command(&systemd::activation_command(&identity.service_name));
        Ok(())
    }
}

impl Default for Registrar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::os::unix::fs::PermissionsExt;

    /// Stub provider with a fixed answer.
    struct Answer(bool);

    impl UpdateConfirmation for Answer {
        fn confirm_update(&self, _service_name: &str, _script_path: &Path) -> io::Result<bool> {
            Ok(self.0)
        }
    }

    /// Provider that must never be consulted.
    struct NeverAsked;

    impl UpdateConfirmation for NeverAsked {
        fn confirm_update(&self, _service_name: &str, _script_path: &Path) -> io::Result<bool> {
            panic!("confirmation requested for a fresh target");
        }
    }

    fn write_script(dir: &Path, name: &str) -> PathBuf {
        let script = dir.join(name);
        fs::write(&script, "#!/bin/sh\nsleep 1\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o644)).unwrap();
        script
    }

    #[test]
    fn fresh_target_creates_exactly_one_unit_file() {
        let units = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let script = write_script(scripts.path(), "myservice.py");

        let registrar = Registrar::with_service_dir(units.path());
        let outcome = registrar.register(&script, "alice", &NeverAsked).unwrap();

        let config_path = units.path().join("myservice.service");
        assert_eq!(
            outcome,
            RegistrationOutcome::Created {
                service_name: "myservice".to_string(),
                config_path: config_path.clone(),
            }
        );

        let entries: Vec<_> = fs::read_dir(units.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("User=alice\n"));
        assert!(content.contains(&format!("ExecStart={}\n", script.display())));
    }

    #[test]
    fn registration_marks_the_script_executable() {
        let units = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let script = write_script(scripts.path(), "worker.sh");

        Registrar::with_service_dir(units.path())
            .register(&script, "bob", &NeverAsked)
            .unwrap();

        let mode = fs::metadata(&script).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn relative_paths_are_rejected_before_any_mutation() {
        let units = tempfile::tempdir().unwrap();
        let registrar = Registrar::with_service_dir(units.path());

        let err = registrar
            .register(Path::new("relative/path.sh"), "alice", &NeverAsked)
            .unwrap_err();

        assert!(matches!(err, RegistrarError::RelativePath { .. }));
        assert_eq!(fs::read_dir(units.path()).unwrap().count(), 0);
    }

    #[test]
    fn extensionless_names_are_rejected_before_any_mutation() {
        let units = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let script = write_script(scripts.path(), "noext");
        let mode_before = fs::metadata(&script).unwrap().permissions().mode();

        let err = Registrar::with_service_dir(units.path())
            .register(&script, "alice", &NeverAsked)
            .unwrap_err();

        assert!(matches!(err, RegistrarError::MissingExtension { .. }));
        assert_eq!(fs::read_dir(units.path()).unwrap().count(), 0);
        // The permission change must not have run either.
        assert_eq!(
            fs::metadata(&script).unwrap().permissions().mode(),
            mode_before
        );
    }

    #[test]
    fn declined_update_leaves_the_unit_file_byte_for_byte_unchanged() {
        let units = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let script = write_script(scripts.path(), "myservice.py");

        let config_path = units.path().join("myservice.service");
        fs::write(&config_path, "prior content, not a rendered unit").unwrap();

        let outcome = Registrar::with_service_dir(units.path())
            .register(&script, "alice", &Answer(false))
            .unwrap();

        assert_eq!(outcome, RegistrationOutcome::Declined);
        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            "prior content, not a rendered unit"
        );
    }

    #[test]
    fn confirmed_update_overwrites_the_unit_file() {
        let units = tempfile::tempdir().unwrap();
        let scripts = tempfile::tempdir().unwrap();
        let script = write_script(scripts.path(), "myservice.py");

        let config_path = units.path().join("myservice.service");
        fs::write(&config_path, "prior content").unwrap();

        let outcome = Registrar::with_service_dir(units.path())
            .register(&script, "carol", &Answer(true))
            .unwrap();

        assert_eq!(
            outcome,
            RegistrationOutcome::Updated {
                service_name: "myservice".to_string(),
                config_path: config_path.clone(),
            }
        );

        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("User=carol\n"));
        assert!(!content.contains("prior content"));
    }

    #[test]
    fn chmod_failure_does_not_abort_the_registration() {
        let units = tempfile::tempdir().unwrap();
        // The script path does not exist, so the permission change fails
        // while the unit write still goes through.
        let script = Path::new("/nonexistent-svcreg-test/ghost.sh");

        let outcome = Registrar::with_service_dir(units.path())
            .register(script, "alice", &NeverAsked)
            .unwrap();

        assert!(matches!(outcome, RegistrationOutcome::Created { .. }));
        let content = fs::read_to_string(units.path().join("ghost.service")).unwrap();
        assert!(content.contains("ExecStart=/nonexistent-svcreg-test/ghost.sh\n"));
    }
}
