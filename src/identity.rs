use std::path::{Path, PathBuf};

use crate::error::RegistrarError;

/// Names derived from the script path.
///
/// The trailing path segment becomes the script name; stripping its last
/// extension yields the service name the unit file is registered under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceIdentity {
    pub script_path: PathBuf,
    pub script_name: String,
    pub service_name: String,
}

impl ServiceIdentity {
    /// Derive the service identity from a script path.
    ///
    /// The path must be absolute, and its final segment must contain at
    /// least one extension separator with a non-empty name in front of it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::path::Path;
    /// use svcreg::identity::ServiceIdentity;
    ///
    /// let identity = ServiceIdentity::derive(Path::new("/root/myservice.py")).unwrap();
    /// assert_eq!(identity.script_name, "myservice.py");
    /// assert_eq!(identity.service_name, "myservice");
    /// ```
    pub fn derive(script_path: &Path) -> Result<Self, RegistrarError> {
        if !script_path.is_absolute() {
            return Err(RegistrarError::RelativePath {
                given: script_path.to_path_buf(),
            });
        }

        let script_name = script_path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_owned)
            .ok_or_else(|| RegistrarError::MissingExtension {
                script_name: String::new(),
            })?;

        // "all but the last extension"; an empty remainder (e.g. ".hidden")
        // derives no usable name and is rejected like a missing extension.
        let service_name = match script_name.rsplit_once('.') {
            Some((stem, _extension)) if !stem.is_empty() => stem.to_owned(),
            _ => {
                return Err(RegistrarError::MissingExtension {
                    script_name: script_name.clone(),
                })
            }
        };

        Ok(Self {
            script_path: script_path.to_path_buf(),
            script_name,
            service_name,
        })
    }

    /// Absolute path of the unit file inside `service_dir`.
    pub fn config_path(&self, service_dir: &Path) -> PathBuf {
        service_dir.join(format!("{}.service", self.service_name))
    }
}
