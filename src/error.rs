use std::path::PathBuf;

/// Failure kinds of a registration attempt.
///
/// Each kind maps to its own process exit code so scripts wrapping the
/// tool can branch on what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    /// The capability probe could not find a usable systemd installation.
    /// Covers both a missing manager binary and a missing unit directory;
    /// the two are deliberately not distinguished.
    #[error("systemd was not detected on this host")]
    ManagerAbsent,

    /// No script path was supplied on the command line.
    #[error("no script path was given, pass the absolute path of the script to register, for example: svcreg /root/example_script.py")]
    MissingArgument,

    /// The supplied path does not start at the filesystem root.
    #[error("the script path must be absolute, for example: /root/example_script.py (got '{}')", .given.display())]
    RelativePath { given: PathBuf },

    /// The script name carries no extension to strip, so no service name
    /// can be derived from it.
    #[error("the script name must carry an extension, for example: /root/script.py (got '{script_name}')")]
    MissingExtension { script_name: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl RegistrarError {
    /// Exit code reported to the shell for this failure kind.
    pub fn exit_code(&self) -> u8 {
        match self {
            RegistrarError::ManagerAbsent => 10,
            RegistrarError::MissingArgument => 11,
            RegistrarError::RelativePath { .. } => 12,
            RegistrarError::MissingExtension { .. } => 13,
            RegistrarError::Io(_) => 1,
        }
    }
}
