//! Host systemd interface: capability probe, executable bit, activation
//! commands.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::RegistrarError;

/// Directory systemd reads system-wide unit files from. Fixed; there is
/// no flag or environment override.
pub const SERVICE_DIR: &str = "/etc/systemd/system";

/// Binary launched by the capability probe.
const MANAGER_BIN: &str = "systemd";

/// Probe for a usable systemd installation.
///
/// Launches the manager's version query (output discarded, exit status
/// ignored: only launch success is observed) and lists the unit
/// directory. Either failure reports the same [`RegistrarError::ManagerAbsent`];
/// "manager not installed" and "unit directory missing" are deliberately
/// not distinguished.
pub fn probe() -> Result<(), RegistrarError> {
    probe_with(MANAGER_BIN, Path::new(SERVICE_DIR))
}

pub(crate) fn probe_with(manager_bin: &str, service_dir: &Path) -> Result<(), RegistrarError> {
    let launched = Command::new(manager_bin)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
    if launched.is_err() {
        return Err(RegistrarError::ManagerAbsent);
    }

    if std::fs::read_dir(service_dir).is_err() {
        return Err(RegistrarError::ManagerAbsent);
    }

    Ok(())
}

/// Captured result of the permission-change call.
#[derive(Debug)]
pub struct ChmodOutcome {
    pub success: bool,
    pub detail: String,
}

/// Add the executable bit to `path` via `chmod +x`.
///
/// Best effort: the outcome is captured for the caller to log, never
/// treated as fatal. The unit file write is the primary effect of a
/// registration; a service pointing at a non-executable script simply
/// fails at start time.
pub fn make_executable(path: &Path) -> ChmodOutcome {
    match Command::new("chmod").arg("+x").arg(path).output() {
        Ok(output) if output.status.success() => ChmodOutcome {
            success: true,
            detail: String::new(),
        },
        Ok(output) => ChmodOutcome {
            success: false,
            detail: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
        },
        Err(err) => ChmodOutcome {
            success: false,
            detail: err.to_string(),
        },
    }
}

/// The command line the operator must run after a successful write to
/// reload the unit cache and enable+start the service.
pub fn activation_command(service_name: &str) -> String {
    format!("systemctl daemon-reload && systemctl enable --now {service_name}")
}
