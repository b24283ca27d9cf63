use std::path::{Path, PathBuf};

/// Unit file template. `{name}`, `{user}` and `{exec}` are replaced at
/// render time; everything else, the hardening block included, is fixed
/// for every generated service.
pub(crate) static UNIT_TEMPLATE: &str = "[Unit]
Description=Service {name} (registered via svcreg).
After=network.target
StartLimitIntervalSec=0

[Service]
Type=simple
Restart=always
RestartSec=1
User={user}
ExecStart={exec}

NoNewPrivileges=yes
ProtectSystem=strict
LockPersonality=yes
ProtectClock=yes
ProtectHostname=yes
ProtectControlGroups=yes

ProtectKernelModules=yes
ProtectKernelTunables=yes
RestrictSUIDSGID=yes

[Install]
WantedBy=multi-user.target
";

/// The fixed-schema service definition rendered into a unit file.
#[derive(Debug, Clone)]
pub struct ServiceUnit {
    pub service_name: String,
    pub user: String,
    pub exec_path: PathBuf,
}

impl ServiceUnit {
    pub fn new(service_name: &str, user: &str, exec_path: &Path) -> Self {
        Self {
            service_name: service_name.to_owned(),
            user: user.to_owned(),
            exec_path: exec_path.to_path_buf(),
        }
    }

    /// Render the full unit file text. Each write is a full overwrite of
    /// the previous content; there are no partial updates.
    pub fn render(&self) -> String {
        UNIT_TEMPLATE
            .replace("{name}", &self.service_name)
            .replace("{user}", &self.user)
            .replace("{exec}", &self.exec_path.display().to_string())
    }

    /// Execution user taken verbatim from the invoking session.
    ///
    /// Not validated against the user database; an unset `USER` renders
    /// as an empty `User=` value.
    pub fn session_user() -> String {
        std::env::var("USER").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_the_user_and_exec_path_verbatim() {
        let unit = ServiceUnit::new("myservice", "alice", Path::new("/root/myservice.py"));
        let text = unit.render();

        assert!(text.contains("User=alice\n"));
        assert!(text.contains("ExecStart=/root/myservice.py\n"));
        assert!(text.contains("Description=Service myservice "));
    }

    #[test]
    fn renders_the_fixed_sections_and_hardening_block() {
        let unit = ServiceUnit::new("worker", "bob", Path::new("/srv/worker.sh"));
        let text = unit.render();

        assert!(text.starts_with("[Unit]\n"));
        assert!(text.contains("After=network.target\n"));
        assert!(text.contains("StartLimitIntervalSec=0\n"));
        assert!(text.contains("Type=simple\n"));
        assert!(text.contains("Restart=always\n"));
        assert!(text.contains("RestartSec=1\n"));
        for directive in [
            "NoNewPrivileges=yes",
            "ProtectSystem=strict",
            "LockPersonality=yes",
            "ProtectClock=yes",
            "ProtectHostname=yes",
            "ProtectControlGroups=yes",
            "ProtectKernelModules=yes",
            "ProtectKernelTunables=yes",
            "RestrictSUIDSGID=yes",
        ] {
            assert!(text.contains(directive), "missing directive {directive}");
        }
        assert!(text.ends_with("WantedBy=multi-user.target\n"));
    }

    #[test]
    fn renders_an_empty_user_as_an_empty_value() {
        let unit = ServiceUnit::new("worker", "", Path::new("/srv/worker.sh"));
        assert!(unit.render().contains("User=\n"));
    }
}
