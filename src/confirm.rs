//! Overwrite confirmation, injected so the registrar stays testable
//! without a terminal.

use std::io;
use std::path::Path;

use dialoguer::Input;

/// Literal answer that authorizes overwriting an existing unit file.
pub const AFFIRMATIVE: &str = "sim";

/// Decides whether an existing service definition may be overwritten.
pub trait UpdateConfirmation {
    fn confirm_update(&self, service_name: &str, script_path: &Path) -> io::Result<bool>;
}

/// Case-insensitive match against [`AFFIRMATIVE`], surrounding whitespace
/// ignored. Anything else, the empty answer included, declines.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case(AFFIRMATIVE)
}

/// Interactive provider that blocks on a terminal prompt. No timeout.
pub struct TerminalConfirmation;

impl UpdateConfirmation for TerminalConfirmation {
    fn confirm_update(&self, service_name: &str, script_path: &Path) -> io::Result<bool> {
        let answer: String = Input::new()
            .with_prompt(format!(
                "[?] Update the service ({service_name}) with the script {}? (sim/nao)",
                script_path.display()
            ))
            .allow_empty(true)
            .interact_text()
            .map_err(map_dialoguer_err)?;

        Ok(is_affirmative(&answer))
    }
}

fn map_dialoguer_err(err: dialoguer::Error) -> io::Error {
    match err {
        dialoguer::Error::IO(e) => e,
    }
}
