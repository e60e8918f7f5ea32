//! Confirmation prompt for destructive operations

use dialoguer::Confirm;

use crate::error::{Error, Result};

/// Ask the user to confirm a delete. `force` skips the prompt entirely;
/// a declined prompt is reported as a validation error so the command
/// exits non-zero without touching the API.
pub fn confirm_delete(what: &str, force: bool) -> Result<()> {
    if force {
        return Ok(());
    }
    let confirmed = Confirm::new()
        .with_prompt(format!("Delete {}?", what))
        .default(false)
        .interact()
        .map_err(|e| Error::Config(format!("confirmation prompt failed: {}", e)))?;
    if confirmed {
        Ok(())
    } else {
        Err(Error::Validation("aborted by user".to_string()))
    }
}
