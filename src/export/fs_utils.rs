use crate::core::Confirm;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::path::Path;

/// An existing output file is only replaced with `force` or an explicit yes.
pub(crate) fn ensure_writable(
    path: &Path,
    force: bool,
    confirm: &mut dyn Confirm,
) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    if confirm.confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
