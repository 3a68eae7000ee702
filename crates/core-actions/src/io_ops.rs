//! Saving the active document and reporting the outcome on the status line.

use core_model::Workspace;

/// Back up (when enabled) then save the active document. Returns true when the
/// save succeeded. Failures land in the status line; the document stays dirty.
pub fn save_active(ws: &mut Workspace) -> bool {
    let Some(doc) = ws.active_doc_mut() else {
        return false;
    };
    let backup = doc.write_backup();
    let saved = doc.save();
    if let Err(e) = &backup {
        tracing::error!(target: "io", ?e, "backup_write_error");
    }
    match saved {
        Ok(bytes) => {
            match backup {
                Err(e) => ws.status.set(format!("{bytes} bytes written to disk ({e})")),
                Ok(_) => ws.status.set(format!("{bytes} bytes written to disk")),
            }
            true
        }
        Err(e) => {
            ws.status.set(e.to_string());
            false
        }
    }
}
