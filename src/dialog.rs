//! Removal confirmation dialog

use crate::extensions::ExtensionList;

/// Extension awaiting confirmation
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRemoval {
    pub name: String,
    pub logo: String,
}

/// Modal gate in front of `ExtensionList::remove`
#[derive(Clone, Debug, Default)]
pub struct RemoveDialog {
    pending: Option<PendingRemoval>,
    busy: bool,
}

impl RemoveDialog {
    pub fn open(&mut self, name: impl Into<String>, logo: impl Into<String>) {
        self.pending = Some(PendingRemoval {
            name: name.into(),
            logo: logo.into(),
        });
        self.busy = false;
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::debug!(extension = %pending.name, "Removal cancelled");
        }
    }

    /// Run the removal once; returns false when closed or already busy
    pub fn confirm(&mut self, list: &mut ExtensionList) -> bool {
        if self.busy {
            return false;
        }
        let Some(pending) = self.pending.take() else {
            return false;
        };

        self.busy = true;
        list.remove(&pending.name);
        self.busy = false;
        true
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn pending(&self) -> Option<&PendingRemoval> {
        self.pending.as_ref()
    }

    #[cfg(test)]
    fn set_busy(&mut self) {
        self.busy = true;
    }
}

/// Title line shown in the dialog
pub fn dialog_title(name: &str) -> String {
    format!("Remove {}?", name)
}

pub const DIALOG_DESCRIPTION: &str =
    "This action cannot be undone. This will permanently remove the extension.";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExtensionRecord;

    fn list() -> ExtensionList {
        ExtensionList::new(vec![
            ExtensionRecord::new(1, "A", true),
            ExtensionRecord::new(2, "B", false),
        ])
    }

    #[test]
    fn test_confirm_removes_and_closes() {
        let mut list = list();
        let mut dialog = RemoveDialog::default();
        dialog.open("A", "a.svg");
        assert!(dialog.is_open());

        assert!(dialog.confirm(&mut list));
        assert!(!dialog.is_open());
        assert!(!dialog.is_busy());
        assert!(list.get("A").is_none());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_cancel_does_not_mutate() {
        let mut list = list();
        let mut dialog = RemoveDialog::default();
        dialog.open("A", "a.svg");
        dialog.cancel();
        assert!(!dialog.is_open());
        assert!(!dialog.confirm(&mut list));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_second_confirm_is_ignored() {
        let mut list = list();
        let mut dialog = RemoveDialog::default();
        dialog.open("A", "a.svg");
        assert!(dialog.confirm(&mut list));
        assert!(!dialog.confirm(&mut list));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_busy_blocks_confirm() {
        let mut list = list();
        let mut dialog = RemoveDialog::default();
        dialog.open("B", "b.svg");
        dialog.set_busy();
        assert!(!dialog.confirm(&mut list));
        assert_eq!(list.len(), 2);
        assert_eq!(dialog.pending().map(|p| p.name.as_str()), Some("B"));
    }

    #[test]
    fn test_dialog_text() {
        assert_eq!(dialog_title("DevLens"), "Remove DevLens?");
    }
}
