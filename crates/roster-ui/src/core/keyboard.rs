//! Arrow-key paging rules.

const EDITABLE_TAGS: [&str; 3] = ["INPUT", "TEXTAREA", "SELECT"];

/// Key press as seen by the list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress<'a> {
    /// `KeyboardEvent.key`.
    pub key: &'a str,
    /// Tag name of the event target, if it is an element.
    pub target_tag: Option<&'a str>,
    /// Create/edit dialog is open.
    pub dialog_open: bool,
}

/// Page to navigate to for `press`, or `None` when the key is ignored.
#[must_use]
pub fn page_for_key(press: KeyPress<'_>, current: u32, total_pages: u32) -> Option<u32> {
    if press.dialog_open {
        return None;
    }
    if press
        .target_tag
        .is_some_and(|tag| EDITABLE_TAGS.iter().any(|editable| tag.eq_ignore_ascii_case(editable)))
    {
        return None;
    }
    let target = match press.key {
        "ArrowLeft" => current.checked_sub(1)?,
        "ArrowRight" => current.checked_add(1)?,
        _ => return None,
    };
    (target < total_pages).then_some(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(key: &str) -> KeyPress<'_> {
        KeyPress {
            key,
            target_tag: Some("BODY"),
            dialog_open: false,
        }
    }

    #[test]
    fn arrows_move_within_bounds() {
        assert_eq!(page_for_key(press("ArrowRight"), 0, 3), Some(1));
        assert_eq!(page_for_key(press("ArrowLeft"), 2, 3), Some(1));
        assert_eq!(page_for_key(press("ArrowLeft"), 0, 3), None);
        assert_eq!(page_for_key(press("ArrowRight"), 2, 3), None);
        assert_eq!(page_for_key(press("ArrowRight"), 0, 0), None);
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(page_for_key(press("Enter"), 1, 3), None);
    }

    #[test]
    fn editable_targets_swallow_arrows() {
        for tag in ["INPUT", "textarea", "Select"] {
            let key = KeyPress {
                target_tag: Some(tag),
                ..press("ArrowRight")
            };
            assert_eq!(page_for_key(key, 0, 3), None);
        }
    }

    #[test]
    fn open_dialog_blocks_paging() {
        let key = KeyPress {
            dialog_open: true,
            ..press("ArrowRight")
        };
        assert_eq!(page_for_key(key, 0, 3), None);
    }
}
