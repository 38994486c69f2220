//! Keyboard focus seam
//!
//! The modal coordinator never touches a DOM or widget tree directly. The
//! rendering layer exposes the modal's focusable elements through
//! [`FocusScope`] and the coordinator decides which one receives focus.

/// The ordered set of focusable elements inside a rendered modal
///
/// Index 0 is always the modal's built-in close control.
pub trait FocusScope {
    /// Number of focusable elements in the scope
    fn focusable_count(&self) -> usize;

    /// Move keyboard focus to the element at `index`
    fn focus(&mut self, index: usize);
}

/// Index of the first content element after the close control
pub const FIRST_CONTENT_INDEX: usize = 1;

/// Focus the first element after the close control
///
/// Returns `false` without touching focus when the scope has nothing but
/// (at most) the close control.
pub fn focus_first_content(scope: &mut dyn FocusScope) -> bool {
    if scope.focusable_count() <= FIRST_CONTENT_INDEX {
        return false;
    }
    scope.focus(FIRST_CONTENT_INDEX);
    true
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingScope;
    use super::*;

    #[test]
    fn test_skips_close_control() {
        let mut scope = RecordingScope::with_count(4);
        assert!(focus_first_content(&mut scope));
        assert_eq!(scope.focused, vec![1]);
    }

    #[test]
    fn test_too_few_elements_is_noop() {
        for count in [0, 1] {
            let mut scope = RecordingScope::with_count(count);
            assert!(!focus_first_content(&mut scope));
            assert!(scope.focused.is_empty());
        }
    }
}
