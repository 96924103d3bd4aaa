//! Modal stack for managing overlays
//!
//! Replaces per-dialog boolean flags with an enum-based modal stack. Modals
//! render above the active screen and only the top one receives input.

/// Represents a modal overlay that can be displayed on top of the main UI
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Quit confirmation dialog
    QuitConfirm,
    /// Call detail overlay for the selected call record
    CallDetail,
    /// Calendar date picker for the date-range filter
    DatePicker,
    /// Call-type filter selector
    TypeFilter { selected_index: usize },
    /// Status filter selector
    StatusFilter { selected_index: usize },
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Get a mutable reference to the top modal
    pub fn top_mut(&mut self) -> Option<&mut Modal> {
        self.stack.last_mut()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::QuitConfirm);
        assert!(stack.top().is_some());

        stack.push(Modal::CallDetail);

        let top = stack.pop();
        assert_eq!(top, Some(Modal::CallDetail));

        let top = stack.pop();
        assert_eq!(top, Some(Modal::QuitConfirm));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_top() {
        let mut stack = ModalStack::new();
        stack.push(Modal::DatePicker);
        assert_eq!(stack.top(), Some(&Modal::DatePicker));

        stack.push(Modal::TypeFilter { selected_index: 0 });
        assert_eq!(stack.top(), Some(&Modal::TypeFilter { selected_index: 0 }));
    }

    #[test]
    fn test_modal_stack_top_mut() {
        let mut stack = ModalStack::new();
        stack.push(Modal::StatusFilter { selected_index: 0 });

        if let Some(Modal::StatusFilter { selected_index }) = stack.top_mut() {
            *selected_index = 3;
        }

        assert_eq!(stack.top(), Some(&Modal::StatusFilter { selected_index: 3 }));
    }
}
