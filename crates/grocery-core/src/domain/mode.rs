//! Form Mode
//!
//! Which operation a form submission performs.

/// The edit target lives in the variant, never in rendered markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Add,
    Edit(super::ItemId),
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }

    /// Id of the item under edit, if any
    pub fn target(&self) -> Option<super::ItemId> {
        match self {
            FormMode::Add => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Add => "Add Grocery Item",
            FormMode::Edit(_) => "Edit Grocery Item",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_add() {
        assert_eq!(FormMode::default(), FormMode::Add);
        assert_eq!(FormMode::Add.target(), None);
        assert_eq!(FormMode::Edit(4).target(), Some(4));
    }

    #[test]
    fn test_title_follows_mode() {
        assert_eq!(FormMode::Add.title(), "Add Grocery Item");
        assert_eq!(FormMode::Edit(0).title(), "Edit Grocery Item");
    }
}
