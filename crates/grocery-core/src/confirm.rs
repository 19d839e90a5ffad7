//! User Confirmation
//!
//! Destructive operations ask through this trait instead of opening a
//! dialog themselves. The browser build answers with `window.confirm`.

pub trait Confirm {
    /// Ask the user `message`; `true` means go ahead
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Answers every prompt the same way
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

#[cfg(test)]
impl Confirm for FixedAnswer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

/// Replays queued answers and records each prompt it was shown
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedConfirm {
    answers: std::cell::RefCell<std::collections::VecDeque<bool>>,
    prompts: std::cell::RefCell<Vec<String>>,
}

#[cfg(test)]
impl ScriptedConfirm {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: std::cell::RefCell::new(answers.into_iter().collect()),
            prompts: Default::default(),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

#[cfg(test)]
impl Confirm for ScriptedConfirm {
    /// Declines once the script runs out
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_confirm() {
        let ask = |message: &str| message.starts_with("Delete");
        assert!(ask.confirm("Delete item?"));
        assert!(!ask.confirm("Something else"));
    }

    #[test]
    fn test_scripted_answers() {
        let confirm = ScriptedConfirm::new([true, false]);
        assert!(confirm.confirm("first"));
        assert!(!confirm.confirm("second"));
        assert!(!confirm.confirm("third"));
        assert_eq!(confirm.prompts(), vec!["first", "second", "third"]);
    }
}
