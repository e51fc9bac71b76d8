/// User prompts raised by gallery commands
///
/// Deleting asks for confirmation and a rejected submit shows an alert.
/// The native dialogs live in `ui::dialogs`; tests script the answers.

pub trait Prompt {
    /// Ask a yes/no question; `true` means the user agreed
    fn confirm(&self, message: &str) -> bool;

    /// Show a blocking message
    fn alert(&self, message: &str);
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::Prompt;
    use std::cell::RefCell;

    /// Answers every confirmation with a fixed value and records what was asked
    #[derive(Debug, Default)]
    pub struct ScriptedPrompt {
        pub answer: bool,
        pub asked: RefCell<Vec<String>>,
        pub alerts: RefCell<Vec<String>>,
    }

    impl ScriptedPrompt {
        pub fn accepting() -> Self {
            Self {
                answer: true,
                ..Self::default()
            }
        }

        pub fn declining() -> Self {
            Self::default()
        }
    }

    impl Prompt for ScriptedPrompt {
        fn confirm(&self, message: &str) -> bool {
            self.asked.borrow_mut().push(message.to_string());
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }
}
