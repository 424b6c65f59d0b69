use crate::core::{cmd::Cmd, msg::system::SystemMsg};

/// System-related state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl SystemState {
    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            // The runner redraws on resize; nothing to keep here
            SystemMsg::Resize(..) | SystemMsg::Tick => vec![],

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_system_state_quit() {
        let mut system = SystemState::default();
        assert!(!system.should_quit);

        let commands = system.update(SystemMsg::Quit);
        assert!(system.should_quit);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_system_state_status_message() {
        let mut system = SystemState::default();

        system.update(SystemMsg::ShowError("hello".to_string()));
        assert_eq!(system.status_message.as_deref(), Some("Error: hello"));

        system.update(SystemMsg::ClearStatusMessage);
        assert_eq!(system.status_message, None);
    }

    #[test]
    fn test_system_state_show_error_logs() {
        let mut system = SystemState::default();

        let commands = system.update(SystemMsg::ShowError("terminal lost".to_string()));
        assert_eq!(
            system.status_message.as_deref(),
            Some("Error: terminal lost")
        );
        assert_eq!(
            commands,
            vec![Cmd::LogError {
                message: "terminal lost".to_string()
            }]
        );
    }

    #[test]
    fn test_system_state_resize_keeps_state() {
        let mut system = SystemState::default();
        let commands = system.update(SystemMsg::Resize(120, 40));
        assert_eq!(system, SystemState::default());
        assert!(commands.is_empty());
    }
}
