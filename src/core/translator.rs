use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
    },
    presentation::config::keybindings::{normalize_key_event, Action, KeyBindings},
};

/// Translates raw terminal events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, keybindings: &KeyBindings) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],
        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        RawMsg::Key(key) => translate_key_event(key, keybindings),

        // Rendering is driven by the runner, not by state
        RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, keybindings: &KeyBindings) -> Vec<Msg> {
    // Ctrl-c always quits, whatever the configuration says
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    match keybindings.get(&normalize_key_event(key)) {
        Some(action) => vec![translate_action_to_msg(*action)],
        None => vec![],
    }
}

fn translate_action_to_msg(action: Action) -> Msg {
    match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::ScrollUp => Msg::Ui(UiMsg::ScrollUp),
        Action::ScrollDown => Msg::Ui(UiMsg::ScrollDown),
        Action::ScrollToTop => Msg::Ui(UiMsg::ScrollToTop),
        Action::ScrollToBottom => Msg::Ui(UiMsg::ScrollToBottom),
        Action::OpenInBrowser => Msg::Ui(UiMsg::OpenSelected),
    }
}
