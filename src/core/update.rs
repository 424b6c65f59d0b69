use crate::core::{
    cmd::Cmd,
    msg::{system::SystemMsg, ui::UiMsg, Msg},
    projection::project,
    state::{feed::reduce, AppState},
};

/// Commands issued once when a session starts
pub fn init() -> Vec<Cmd> {
    vec![Cmd::FetchItemList]
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // Feed actions go through the pure reducer; a changed page window
        // (list arrived or page advanced) schedules the window fetch.
        Msg::Feed(feed_msg) => {
            let window_before = state.feed.page_window_key();
            state.feed = reduce(state.feed, feed_msg);
            let window_after = state.feed.page_window_key();

            let commands = if window_after.is_some() && window_after != window_before {
                vec![Cmd::FetchPageWindow]
            } else {
                vec![]
            };
            (state, commands)
        }

        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Ui(UiMsg::OpenSelected) => {
            let commands = {
                let view = project(&state.feed);
                state
                    .ui
                    .selected
                    .and_then(|index| view.rows.get(index))
                    .and_then(|row| row.story())
                    .map(|item| Cmd::OpenUrl { url: item.link() })
                    .into_iter()
                    .collect()
            };
            (state, commands)
        }

        // Moving on dismisses a stale status line
        Msg::Ui(ui_msg) => {
            state.system.update(SystemMsg::ClearStatusMessage);
            let row_count = project(&state.feed).rows.len();
            state.ui.update(ui_msg, row_count);
            (state, vec![])
        }
    }
}
