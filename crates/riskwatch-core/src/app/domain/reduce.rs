use crate::app::domain::action::Action;
use crate::app::domain::state::IndicatorMessagesState;

pub fn reduce(state: &mut IndicatorMessagesState, action: Action) {
    match action {
        Action::GetIndicatorMessagesStart => state.start_loading(),

        Action::GetIndicatorMessagesSuccess { messages } => state.loading_succeeded(messages),

        Action::GetIndicatorMessagesFailure { error } => state.loading_failed(error),

        Action::SetFilters { filters } => {
            state.filters = Some(filters);
        }
    }
}
