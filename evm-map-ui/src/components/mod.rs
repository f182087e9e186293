//! Reusable Dioxus RSX components for the Event Mapper app.

mod add_event_dialog;
mod alert_stack;
mod event_info_panel;
mod proximity_panel;
mod search_bar;

pub use add_event_dialog::AddEventDialog;
pub use alert_stack::AlertStack;
pub use event_info_panel::EventInfoPanel;
pub use proximity_panel::ProximityPanel;
pub use search_bar::SearchBar;
