// Components module - reusable UI building blocks
//
// Card pieces (avatar, badge, info item, skeleton, social buttons) are
// composed by the card panel. The logs, help and status bar components
// make up the rest of the shell.

pub mod avatar;
pub mod badge;
pub mod card_panel;
pub mod help_panel;
pub mod info_item;
pub mod logs_panel;
pub mod skeleton;
pub mod social_button;
pub mod status_bar;

pub use card_panel::CardPanel;
pub use help_panel::HelpPanel;
pub use logs_panel::LogsPanel;
pub use status_bar::StatusBar;
