//! Reusable UI widgets

mod log_view;
mod menu_list;
mod spinner;
mod step_track;

pub use log_view::LogView;
pub use menu_list::MenuList;
pub use spinner::Spinner;
pub use step_track::StepTrack;
