//! Page behavior as plain data, free of any browser handles.

pub mod counter;
pub mod form;
pub mod menu;
pub mod once;
pub mod particles;
pub mod scroll;
pub mod theme;
pub mod toast;
