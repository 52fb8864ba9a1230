pub mod banner;
pub mod forms;
pub mod header;
pub mod nav;
pub mod toast;
