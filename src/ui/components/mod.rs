pub mod form;
pub mod header;
pub mod import;
pub mod keybindings;
pub mod notification;
pub mod request;
pub mod results;
pub mod util;
