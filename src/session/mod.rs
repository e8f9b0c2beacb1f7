pub mod console;
pub mod state;
pub mod validate;
