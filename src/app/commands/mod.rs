pub mod hook;
pub mod resolve;
pub mod scaffold;
