pub mod harvest;
pub mod layout;
pub mod manager;
