pub mod key_store;
pub mod settings_status;
