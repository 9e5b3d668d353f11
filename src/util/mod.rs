pub mod whatsapp;
pub mod notify;
pub mod logger;
pub mod error;
