pub mod form_handler;
