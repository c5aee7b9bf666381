pub mod activity;
pub mod backup;
pub mod export;
pub mod log;
pub mod validator;
