pub mod actions;
pub mod authenticator;
pub mod session;
