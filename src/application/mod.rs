pub mod compare;
pub mod session;
