pub mod atom;
pub mod session;
