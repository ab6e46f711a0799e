pub mod session;
pub mod startup;
