pub mod check;
pub mod layout;
pub mod permit;
pub mod rules;
