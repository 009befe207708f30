pub mod account;
pub mod admissions;
