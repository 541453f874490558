//! Database Models

pub mod employee;

pub use employee::{Employee, EmployeeCreate, EmployeeUpdate};
