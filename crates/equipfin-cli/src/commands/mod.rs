pub mod financing;
pub mod plans;
