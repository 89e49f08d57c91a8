pub mod book;
pub mod commands;
pub mod customer;
pub mod errors;
pub mod loan;
pub mod value_objects;

pub use book::*;
pub use customer::*;
pub use errors::*;
pub use loan::*;
pub use value_objects::*;
