mod book_service;
mod customer_service;
mod dependencies;
mod errors;
mod loan_service;

pub use book_service::{add_book, delete_book, get_book, list_books, update_book};
pub use customer_service::{
    add_customer, delete_customer, get_customer, list_customers, update_customer,
};
pub use dependencies::ServiceDependencies;
pub use errors::{RecordError, Result};
pub use loan_service::{add_loan, list_loans};
