pub mod book_repository;
pub mod customer_repository;
pub mod loan_repository;

pub use book_repository::BookRepository;
pub use customer_repository::CustomerRepository;
pub use loan_repository::LoanRepository;
