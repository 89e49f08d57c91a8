pub mod book_repository;
pub mod customer_repository;
pub mod loan_repository;

// パブリックに型を再エクスポート
pub use book_repository::BookRepository as PostgresBookRepository;
pub use customer_repository::CustomerRepository as PostgresCustomerRepository;
pub use loan_repository::LoanRepository as PostgresLoanRepository;
