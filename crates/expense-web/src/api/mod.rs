mod expenses;
mod http;

pub use expenses::HttpExpenseSource;
