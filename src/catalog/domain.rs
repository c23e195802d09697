pub mod service;

use std::io::Write;
use crate::books::model::{Book, BookKey};
use crate::catalog::dto::ReadReceipt;
use crate::core::library::LibraryResult;
use crate::readers::model::Reader;

/// Registers readers and books and answers aggregate reports over them.
///
/// Books are created through the factory methods but only become visible to
/// reports once a reader has read them. Every "top n" report orders ties by
/// registration order.
pub trait CatalogService {
    fn create_book(&mut self, title: &str, isbn: u64, price: f64) -> LibraryResult<Book>;
    fn create_novel(&mut self, title: &str, author: &str, isbn: u64, price: f64) -> LibraryResult<Book>;
    fn create_non_fiction(&mut self, title: &str, subject: &str, level: &str,
                          isbn: u64, price: f64) -> LibraryResult<Book>;

    fn add_reader(&mut self, name: &str, email: &str, initial_books: &[Book]) -> LibraryResult<Vec<ReadReceipt>>;
    fn record_read(&mut self, book: &Book, email: &str, rating: Option<u8>) -> LibraryResult<ReadReceipt>;
    fn rename_reader_email(&mut self, old_email: &str, new_email: &str) -> LibraryResult<()>;
    fn reassign_isbn(&mut self, book: &BookKey, new_isbn: u64) -> LibraryResult<BookKey>;

    fn reader(&self, email: &str) -> Option<&Reader>;
    fn book(&self, key: &BookKey) -> Option<&Book>;
    fn read_count(&self, key: &BookKey) -> u32;
    fn readers(&self) -> Vec<&Reader>;
    fn books(&self) -> Vec<&Book>;

    fn most_read_book(&self) -> Option<&Book>;
    fn n_most_read_books(&self, n: usize) -> Vec<&Book>;
    fn n_most_prolific_readers(&self, n: usize) -> Vec<&Reader>;
    fn highest_rated_book(&self) -> Option<&Book>;
    fn most_positive_reader(&self) -> Option<&Reader>;
    fn worth_of_reader(&self, email: &str) -> LibraryResult<f64>;
    fn n_most_expensive_books(&self, n: usize) -> Vec<&Book>;

    fn summary(&self) -> String;
    fn print_catalog(&self, out: &mut dyn Write) -> LibraryResult<()>;
    fn print_users(&self, out: &mut dyn Write) -> LibraryResult<()>;
}
