use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::io::Write;
use tracing::{debug, warn};
use crate::books::model::{Book, BookKey};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::ReadReceipt;
use crate::core::domain::{Configuration, Identifiable, Rated};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult, RatingOutcome};
use crate::gateway::events::EventPublisher;
use crate::readers::dto::ReaderDto;
use crate::readers::model::{Reader, validate_email};

#[derive(Debug, PartialEq)]
struct BookEntry {
    book: Book,
    read_count: u32,
}

// Readers and books live in vectors in registration order; the hash indexes
// hold positions into them. Nothing is ever removed, so positions stay valid.
pub struct CatalogServiceImpl {
    config: Configuration,
    readers: Vec<Reader>,
    reader_index: HashMap<String, usize>,
    books: Vec<BookEntry>,
    book_index: HashMap<BookKey, usize>,
    issued_isbns: HashSet<u64>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            readers: vec![],
            reader_index: HashMap::new(),
            books: vec![],
            book_index: HashMap::new(),
            issued_isbns: HashSet::new(),
            events_publisher,
        }
    }

    fn is_isbn_unique(&self, isbn: u64) -> bool {
        !self.issued_isbns.contains(&isbn) && self.books.iter().all(|e| e.book.isbn() != isbn)
    }

    fn reserve_isbn(&mut self, isbn: u64) -> LibraryResult<()> {
        if !self.is_isbn_unique(isbn) {
            warn!(isbn, "book with such isbn already exists");
            return Err(LibraryError::duplicate_isbn(
                format!("book with isbn {} already exists", isbn).as_str()));
        }
        self.issued_isbns.insert(isbn);
        Ok(())
    }

    fn reader_position(&self, email: &str) -> LibraryResult<usize> {
        match self.reader_index.get(email) {
            Some(pos) => Ok(*pos),
            None => {
                warn!(email, "no reader with such email");
                Err(LibraryError::unknown_reader(format!("no reader with email {}", email).as_str()))
            }
        }
    }

    // Returns the position of the book in the index and whether this call
    // registered it.
    fn register(&mut self, book: &Book) -> (usize, bool) {
        let key = book.key();
        if let Some(pos) = self.book_index.get(&key) {
            return (*pos, false);
        }
        self.books.push(BookEntry { book: book.without_ratings(), read_count: 0 });
        let pos = self.books.len() - 1;
        self.book_index.insert(key, pos);
        self.issued_isbns.insert(book.isbn());
        (pos, true)
    }

    fn publish(&mut self, event: DomainEvent) -> LibraryResult<()> {
        self.events_publisher.publish(&event)
    }

    fn ranked_books<F>(&self, n: usize, compare: F) -> Vec<&Book>
        where F: Fn(&BookEntry, &BookEntry) -> std::cmp::Ordering {
        let mut entries: Vec<&BookEntry> = self.books.iter().collect();
        // sort_by is stable, so ties keep registration order
        entries.sort_by(|a, b| compare(*a, *b));
        entries.into_iter().take(n).map(|e| &e.book).collect()
    }
}

// Picks the candidate with the strictly highest average, so the first one seen
// wins a tie. Candidates without an average are skipped.
fn highest_average<'a, T: Rated + 'a>(candidates: impl Iterator<Item=&'a T>) -> Option<&'a T> {
    let mut best: Option<(&'a T, f64)> = None;
    for candidate in candidates {
        if let Some(average) = candidate.average_rating() {
            if best.map_or(true, |(_, top)| average > top) {
                best = Some((candidate, average));
            }
        }
    }
    best.map(|(candidate, _)| candidate)
}

impl CatalogService for CatalogServiceImpl {
    fn create_book(&mut self, title: &str, isbn: u64, price: f64) -> LibraryResult<Book> {
        self.reserve_isbn(isbn)?;
        debug!(title, isbn, "book created");
        Ok(Book::new(title, isbn, price))
    }

    fn create_novel(&mut self, title: &str, author: &str, isbn: u64, price: f64) -> LibraryResult<Book> {
        self.reserve_isbn(isbn)?;
        debug!(title, author, isbn, "novel created");
        Ok(Book::fiction(title, author, isbn, price))
    }

    fn create_non_fiction(&mut self, title: &str, subject: &str, level: &str,
                          isbn: u64, price: f64) -> LibraryResult<Book> {
        self.reserve_isbn(isbn)?;
        debug!(title, subject, level, isbn, "non-fiction book created");
        Ok(Book::non_fiction(title, subject, level, isbn, price))
    }

    fn add_reader(&mut self, name: &str, email: &str, initial_books: &[Book]) -> LibraryResult<Vec<ReadReceipt>> {
        if self.reader_index.contains_key(email) {
            warn!(email, "reader with such email already exists");
            return Err(LibraryError::duplicate_email(
                format!("reader with email {} already exists", email).as_str()));
        }
        let reader = Reader::with_domains(name, email, &self.config.allowed_email_domains)?;
        let event = DomainEvent::added("reader_added", reader.id().as_str(), &ReaderDto::from(&reader))?;
        self.readers.push(reader);
        self.reader_index.insert(email.to_string(), self.readers.len() - 1);
        self.publish(event)?;

        let mut receipts = Vec::with_capacity(initial_books.len());
        for book in initial_books {
            receipts.push(self.record_read(book, email, None)?);
        }
        Ok(receipts)
    }

    fn record_read(&mut self, book: &Book, email: &str, rating: Option<u8>) -> LibraryResult<ReadReceipt> {
        let reader_pos = self.reader_position(email)?;
        let key = book.key();
        self.readers[reader_pos].read_book(key.clone(), rating);

        let (pos, first_read) = self.register(book);
        let max_rating = self.config.max_rating;
        let entry = &mut self.books[pos];
        // a rejected rating never rolls back the read itself
        let outcome = match entry.book.add_rating_with_max(rating, max_rating) {
            Ok(r) => RatingOutcome::Stored(r),
            Err(err) => {
                warn!(%err, "rating rejected");
                match rating {
                    Some(r) => RatingOutcome::OutOfRange(r),
                    None => RatingOutcome::Missing,
                }
            }
        };
        entry.read_count += 1;
        let receipt = ReadReceipt::new(key.clone(), email, entry.read_count, first_read, outcome);

        if first_read {
            let registered = &self.books[pos].book;
            let event = DomainEvent::added("book_registered", registered.id().as_str(), registered)?;
            self.publish(event)?;
        }
        self.publish(DomainEvent::read("book_read", key.to_string().as_str(), &receipt)?)?;
        Ok(receipt)
    }

    fn rename_reader_email(&mut self, old_email: &str, new_email: &str) -> LibraryResult<()> {
        let pos = self.reader_position(old_email)?;
        if old_email == new_email {
            return Ok(());
        }
        validate_email(new_email, &self.config.allowed_email_domains)?;
        if self.reader_index.contains_key(new_email) {
            warn!(email = new_email, "reader with such email already exists");
            return Err(LibraryError::duplicate_email(
                format!("reader with email {} already exists", new_email).as_str()));
        }
        self.readers[pos].change_email(new_email);
        self.reader_index.remove(old_email);
        self.reader_index.insert(new_email.to_string(), pos);
        self.publish(DomainEvent::updated("reader_email_changed", new_email, &old_email)?)
    }

    fn reassign_isbn(&mut self, book: &BookKey, new_isbn: u64) -> LibraryResult<BookKey> {
        let pos = match self.book_index.get(book) {
            Some(pos) => *pos,
            None => {
                return Err(LibraryError::unknown_book(format!("no book registered as {}", book).as_str()));
            }
        };
        if book.isbn == new_isbn {
            return Ok(book.clone());
        }
        if !self.is_isbn_unique(new_isbn) {
            warn!(isbn = new_isbn, "book with such isbn already exists");
            return Err(LibraryError::duplicate_isbn(
                format!("book with isbn {} already exists", new_isbn).as_str()));
        }
        self.books[pos].book.set_isbn(new_isbn);
        let new_key = self.books[pos].book.key();
        self.book_index.remove(book);
        self.book_index.insert(new_key.clone(), pos);
        self.issued_isbns.remove(&book.isbn);
        self.issued_isbns.insert(new_isbn);
        for reader in self.readers.iter_mut() {
            reader.rekey_book(book, new_key.clone());
        }
        self.publish(DomainEvent::updated("book_isbn_reassigned", new_key.to_string().as_str(), book)?)?;
        Ok(new_key)
    }

    fn reader(&self, email: &str) -> Option<&Reader> {
        self.reader_index.get(email).and_then(|pos| self.readers.get(*pos))
    }

    fn book(&self, key: &BookKey) -> Option<&Book> {
        self.book_index.get(key).and_then(|pos| self.books.get(*pos)).map(|e| &e.book)
    }

    fn read_count(&self, key: &BookKey) -> u32 {
        self.book_index.get(key).and_then(|pos| self.books.get(*pos)).map_or(0, |e| e.read_count)
    }

    fn readers(&self) -> Vec<&Reader> {
        self.readers.iter().collect()
    }

    fn books(&self) -> Vec<&Book> {
        self.books.iter().map(|e| &e.book).collect()
    }

    fn most_read_book(&self) -> Option<&Book> {
        let mut best: Option<&BookEntry> = None;
        for entry in self.books.iter() {
            if best.map_or(true, |top| entry.read_count > top.read_count) {
                best = Some(entry);
            }
        }
        best.map(|e| &e.book)
    }

    fn n_most_read_books(&self, n: usize) -> Vec<&Book> {
        self.ranked_books(n, |a, b| b.read_count.cmp(&a.read_count))
    }

    fn n_most_prolific_readers(&self, n: usize) -> Vec<&Reader> {
        let mut readers: Vec<&Reader> = self.readers.iter().collect();
        readers.sort_by(|a, b| b.books_read().cmp(&a.books_read()));
        readers.into_iter().take(n).collect()
    }

    fn highest_rated_book(&self) -> Option<&Book> {
        highest_average(self.books.iter().map(|e| &e.book))
    }

    fn most_positive_reader(&self) -> Option<&Reader> {
        highest_average(self.readers.iter())
    }

    // Total price of the books this reader has read, each counted once.
    fn worth_of_reader(&self, email: &str) -> LibraryResult<f64> {
        let pos = self.reader_position(email)?;
        let reader = &self.readers[pos];
        Ok(reader.books().keys().filter_map(|key| self.book(key)).map(Book::price).sum())
    }

    fn n_most_expensive_books(&self, n: usize) -> Vec<&Book> {
        self.ranked_books(n, |a, b| b.book.price().total_cmp(&a.book.price()))
    }

    fn summary(&self) -> String {
        format!("The catalog contains {} readers and {} books read by them.",
                self.readers.len(), self.books.len())
    }

    fn print_catalog(&self, out: &mut dyn Write) -> LibraryResult<()> {
        for entry in self.books.iter() {
            writeln!(out, "{}", entry.book)?;
        }
        Ok(())
    }

    fn print_users(&self, out: &mut dyn Write) -> LibraryResult<()> {
        for reader in self.readers.iter() {
            writeln!(out, "{}", reader)?;
        }
        Ok(())
    }
}

// Two catalogs are equal when they hold the same readers and the same books
// with the same read counts, in the same order.
impl PartialEq for CatalogServiceImpl {
    fn eq(&self, other: &Self) -> bool {
        self.readers == other.readers && self.books == other.books
    }
}

impl Display for CatalogServiceImpl {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
