use serde::{Deserialize, Serialize};
use crate::books::model::Book;
use crate::core::domain::Rated;
use crate::core::library::BookCategory;

// BookDto is the report view of a registered book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub isbn: u64,
    pub price: f64,
    pub category: BookCategory,
    pub description: String,
    pub average_rating: Option<f64>,
    pub read_count: u32,
}

impl BookDto {
    pub fn from_book(book: &Book, read_count: u32) -> Self {
        Self {
            title: book.title().to_string(),
            isbn: book.isbn(),
            price: book.price(),
            category: book.category(),
            description: book.to_string(),
            average_rating: book.average_rating(),
            read_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::model::Book;
    use crate::core::library::BookCategory;

    #[test]
    fn test_should_build_book_dto() {
        let mut book = Book::fiction("Dune", "Herbert", 2, 7.5);
        let _ = book.add_rating(Some(3));
        let dto = BookDto::from_book(&book, 4);
        assert_eq!("Dune", dto.title.as_str());
        assert_eq!(BookCategory::Fiction, dto.category);
        assert_eq!("Dune by Herbert costs 7.5", dto.description.as_str());
        assert_eq!(Some(3.0), dto.average_rating);
        assert_eq!(4, dto.read_count);
    }
}
