use super::book::Book;
use super::id::BookId;

/// 不変の書籍カタログ。構築時にgenre/language/formatをlowercaseへ
/// 正規化し、以降の比較は単純な等値で済むようにする。
/// 実行時の変更APIは持たない。
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new(mut books: Vec<Book>) -> Self {
        for book in &mut books {
            book.genre = book.genre.to_lowercase();
            book.language = book.language.to_lowercase();
            book.format = book.format.to_lowercase();
        }
        Self { books }
    }

    /// 組み込みの4冊カタログ。
    pub fn builtin() -> Self {
        Self::new(vec![
            Book {
                id: BookId::new(1),
                title: "Harry Potter and the Philosopher's Stone".into(),
                author: "J.K. Rowling".into(),
                genre: "fantasy".into(),
                price: 15.99,
                language: "english".into(),
                format: "hardcover".into(),
                rating: 4.8,
                description: "A magical adventure begins at Hogwarts.".into(),
            },
            Book {
                id: BookId::new(2),
                title: "The Da Vinci Code".into(),
                author: "Dan Brown".into(),
                genre: "mystery".into(),
                price: 12.50,
                language: "english".into(),
                format: "paperback".into(),
                rating: 4.5,
                description: "A thrilling mystery uncovering hidden secrets.".into(),
            },
            Book {
                id: BookId::new(3),
                title: "Sapiens: A Brief History of Humankind".into(),
                author: "Yuval Noah Harari".into(),
                genre: "non-fiction".into(),
                price: 18.00,
                language: "english".into(),
                format: "paperback".into(),
                rating: 4.7,
                description: "An exploration of human history.".into(),
            },
            Book {
                id: BookId::new(4),
                title: "Don Quijote de la Mancha".into(),
                author: "Miguel de Cervantes".into(),
                genre: "fiction".into(),
                price: 20.00,
                language: "spanish".into(),
                format: "hardcover".into(),
                rating: 4.9,
                description: "A timeless Spanish classic.".into(),
            },
        ])
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn find(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
