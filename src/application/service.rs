use crate::domain::model::book::Book;
use crate::domain::model::catalog::Catalog;
use crate::domain::model::id::BookId;
use crate::domain::model::preferences::Preferences;
use crate::domain::recommend::recommend;
use crate::domain::repository::KeyValueStore;

use super::error::AppError;
use super::wishlist::WishlistStore;

/// Presentation層が保持するfacade。カタログとWishlistストアを
/// 明示的に注入する（ambientなグローバルは置かない）。
pub struct Recommender<S: KeyValueStore> {
    catalog: Catalog,
    wishlist: WishlistStore<S>,
}

impl<S: KeyValueStore> Recommender<S> {
    pub fn new(catalog: Catalog, store: S) -> Self {
        Self {
            catalog,
            wishlist: WishlistStore::new(store),
        }
    }

    /// 組み込みカタログで構築するショートカット。
    pub fn with_builtin_catalog(store: S) -> Self {
        Self::new(Catalog::builtin(), store)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 条件に合う書籍をrating降順で返す。先頭がbest match。
    pub fn recommend(&self, prefs: &Preferences) -> Vec<Book> {
        recommend(self.catalog.books(), prefs)
    }

    /// 現在のWishlist（表示用の読み取りビュー）。
    pub fn wishlist(&self) -> Vec<Book> {
        self.wishlist.get_all()
    }

    /// idで指定した書籍をWishlistへ追加する。
    /// カタログに存在しないidはno-op（エラーにしない）。
    pub fn add_to_wishlist(&self, id: BookId) -> Result<Vec<Book>, AppError> {
        match self.catalog.find(id) {
            Some(book) => self.wishlist.add_if_absent(book),
            None => Ok(self.wishlist.get_all()),
        }
    }
}
