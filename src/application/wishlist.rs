use crate::domain::model::book::Book;
use crate::domain::repository::KeyValueStore;

use super::error::AppError;

/// Wishlistの既定の保存キー。
pub const WISHLIST_KEY: &str = "bookWishlist";

/// 単一キー配下にJSON配列としてWishlistを永続化するストア。
/// 読みはfail-open、書きはエラーを呼び出し側へ返す。
/// キャッシュは持たず、毎回storeから読み直す。
pub struct WishlistStore<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> WishlistStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, WISHLIST_KEY)
    }

    /// テストや並行利用のためにキー名を差し替える。
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 保存済みWishlistを読む。キー欠落・破損JSON・読み取り失敗は
    /// すべて空リスト扱い（fail-open）。エラーにはしない。
    pub fn get_all(&self) -> Vec<Book> {
        match self.store.get(&self.key) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            Ok(None) | Err(_) => Vec::new(),
        }
    }

    /// リスト全体を書き戻す。既存値は丸ごと置き換え。
    pub fn save_all(&self, entries: &[Book]) -> Result<(), AppError> {
        let json = serde_json::to_string(entries)?;
        self.store
            .set(&self.key, &json)
            .map_err(|e| AppError::Storage(Box::new(e)))
    }

    /// 同一idが未登録なら末尾に追加して永続化する。
    /// 登録済みなら何もせず現在のリストを返す（書き込みも発生しない）。
    pub fn add_if_absent(&self, book: &Book) -> Result<Vec<Book>, AppError> {
        let mut entries = self.get_all();
        if entries.iter().any(|e| e.id == book.id) {
            return Ok(entries);
        }
        entries.push(book.clone());
        self.save_all(&entries)?;
        Ok(entries)
    }
}
