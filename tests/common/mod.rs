//! Shared test harness for integration tests.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use bookrec::domain::model::book::Book;
use bookrec::domain::model::catalog::Catalog;
use bookrec::domain::model::id::BookId;
use bookrec::domain::repository::KeyValueStore;

// =============================================================================
// InMemoryStore — テスト用KeyValueStore
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("in-memory store error")]
pub struct InMemoryError;

/// ファイルI/O不要のインメモリストア。
#[derive(Default)]
pub struct InMemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 生のpayloadを覗く（snapshotテスト用）。
    pub fn raw(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    /// 生のpayloadを直接仕込む（破損データのテスト用）。
    pub fn seed(&self, key: &str, value: &str) {
        self.map.borrow_mut().insert(key.into(), value.into());
    }
}

impl KeyValueStore for InMemoryStore {
    type Error = InMemoryError;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        self.map.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

// =============================================================================
// FlakyStore — 書き込み失敗を注入できるストア
// =============================================================================

#[derive(Debug, thiserror::Error)]
#[error("storage unavailable")]
pub struct StorageUnavailable;

/// フラグONの間setが失敗するストア。既存値はそのまま残る。
pub struct FlakyStore {
    map: RefCell<HashMap<String, String>>,
    fail_writes: Rc<Cell<bool>>,
}

impl FlakyStore {
    /// ストア本体と、書き込み失敗を切り替えるハンドルを返す。
    pub fn new() -> (Self, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(false));
        let store = Self {
            map: RefCell::new(HashMap::new()),
            fail_writes: Rc::clone(&flag),
        };
        (store, flag)
    }
}

impl KeyValueStore for FlakyStore {
    type Error = StorageUnavailable;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        Ok(self.map.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.fail_writes.get() {
            return Err(StorageUnavailable);
        }
        self.map.borrow_mut().insert(key.into(), value.into());
        Ok(())
    }
}

// =============================================================================
// Fixtures
// =============================================================================

/// 組み込みカタログのn冊目（id=n）。
pub fn builtin_book(id: u32) -> Book {
    Catalog::builtin()
        .find(BookId::new(id))
        .cloned()
        .unwrap_or_else(|| panic!("no builtin book with id {id}"))
}

// =============================================================================
// Assertion helpers
// =============================================================================

/// 結果がErrで、メッセージに指定文字列を含むことをassert。
pub fn assert_error_contains<T: std::fmt::Debug>(
    result: Result<T, impl std::fmt::Display>,
    expected: &str,
) {
    match result {
        Err(e) => {
            let msg = e.to_string();
            assert!(
                msg.contains(expected),
                "Expected error containing '{expected}', got: '{msg}'"
            );
        }
        Ok(v) => panic!("Expected error containing '{expected}', got Ok({v:?})"),
    }
}
