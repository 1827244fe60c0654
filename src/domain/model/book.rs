use serde::{Deserialize, Serialize};

use super::id::BookId;

/// 書籍レコード。永続化されるwire shapeそのもの（フィールド順も含む）。
/// 不変条件を持たない値オブジェクトのためフィールドはpublic。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub price: f64,
    pub language: String,
    pub format: String,
    pub rating: f64,
    pub description: String,
}
