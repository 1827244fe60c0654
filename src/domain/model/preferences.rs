/// 1クエリ分の検索条件。未指定フィールドは「制約なし」。
///
/// 文字列はbuilder経由でtrim + lowercaseされ、空文字はNoneに落ちる。
/// エンジン側は正規化済みであることを前提に比較する。
#[derive(Debug, Clone)]
pub struct Preferences {
    genre: Option<String>,
    author: Option<String>,
    max_price: f64,
    language: Option<String>,
    format: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            genre: None,
            author: None,
            max_price: f64::INFINITY,
            language: None,
            format: None,
        }
    }
}

impl Preferences {
    /// 制約なしのPreferences。
    pub fn new() -> Self {
        Self::default()
    }

    pub fn genre(mut self, raw: &str) -> Self {
        self.genre = normalize(raw);
        self
    }

    pub fn author(mut self, raw: &str) -> Self {
        self.author = normalize(raw);
        self
    }

    /// 価格上限を直接指定する。
    pub fn max_price(mut self, limit: f64) -> Self {
        self.max_price = limit;
        self
    }

    /// ユーザー入力文字列から価格上限を設定する。
    /// パース不能・空入力は制約なし（+∞）に落とす。エラーにはしない。
    pub fn max_price_input(mut self, raw: &str) -> Self {
        self.max_price = raw.trim().parse().unwrap_or(f64::INFINITY);
        self
    }

    pub fn language(mut self, raw: &str) -> Self {
        self.language = normalize(raw);
        self
    }

    pub fn format(mut self, raw: &str) -> Self {
        self.format = normalize(raw);
        self
    }

    // --- エンジンから参照されるaccessor ---

    pub fn genre_filter(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn author_filter(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn max_price_limit(&self) -> f64 {
        self.max_price
    }

    pub fn language_filter(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn format_filter(&self) -> Option<&str> {
        self.format.as_deref()
    }
}

/// trim + lowercase。空になったら制約なし。
fn normalize(raw: &str) -> Option<String> {
    let cleaned = raw.trim().to_lowercase();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
