use crate::domain::model::book::Book;
use crate::domain::model::preferences::Preferences;

/// 条件に合う書籍をrating降順で返す純粋関数。
///
/// 5条件（genre / author / price / language / format）のANDで絞り込み、
/// 安定ソートで並べる。同ratingはカタログ順を保つ。
/// カタログは変更せず、常に新しいVecを返す。空結果は正常値。
pub fn recommend(catalog: &[Book], prefs: &Preferences) -> Vec<Book> {
    let mut hits: Vec<Book> = catalog
        .iter()
        .filter(|book| matches(book, prefs))
        .cloned()
        .collect();
    hits.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    hits
}

/// 全条件のAND。未指定の条件は常にtrue。
fn matches(book: &Book, prefs: &Preferences) -> bool {
    let genre_ok = prefs.genre_filter().is_none_or(|g| book.genre == g);
    let author_ok = prefs
        .author_filter()
        .is_none_or(|a| book.author.to_lowercase().contains(a));
    let price_ok = book.price <= prefs.max_price_limit();
    let language_ok = prefs.language_filter().is_none_or(|l| book.language == l);
    let format_ok = prefs.format_filter().is_none_or(|f| book.format == f);

    genre_ok && author_ok && price_ok && language_ok && format_ok
}
