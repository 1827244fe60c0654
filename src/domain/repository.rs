/// 永続化の抽象。Infra層が実装する。
///
/// 単一キーのkey-value storeで十分なため、get/setのみ。
/// テストではin-memory実装、本番ではファイル実装に差し替える。
pub trait KeyValueStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// キーが存在しなければOk(None)。
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// 既存値を丸ごと置き換える。失敗しても既存値を壊してはならない。
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

// 呼び出し側がストアを手元に残したまま注入できるよう、参照にも実装する。
impl<S: KeyValueStore> KeyValueStore for &S {
    type Error = S::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
}
