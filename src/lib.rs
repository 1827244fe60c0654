//! bookrec — 好みに応じた書籍レコメンドと永続Wishlistのコア。
//!
//! Presentation層（UI）は外部コラボレータ。このcrateは
//! カタログ・レコメンドエンジン・Wishlist永続化のみを提供する。

pub mod application;
pub mod domain;
pub mod infra;
