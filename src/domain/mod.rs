pub mod article_path;
pub mod entry;

pub use self::article_path::ArticlePath;
pub use self::entry::{Entry, ImageRef};
