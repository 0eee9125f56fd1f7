pub mod builder;

pub use self::builder::SiteBuilder;
