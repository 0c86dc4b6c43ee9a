pub mod url;

pub use url::Entity as UrlEntity;
