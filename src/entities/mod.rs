pub mod article;
pub mod category;
pub mod date;
pub mod ids;
pub mod user;

pub use article::{Article, ArticlePreview};
pub use category::Category;
pub use ids::{ArticleId, CategoryId, UserId};
pub use user::User;
