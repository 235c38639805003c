mod article;

pub use article::Article;
pub(crate) use article::ArticleList;
