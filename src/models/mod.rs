pub mod article;
pub mod config;
pub mod particle;

pub use article::Article;
pub use config::{AppConfig, ArticleConfig, FetchConfig, ImageConfig};
pub use particle::{ContentItem, ParticleDocument, PARTICLE_FORMAT};
