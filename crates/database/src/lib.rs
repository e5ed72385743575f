pub mod db;
pub mod entities;
pub mod error;
pub mod repository;
pub mod services;

pub use error::{ServiceError, ServiceResult};
pub use repository::{Page, Repository, SeaOrmRepository};

#[cfg(any(test, feature = "memory"))]
pub use repository::MemoryRepository;
