pub mod cart;
pub mod user;

pub use cart::PostgresCartRepository;
pub use user::PostgresUserRepository;
