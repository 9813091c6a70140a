//! Car Repository Implementations

mod postgres;

pub use postgres::PostgresCarRepository;
