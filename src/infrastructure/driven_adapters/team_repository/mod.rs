//! Team Repository Implementations

mod postgres;

pub use postgres::PostgresTeamRepository;
