//! Repository layer for database operations

pub mod chat;
pub mod clock;
pub mod equipment;
pub mod requests;
pub mod teams;
pub mod users;

use sqlx::{Pool, Postgres};

pub use clock::Clock;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub teams: teams::TeamsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub requests: requests::RequestsRepository,
    pub chat: chat::ChatRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self::with_clock(pool, Clock::system())
    }

    /// Create a repository with an explicit clock (used by tests)
    pub fn with_clock(pool: Pool<Postgres>, clock: Clock) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone(), clock.clone()),
            teams: teams::TeamsRepository::new(pool.clone(), clock.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone(), clock.clone()),
            requests: requests::RequestsRepository::new(pool.clone(), clock.clone()),
            chat: chat::ChatRepository::new(pool.clone(), clock),
            pool,
        }
    }
}
