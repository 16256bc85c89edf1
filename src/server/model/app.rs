use opendal::Operator;
use sea_orm::DatabaseConnection;

/// Shared state handed to every HTTP handler.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Object storage operator photos are written to.
    pub storage: Operator,
    /// Public base URL objects in `storage` are served from.
    pub public_url: String,
}

impl From<(DatabaseConnection, Operator, String)> for AppState {
    fn from((db, storage, public_url): (DatabaseConnection, Operator, String)) -> Self {
        Self {
            db,
            storage,
            public_url,
        }
    }
}
