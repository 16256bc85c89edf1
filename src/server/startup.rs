use opendal::{services, Operator};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::{Config, StorageConfig},
    error::Error,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the S3 compatible operator photos are uploaded to
pub fn build_storage(config: &StorageConfig) -> Result<Operator, Error> {
    let builder = services::S3::default()
        .bucket(&config.bucket)
        .region(&config.region)
        .endpoint(&config.endpoint)
        .access_key_id(&config.access_key_id)
        .secret_access_key(&config.secret_access_key);

    let storage = Operator::new(builder)?.finish();

    Ok(storage)
}
