// connexion BD + création du schéma

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, EntityTrait, Schema,
};

use crate::models::{bid, curve_point, rating, rule_name, trade, users};

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(database_url);
    options.sqlx_logging(false);

    // Une base SQLite en mémoire n'existe que sur sa connexion
    if database_url.contains(":memory:") {
        options.max_connections(1).min_connections(1);
    }

    Database::connect(options).await
}

/// Crée les tables manquantes à partir des entités
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    create_table(db, bid::Entity).await?;
    create_table(db, curve_point::Entity).await?;
    create_table(db, rating::Entity).await?;
    create_table(db, rule_name::Entity).await?;
    create_table(db, trade::Entity).await?;
    create_table(db, users::Entity).await?;
    Ok(())
}

async fn create_table<E: EntityTrait>(db: &DatabaseConnection, entity: E) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(entity);
    statement.if_not_exists();

    db.execute(backend.build(&statement)).await?;
    tracing::debug!("Table ready: {}", entity.table_name());
    Ok(())
}
