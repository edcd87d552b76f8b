use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Schema};

use crate::models::{category, task, user};

pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    Database::connect(url).await
}

// Creates the tables from the entity definitions if they do not exist yet.
pub async fn setup_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(user::Entity),
        schema.create_table_from_entity(category::Entity),
        schema.create_table_from_entity(task::Entity),
    ];
    for stmt in statements.iter_mut() {
        db.execute(backend.build(stmt.if_not_exists())).await?;
    }

    Ok(())
}
