use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::errors::{AppError, AppResult};
use crate::models::{category, task};

#[derive(Clone)]
pub struct CategoryService {
    db: DatabaseConnection,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> AppResult<category::Model> {
        let category = category::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        Ok(category.insert(&self.db).await?)
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<category::Model> {
        self.find_by_id(id).await?.ok_or(AppError::CategoryNotFound)
    }

    pub async fn list_all(&self) -> AppResult<Vec<category::Model>> {
        Ok(category::Entity::find().all(&self.db).await?)
    }

    // Deletes a category. Tasks referencing it keep existing with their
    // category cleared, never a cascade.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        task::Entity::update_many()
            .col_expr(task::Column::CategoryId, Expr::value(Option::<i64>::None))
            .filter(task::Column::CategoryId.eq(id))
            .exec(&self.db)
            .await?;

        category::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }

    pub(crate) async fn find_by_id(&self, id: i64) -> AppResult<Option<category::Model>> {
        Ok(category::Entity::find_by_id(id).one(&self.db).await?)
    }
}
