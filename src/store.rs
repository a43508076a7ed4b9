use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::{MovieStatus, NewMovie},
};

const DEFAULT_RATING: &str = "0";
const DEFAULT_REVIEW: &str = "0";

#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(DEFAULT_RATING.to_string()),
            review: Set(DEFAULT_REVIEW.to_string()),
            ranking: Set(0),
            img_url: Set(new.img_url),
            status: Set(MovieStatus::Provisional.as_code()),
            added_at: Set(now_sec()),
        };

        let res = movie::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Overwrites rating and review and marks the movie rated. `None` when no
    /// movie has this id.
    pub async fn update(
        &self,
        id: i32,
        rating: &str,
        review: &str,
    ) -> AppResult<Option<movie::Model>> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        model.rating = Set(rating.to_string());
        model.review = Set(review.to_string());
        model.status = Set(MovieStatus::Rated.as_code());

        Ok(Some(model.update(&self.db).await?))
    }

    /// Returns `false` when nothing was deleted.
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Every movie in ascending rating order. Ratings are free text, so the
    /// order is lexicographic: "10" comes before "9".
    pub async fn list_by_rating(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find()
            .order_by_asc(movie::Column::Rating)
            .order_by_asc(movie::Column::Id)
            .all(&self.db)
            .await?)
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
