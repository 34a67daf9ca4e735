use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter, QueryOrder, SqlErr, TransactionTrait,
};
use tracing::debug;

use crate::active_models::{prelude::*, *};
use crate::{RepositoryError, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct EventRepository {
    db: DatabaseConnection,
}

impl EventRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<event::Model> for EventEntity {
    fn from(value: event::Model) -> Self {
        Self {
            id: value.id,
            description: value.description,
            time: value.time.and_utc(),
        }
    }
}

impl EventRepository {
    /// Inserts a new event inside a transaction and returns it with the
    /// assigned id. A unique-index violation rolls back and surfaces as
    /// [`RepositoryError::Conflict`].
    pub async fn create(
        &self,
        description: String,
        time: DateTime<Utc>,
    ) -> Response<EventEntity> {
        let model = event::ActiveModel {
            id: ActiveValue::not_set(),
            description: ActiveValue::set(description),
            time: ActiveValue::set(time.naive_utc()),
        };

        let txn = self.db.begin().await?;
        let inserted = match model.insert(&txn).await {
            Ok(inserted) => inserted,
            Err(err) => {
                txn.rollback().await?;
                if let Some(SqlErr::UniqueConstraintViolation(_)) =
                    err.sql_err()
                {
                    return Err(RepositoryError::Conflict);
                }
                return Err(err.into());
            }
        };
        txn.commit().await?;

        debug!(id = inserted.id, "event created");

        Ok(inserted.into())
    }

    pub async fn find_by_id(&self, id: i32) -> Response<Option<EventEntity>> {
        let found = Event::find_by_id(id).one(&self.db).await?;

        Ok(found.map(EventEntity::from))
    }

    /// Events with `from <= time <= to`, both bounds inclusive; an omitted
    /// bound leaves that side unconstrained. Range filters do not imply an
    /// ordering, so ascending id (creation order) is requested explicitly.
    pub async fn find_in_range(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Response<Vec<EventEntity>> {
        let mut query = Event::find();
        if let Some(from) = from {
            query = query.filter(event::Column::Time.gte(from.naive_utc()));
        }
        if let Some(to) = to {
            query = query.filter(event::Column::Time.lte(to.naive_utc()));
        }

        let events = query
            .order_by_asc(event::Column::Id)
            .all(&self.db)
            .await?;

        Ok(events.into_iter().map(EventEntity::from).collect())
    }

    /// Removes the event if present. `false` means nothing matched; no
    /// side effects in that case.
    pub async fn delete_by_id(&self, id: i32) -> Response<bool> {
        let txn = self.db.begin().await?;
        let result = Event::delete_by_id(id).exec(&txn).await?;
        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }
}
