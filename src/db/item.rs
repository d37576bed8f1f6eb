use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::types::item::{ItemListQuery, RItemCreate, RItemUpdate};
use crate::utils::token;
use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use entity::item::{ActiveModel as ItemActive, Column, Entity as Item, Model as ItemModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

/// UTC instant at which the given local calendar day starts. Registration
/// dates are entered in the desk's local timezone, rows are stored UTC.
pub fn local_day_start(date: NaiveDate, tz_offset_hours: i32) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc() - Duration::hours(tz_offset_hours as i64)
}

impl PostgresService {
    pub async fn create_item(&self, payload: RItemCreate) -> Result<ItemModel, AppError> {
        let now = Utc::now();

        let inserted = Item::insert(ItemActive {
            id: Set(token::new_id()),
            name: Set(payload.name),
            brand: Set(payload.brand),
            color: Set(payload.color),
            feature: Set(payload.feature),
            place: Set(payload.place),
            category: Set(payload.category),
            image_ref: Set(payload.image_ref),
            signature_ref: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec_with_returning(&self.db)
        .await?;

        Ok(inserted)
    }

    pub async fn get_item_by_id(&self, id: &Uuid) -> Result<ItemModel, AppError> {
        Ok(Item::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Item does not exist".into()))?)
    }

    /// Newest first. `q` is a substring match over the descriptive
    /// columns; the date range is inclusive in desk-local days.
    pub async fn list_items(
        &self,
        query: &ItemListQuery,
        tz_offset_hours: i32,
    ) -> Result<Vec<ItemModel>, AppError> {
        let mut cond = Condition::all();

        if let Some(q) = query.q.as_deref().filter(|q| !q.trim().is_empty()) {
            cond = cond.add(
                Condition::any()
                    .add(Column::Name.contains(q))
                    .add(Column::Brand.contains(q))
                    .add(Column::Color.contains(q))
                    .add(Column::Feature.contains(q))
                    .add(Column::Place.contains(q))
                    .add(Column::Category.contains(q)),
            );
        }
        if let Some(from) = query.from {
            cond = cond.add(Column::CreatedAt.gte(local_day_start(from, tz_offset_hours)));
        }
        if let Some(to) = query.to {
            let end = local_day_start(to, tz_offset_hours) + Duration::days(1);
            cond = cond.add(Column::CreatedAt.lt(end));
        }

        Ok(Item::find()
            .filter(cond)
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await?)
    }

    pub async fn update_item(&self, patch: RItemUpdate) -> Result<ItemModel, AppError> {
        let current = self.get_item_by_id(&patch.id).await?;
        let mut model: ItemActive = current.into();

        patch.name.map(|v| model.name = Set(v));
        patch.brand.map(|v| model.brand = Set(v));
        patch.color.map(|v| model.color = Set(v));
        patch.feature.map(|v| model.feature = Set(v));
        patch.place.map(|v| model.place = Set(v));
        patch.category.map(|v| model.category = Set(v));
        patch.image_ref.map(|v| model.image_ref = Set(v));
        model.updated_at = Set(Utc::now());

        Ok(model.update(&self.db).await?)
    }

    /// Records the return signature captured at handover.
    pub async fn set_item_signature(
        &self,
        id: &Uuid,
        signature_ref: String,
    ) -> Result<ItemModel, AppError> {
        let mut model: ItemActive = self.get_item_by_id(id).await?.into();
        model.signature_ref = Set(Some(signature_ref));
        model.updated_at = Set(Utc::now());
        Ok(model.update(&self.db).await?)
    }
}
