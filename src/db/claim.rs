use crate::db::postgres_service::PostgresService;
use crate::types::claim::RClaimCreate;
use crate::types::error::AppError;
use chrono::Utc;
use entity::claim::{ActiveModel as ClaimActive, Column, Entity as Claim, Model as ClaimModel};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

impl PostgresService {
    /// Files a claim against an existing item. The database assigns the
    /// bigserial id that doubles as the notification cursor.
    pub async fn create_claim(&self, payload: RClaimCreate) -> Result<ClaimModel, AppError> {
        // claims against unknown items are a 404, not an FK error
        self.get_item_by_id(&payload.item_id).await?;

        let now = Utc::now();
        let inserted = Claim::insert(ClaimActive {
            item_id: Set(payload.item_id),
            applicant: Set(payload.applicant),
            applied_on: Set(payload.applied_on),
            remarks: Set(payload.remarks.unwrap_or_default()),
            completed: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        })
        .exec_with_returning(&self.db)
        .await?;

        Ok(inserted)
    }

    pub async fn get_claim_by_id(&self, id: i64) -> Result<ClaimModel, AppError> {
        Ok(Claim::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Claim does not exist".into()))?)
    }

    pub async fn list_claims(&self, item_id: Option<Uuid>) -> Result<Vec<ClaimModel>, AppError> {
        let mut find = Claim::find().order_by_desc(Column::Id);
        if let Some(item_id) = item_id {
            find = find.filter(Column::ItemId.eq(item_id));
        }
        Ok(find.all(&self.db).await?)
    }

    /// Cursor read: everything filed after `after`, oldest first, so a
    /// client that replays from its last seen id misses nothing.
    pub async fn claims_after(&self, after: i64) -> Result<Vec<ClaimModel>, AppError> {
        Ok(Claim::find()
            .filter(Column::Id.gt(after))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?)
    }

    /// Marks a claim returned. Idempotent: completing a completed claim
    /// returns the row as-is, and nothing ever clears the flag.
    pub async fn complete_claim(&self, id: i64) -> Result<ClaimModel, AppError> {
        let current = self.get_claim_by_id(id).await?;
        if current.completed {
            return Ok(current);
        }

        let now = Utc::now();
        let mut model: ClaimActive = current.into();
        model.completed = Set(true);
        model.completed_at = Set(Some(now));
        model.updated_at = Set(now);

        Ok(model.update(&self.db).await?)
    }
}
