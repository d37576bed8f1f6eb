use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::{encrypt, new_id, new_token, verify};
use chrono::{Duration, Utc};
use entity::session::{ActiveModel as SessionActive, Entity as Session, Model as SessionModel};
use entity::user::Model as UserModel;
use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

fn hash_failed(_: argon2::password_hash::Error) -> AppError {
    AppError::Internal("token hash failed".to_string())
}

impl PostgresService {
    /// Login: mint a session. Returns the session id plus the raw access
    /// and refresh tokens; the row only keeps their hashes.
    pub async fn create_session(
        &self,
        user_id: Uuid,
        max_age_secs: i64,
        refresh_secs: i64,
    ) -> Result<(Uuid, String, String), AppError> {
        let session_id = new_id();
        let access = new_token();
        let refresh = new_token();
        let now = Utc::now();

        Session::insert(SessionActive {
            id: Set(session_id),
            user_id: Set(user_id),
            access_hash: Set(encrypt(&access).map_err(hash_failed)?),
            refresh_hash: Set(encrypt(&refresh).map_err(hash_failed)?),
            access_expires_at: Set(now + Duration::seconds(max_age_secs)),
            refresh_expires_at: Set(now + Duration::seconds(refresh_secs)),
            created_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok((session_id, access, refresh))
    }

    pub async fn get_session(&self, id: &Uuid) -> Result<SessionModel, AppError> {
        Ok(Session::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| sea_orm::DbErr::RecordNotFound("Session does not exist".into()))?)
    }

    /// Resolves an access cookie to its session and staff account. Any
    /// failure collapses to Unauthorized.
    pub async fn verify_access(
        &self,
        session_id: &Uuid,
        secret: &str,
    ) -> Result<(SessionModel, UserModel), AppError> {
        let session = match self.get_session(session_id).await {
            Ok(session) => session,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };

        if session.access_expires_at <= Utc::now() {
            return Err(AppError::Unauthorized);
        }
        if !verify(secret, &session.access_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        let user = self.get_user_by_id(&session.user_id).await?;
        Ok((session, user))
    }

    /// Rotates the access token off a valid refresh token. The refresh
    /// token itself is not rotated; its window bounds the session's life.
    pub async fn refresh_session(
        &self,
        session_id: &Uuid,
        refresh_secret: &str,
        max_age_secs: i64,
    ) -> Result<(SessionModel, String), AppError> {
        let session = match self.get_session(session_id).await {
            Ok(session) => session,
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };

        if session.refresh_expires_at <= Utc::now() {
            return Err(AppError::Unauthorized);
        }
        if !verify(refresh_secret, &session.refresh_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        let access = new_token();
        let mut am: SessionActive = session.into();
        am.access_hash = Set(encrypt(&access).map_err(hash_failed)?);
        am.access_expires_at = Set(Utc::now() + Duration::seconds(max_age_secs));
        let updated = am.update(&self.db).await?;

        Ok((updated, access))
    }

    pub async fn delete_session(&self, id: &Uuid) -> Result<(), AppError> {
        Session::delete_by_id(*id).exec(&self.db).await?;
        Ok(())
    }
}
