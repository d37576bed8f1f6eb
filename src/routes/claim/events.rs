use actix_web::web::Bytes;
use actix_web::{get, web, HttpResponse};
use futures::stream::{self, StreamExt};
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::BroadcastStream;

use crate::db::postgres_service::PostgresService;
use crate::notify::ClaimNotifier;
use crate::types::claim::CursorQuery;
use crate::types::error::AppError;
use crate::utils::webutils::CurrentUser;

fn sse_frame(claim: &entity::claim::Model) -> Bytes {
    let json = serde_json::to_string(claim).unwrap_or_else(|_| "{}".to_string());
    Bytes::from(format!("id: {}\nevent: claim\ndata: {}\n\n", claim.id, json))
}

/// Live new-claim feed. Replays everything past the caller's cursor, then
/// relays the in-process broadcast. A claim filed while the backlog query
/// runs can show up twice; clients dedup by id (at-least-once contract).
#[get("/events")]
async fn events(
    _user: CurrentUser,
    db: web::Data<Arc<PostgresService>>,
    notifier: web::Data<ClaimNotifier>,
    query: web::Query<CursorQuery>,
) -> Result<HttpResponse, AppError> {
    // subscribe before the backlog read so nothing falls in between
    let rx = notifier.subscribe();
    let backlog = db.claims_after(query.after.unwrap_or(0)).await?;

    log::info!(
        "sse: client connected ({} backlog rows, {} clients)",
        backlog.len(),
        notifier.client_count()
    );

    let replay = stream::iter(
        backlog
            .into_iter()
            .map(|claim| Ok::<_, Infallible>(sse_frame(&claim))),
    );
    let live = BroadcastStream::new(rx).filter_map(|ev| async move {
        match ev {
            Ok(claim) => Some(Ok::<_, Infallible>(sse_frame(&claim))),
            // lagged receiver: drop the error, the client re-syncs via its cursor
            Err(_) => None,
        }
    });

    Ok(HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(replay.chain(live)))
}
