use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, Header};
use actix_web::http::Method;
use actix_web::middleware::Next;
use actix_web::{Error, HttpResponse};
use actix_web_httpauth::headers::authorization::{Authorization, Basic};
use chrono::Utc;
use subtle::ConstantTimeEq;

use crate::config::GateConfig;
use crate::utils::webutils::{
    removal_cookie, session_cookie, ACCESS_COOKIE, ATTEMPTS_COOKIE, FRESH_LOGIN_COOKIE,
    LOCK_COOKIE,
};

/// Paths the perimeter never challenges: liveness, the login exchange
/// itself, and the event stream (EventSource cannot attach Basic
/// credentials; those routes still require a session cookie).
const EXEMPT_PREFIXES: &[&str] = &["/health", "/auth/", "/claim/events"];

fn is_exempt(path: &str) -> bool {
    EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
}

fn challenge_response(gate: &GateConfig) -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((
            header::WWW_AUTHENTICATE,
            format!("Basic realm=\"{}\"", gate.realm),
        ))
        .finish()
}

fn locked_response(retry_after_secs: i64) -> HttpResponse {
    HttpResponse::Unauthorized()
        .insert_header((header::RETRY_AFTER, retry_after_secs.max(1).to_string()))
        .finish()
}

/// Basic-Auth perimeter with a cookie-backed failure counter. The
/// counters live client-side; a client that discards its cookies starts
/// over, which is accepted for a perimeter in front of an app that still
/// requires its own login.
pub async fn access_gate(
    gate: GateConfig,
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    if req.method() == Method::OPTIONS || is_exempt(req.path()) {
        return Ok(next.call(req).await?.map_into_boxed_body());
    }

    let (Some(cfg_user), Some(cfg_pass)) = (&gate.user, &gate.pass) else {
        // no credentials configured, gate disabled
        return Ok(next.call(req).await?.map_into_boxed_body());
    };

    // an unexpired lock short-circuits before any credential parsing
    let now = Utc::now().timestamp();
    if let Some(lock) = req.cookie(LOCK_COOKIE) {
        if let Ok(until) = lock.value().parse::<i64>() {
            if until > now {
                return Ok(req.into_response(locked_response(until - now)));
            }
        }
    }

    let Ok(auth) = Authorization::<Basic>::parse(&req) else {
        // missing header, wrong scheme, bad base64 or no separator
        return Ok(req.into_response(challenge_response(&gate)));
    };
    let credentials = auth.into_scheme();

    let user_ok = credentials.user_id().as_bytes().ct_eq(cfg_user.as_bytes());
    let pass_ok = credentials
        .password()
        .map(|p| p.as_bytes())
        .unwrap_or(&[])
        .ct_eq(cfg_pass.as_bytes());

    if !bool::from(user_ok & pass_ok) {
        let attempts = req
            .cookie(ATTEMPTS_COOKIE)
            .and_then(|c| c.value().parse::<u32>().ok())
            .unwrap_or(0)
            + 1;

        log::warn!("gate: failed attempt {}/{}", attempts, gate.max_attempts);

        if attempts >= gate.max_attempts {
            let until = now + gate.lock_secs;
            let mut res = locked_response(gate.lock_secs);
            let _ = res.add_cookie(&session_cookie(
                LOCK_COOKIE,
                until.to_string(),
                gate.lock_secs,
            ));
            let _ = res.add_removal_cookie(&removal_cookie(ATTEMPTS_COOKIE));
            return Ok(req.into_response(res));
        }

        let mut res = challenge_response(&gate);
        let _ = res.add_cookie(&session_cookie(
            ATTEMPTS_COOKIE,
            attempts.to_string(),
            gate.lock_secs,
        ));
        return Ok(req.into_response(res));
    }

    // perimeter passed; the app session is still required past the login page
    let has_session =
        req.cookie(ACCESS_COOKIE).is_some() || req.cookie(FRESH_LOGIN_COOKIE).is_some();
    if !has_session && req.path() != gate.login_path {
        let res = HttpResponse::SeeOther()
            .insert_header((header::LOCATION, gate.login_path.clone()))
            .finish();
        return Ok(req.into_response(res));
    }

    let had_counters =
        req.cookie(ATTEMPTS_COOKIE).is_some() || req.cookie(LOCK_COOKIE).is_some();

    let mut res = next.call(req).await?.map_into_boxed_body();
    if had_counters {
        let _ = res
            .response_mut()
            .add_removal_cookie(&removal_cookie(ATTEMPTS_COOKIE));
        let _ = res
            .response_mut()
            .add_removal_cookie(&removal_cookie(LOCK_COOKIE));
    }
    Ok(res)
}
