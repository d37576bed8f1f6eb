use crate::utils::webutils::validate_admin_token;
use actix_web::web;
use actix_web_httpauth::middleware::HttpAuthentication;

pub mod analyze;
pub mod auth;
pub mod claim;
pub mod health;
pub mod item;
pub mod user;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = HttpAuthentication::bearer(validate_admin_token);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/user").service(
            web::scope("/create")
                .service(user::create::create)
                .wrap(admin_auth),
        ),
    );
    cfg.service(
        web::scope("/auth")
            .service(auth::login::login)
            .service(auth::refresh::refresh)
            .service(auth::session::session)
            .service(auth::logout::logout),
    );
    cfg.service(
        web::scope("/item")
            .service(item::create::create)
            .service(item::list::list)
            .service(item::update::update)
            // path-param route goes last so it cannot shadow the others
            .service(item::get::get_item),
    );
    cfg.service(
        web::scope("/claim")
            .service(claim::create::create)
            .service(claim::list::list)
            .service(claim::updates::updates)
            .service(claim::events::events)
            .service(claim::complete::complete),
    );
    cfg.service(web::scope("/analyze").service(analyze::image::image));
}
