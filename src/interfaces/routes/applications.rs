use actix_web::web;

use crate::handlers::applications;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/applications")
            .service(
                web::resource("")
                    .route(web::get().to(applications::list_applications))
                    .route(web::post().to(applications::create_application))
            )
            .service(
                web::resource("/{application_id}")
                    .route(web::get().to(applications::get_application))
                    .route(web::put().to(applications::update_application))
                    .route(web::delete().to(applications::delete_application))
            )
    );
}
