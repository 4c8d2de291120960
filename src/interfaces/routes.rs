use actix_web::web;

mod applications;
mod json_error;
mod system;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(system::config_routes);

    cfg.service(
        web::scope("/api/v1")
            .configure(applications::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
