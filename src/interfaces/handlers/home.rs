use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Job application tracker API",
        "status": "Ok",
        "version": env!("CARGO_PKG_VERSION"),
        "applications": "/api/v1/applications"
    }))
}
