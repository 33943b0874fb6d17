use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde_json::json;
use uuid::Uuid;

use crate::AppState;
use crate::error::BookingError;
use crate::handlers::appointments::{book, list_all, remove};
use crate::models::appointment::BookingRequest;

#[post("")]
async fn create(state: web::Data<AppState>, body: web::Json<BookingRequest>) -> impl Responder {
    match book(&state, body.into_inner()).await {
        Ok(appointment) => HttpResponse::Created().json(appointment),
        Err(BookingError::Validation(errors)) => {
            HttpResponse::BadRequest().json(json!({ "errors": errors }))
        }
        Err(BookingError::Submission(e)) => {
            tracing::error!("appointment insert failed: {}", e);
            HttpResponse::ServiceUnavailable()
                .body("Booking failed. Please try again or call us directly.")
        }
    }
}

#[get("/all")]
async fn all(state: web::Data<AppState>) -> impl Responder {
    match list_all(&state).await {
        Ok(appointments) => HttpResponse::Ok().json(appointments),
        Err(e) => {
            tracing::error!("failed to list appointments: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error: {}", e))
        }
    }
}

#[delete("/{id}")]
async fn destroy(state: web::Data<AppState>, path: web::Path<Uuid>) -> impl Responder {
    match remove(&state, path.into_inner()).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().body("No such appointment."),
        Err(e) => {
            tracing::error!("failed to delete appointment: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error: {}", e))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(create).service(all).service(destroy);
}
