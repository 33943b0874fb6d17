use actix_web::{HttpResponse, Responder, get, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::AppState;
use crate::handlers::availability::{day_options, open_slots};
use crate::models::availability::DayChoice;
use crate::models::serde_helpers::format_wall_clock;

#[derive(Deserialize)]
struct SlotsQuery {
    date: NaiveDate,
    day_of_week: u8,
}

#[derive(Serialize)]
struct SlotsResponse {
    date: NaiveDate,
    slots: Vec<String>,
}

#[get("/days")]
async fn days(state: web::Data<AppState>) -> impl Responder {
    match day_options(&state).await {
        Ok(days) => HttpResponse::Ok().json(days),
        Err(e) => {
            tracing::error!("failed to load availability windows: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error: {}", e))
        }
    }
}

#[get("/slots")]
async fn slots(state: web::Data<AppState>, query: web::Query<SlotsQuery>) -> impl Responder {
    let query = query.into_inner();
    let choice = DayChoice {
        date: query.date,
        day_of_week: query.day_of_week,
    };

    match open_slots(&state, choice).await {
        Ok(open) => HttpResponse::Ok().json(SlotsResponse {
            date: choice.date,
            slots: open.iter().map(format_wall_clock).collect(),
        }),
        Err(e) => {
            tracing::error!("failed to compute open slots: {}", e);
            HttpResponse::ServiceUnavailable().body(format!("Error: {}", e))
        }
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(days).service(slots);
}
