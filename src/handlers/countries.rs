// src/handlers/countries.rs
// DOCUMENTATION: Calling code listing for client pickers

use crate::models::COUNTRIES;
use actix_web::{web, HttpResponse, Responder};

/// GET /countries
pub async fn list_countries() -> impl Responder {
    HttpResponse::Ok().json(COUNTRIES)
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/countries", web::get().to(list_countries));
}
