mod requests;

use crate::{
    error::ServiceError,
    ledger::{Booking, Ledger},
    protocol::{AppointmentItem, MessageResponse},
    registry::Registry,
};
use actix_web::{get, post, web, HttpResponse};

use self::requests::*;

/// Handles shared by every request.
#[derive(Clone)]
pub struct Services {
    pub accounts: Registry,
    pub appointments: Ledger,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(test_api)
        .service(register)
        .service(login)
        .service(appoint)
        .service(search_appoint);
}

/// Malformed bodies answer like any other validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ServiceError::validation(format!("Invalid request body: {}", err)).into()
    })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        ServiceError::validation(format!("Invalid query string: {}", err)).into()
    })
}

#[get("/test")]
async fn test_api() -> HttpResponse {
    HttpResponse::Ok().json(MessageResponse::new("API working"))
}

crate::json_funcs! {
    (register, post, "/register", web::Json<RegisterRequest>, Created),
    (login, post, "/login", web::Json<LoginRequest>, Ok),
    (appoint, post, "/appointments", web::Json<AppointRequest>, Created),
    (search_appoint, get, "/appointments", web::Query<SearchAppointQuery>, Ok),
}

async fn register_impl(
    services: web::Data<Services>,
    info: web::Json<RegisterRequest>,
) -> Result<MessageResponse, ServiceError> {
    let info = info.into_inner();
    tracing::info!(username = %info.username, "register");

    web::block(move || services.accounts.register(&info.username, &info.password)).await?;

    Ok(MessageResponse::new("Registered successfully"))
}

async fn login_impl(
    services: web::Data<Services>,
    info: web::Json<LoginRequest>,
) -> Result<MessageResponse, ServiceError> {
    let info = info.into_inner();
    let username = info.username.clone();

    web::block(move || {
        services
            .accounts
            .authenticate(&info.username, &info.password, &info.role)
    })
    .await
    .map_err(ServiceError::from)
    .map_err(|err| {
        tracing::warn!(username = %username, "login rejected: {}", err);
        err
    })?;

    Ok(MessageResponse::new("Login ok"))
}

async fn appoint_impl(
    services: web::Data<Services>,
    info: web::Json<AppointRequest>,
) -> Result<MessageResponse, ServiceError> {
    let booking = Booking::from(info.into_inner());
    tracing::info!(
        doctor = %booking.doctor,
        date = %booking.date,
        slot = %booking.slot,
        "book appointment"
    );

    web::block(move || services.appointments.book(booking)).await?;

    Ok(MessageResponse::new("Appointment booked"))
}

async fn search_appoint_impl(
    services: web::Data<Services>,
    info: web::Query<SearchAppointQuery>,
) -> Result<Vec<AppointmentItem>, ServiceError> {
    let username = info.into_inner().username;
    let appos =
        web::block(move || services.appointments.list(username.as_deref())).await?;
    Ok(appos)
}
