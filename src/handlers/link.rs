use actix_web::{http::header::LOCATION, web, HttpResponse, Responder};
use log::{debug, info};

use crate::{
    models::{LinkQueryParams, ShortenRequest},
    services::LinkService,
    types::Result,
};

/// Shorten URL route handler
pub async fn shorten_handler(
    dto: web::Json<ShortenRequest>,
    service: web::Data<LinkService>,
) -> Result<impl Responder> {
    let response = service.shorten(dto.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Redirect route handler
pub async fn redirect_handler(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> Result<impl Responder> {
    let code = path.into_inner();
    debug!("Redirect requested for code: {}", code);

    // Resolution counts the click itself; a counting failure never
    // reaches this point
    let record = service.resolve(&code).await?;

    info!("Redirecting '{}' to '{}'", code, record.target);

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, record.target))
        .finish())
}

/// Link detail route handler; returns the record with its click count
pub async fn get_link_handler(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> Result<impl Responder> {
    let record = service.get_link(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(record))
}

/// List links route handler with optional substring search
pub async fn list_handler(
    query: web::Query<LinkQueryParams>,
    service: web::Data<LinkService>,
) -> Result<impl Responder> {
    let records = service.list(&query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(records))
}

/// Aggregate stats route handler
pub async fn stats_handler(service: web::Data<LinkService>) -> Result<impl Responder> {
    let stats = service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}

/// Delete link route handler
pub async fn delete_handler(
    path: web::Path<String>,
    service: web::Data<LinkService>,
) -> Result<impl Responder> {
    service.delete(&path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
