// src/presentation/http/response.rs
use crate::domain::errors::EntityKind;
use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{ "status": <code>, "data": <payload> }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub status: u16,
    pub data: T,
}

/// `{ "status": <code>, "message": "<Kind> <action> successfully" }`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub status: u16,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

pub fn ok<T>(data: T) -> Json<DataResponse<T>> {
    Json(DataResponse {
        status: StatusCode::OK.as_u16(),
        data,
    })
}

pub fn created<T>(data: T) -> (StatusCode, Json<DataResponse<T>>) {
    (
        StatusCode::CREATED,
        Json(DataResponse {
            status: StatusCode::CREATED.as_u16(),
            data,
        }),
    )
}

pub fn done(kind: EntityKind, action: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        status: StatusCode::OK.as_u16(),
        message: format!("{kind} {action} successfully"),
    })
}
