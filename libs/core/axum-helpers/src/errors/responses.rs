//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Failed to write data: permission denied",
            "status": 500,
            "timestamp": "2024-05-01T12:00:00Z"
        }
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Name is required and must be a non-empty string",
            "status": 400,
            "timestamp": "2024-05-01T12:00:00Z",
            "details": {
                "name": [{
                    "code": "required",
                    "message": "Name is required and must be a non-empty string",
                    "params": {}
                }]
            }
        }
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path or query argument",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Invalid item ID",
            "status": 400,
            "timestamp": "2024-05-01T12:00:00Z"
        }
    })
)]
pub struct BadRequestArgumentResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": {
            "message": "Item not found",
            "status": 404,
            "timestamp": "2024-05-01T12:00:00Z"
        }
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);
