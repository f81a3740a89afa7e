//! Handlers for the `/points` resource.
//!
//! Registration arrives as a multipart form (text fields plus an `image`
//! file). Every field is validated before the photo is written to disk or
//! any row is inserted.

use std::collections::HashMap;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use ecopoints_core::error::CoreError;
use ecopoints_core::points::{parse_coordinate, ItemIds};
use ecopoints_core::types::DbId;
use ecopoints_core::uploads::{stored_filename, validate_image};
use ecopoints_db::models::point::{CreatePoint, PointListParams};
use ecopoints_db::repositories::PointRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{ApiMultipart, ApiPath, ApiQuery};
use crate::presentation::{PointDetailView, PointView};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::uploads::{self, PendingUpload};

/// Multipart field carrying the point photo.
const IMAGE_FIELD: &str = "image";

// ---------------------------------------------------------------------------
// Form parsing
// ---------------------------------------------------------------------------

/// Raw registration form as received: trimmed text fields and the photo.
#[derive(Debug, Default)]
struct PointForm {
    fields: HashMap<String, String>,
    image: Option<PendingUpload>,
}

impl PointForm {
    async fn read(multipart: &mut Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD {
                let original_name = field.file_name().unwrap_or("").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.image = Some(PendingUpload {
                    original_name,
                    content_type,
                    data: data.to_vec(),
                });
            } else if !name.is_empty() {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text.trim().to_string());
            }
        }

        Ok(form)
    }

    /// Text value of `name`, or an empty string when absent.
    fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /points?uf=PE&city=Recife&items=1,2
///
/// List points in the given state and city that accept at least one of the
/// requested items.
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PointListParams>,
) -> AppResult<impl IntoResponse> {
    let item_ids = ItemIds::parse(params.items.as_deref().unwrap_or(""))?;

    let points = PointRepo::list_filtered(&state.pool, &params.uf, &params.city, &item_ids).await?;

    tracing::debug!(
        uf = %params.uf,
        city = %params.city,
        requested_items = item_ids.len(),
        matches = points.len(),
        "Filtered points",
    );

    let base_url = &state.config.uploads_base_url;
    let data: Vec<PointView> = points
        .into_iter()
        .map(|point| PointView::new(point, base_url))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /points/{id}
///
/// Get a single point with the titles of the items it accepts.
pub async fn get_by_id(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let found = PointRepo::find_by_id_with_items(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Point", id }))?;
    Ok(Json(DataResponse {
        data: PointDetailView::new(found, &state.config.uploads_base_url),
    }))
}

/// POST /points
///
/// Register a point from a multipart form. The photo is stored only after
/// all fields validate, and removed again if the insert transaction fails.
pub async fn create(
    State(state): State<AppState>,
    ApiMultipart(mut multipart): ApiMultipart,
) -> AppResult<(StatusCode, Json<DataResponse<PointView>>)> {
    let form = PointForm::read(&mut multipart).await?;

    let item_ids = ItemIds::parse(&form.text("items"))?;
    let latitude = parse_coordinate("latitude", &form.text("latitude"))?;
    let longitude = parse_coordinate("longitude", &form.text("longitude"))?;

    let upload = form
        .image
        .as_ref()
        .ok_or_else(|| CoreError::Validation("image is required".to_string()))?;
    validate_image(upload.content_type.as_deref(), upload.data.len())?;
    let image = stored_filename(&upload.original_name);

    let input = CreatePoint {
        name: form.text("name"),
        email: form.text("email"),
        whatsapp: form.text("whatsapp"),
        latitude,
        longitude,
        city: form.text("city"),
        uf: form.text("uf"),
        image,
        item_ids,
    };
    input.validate()?;

    let stored_path = uploads::store(&state.config.uploads_dir, &input.image, &upload.data).await?;

    let point = match PointRepo::create(&state.pool, &input).await {
        Ok(point) => point,
        Err(e) => {
            uploads::discard(&stored_path).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        point_id = point.id,
        uf = %point.uf,
        city = %point.city,
        items = input.item_ids.len(),
        "Collection point registered",
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: PointView::new(point, &state.config.uploads_base_url),
        }),
    ))
}
