use actix_multipart::form::MultipartForm;
use actix_multipart::form::tempfile::TempFile;
use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::auth::AuthenticatedUser;
use crate::forms::import::UploadFeedForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::history::{self, HistoryQuery};
use crate::services::import;
use crate::services::undo::{self, UndoTarget};

/// Multipart payload carrying the product feed.
#[derive(Debug, MultipartForm)]
pub struct ImportUploadForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

/// Optional scoping for an undo request.
#[derive(Debug, Default, Deserialize)]
pub struct UndoForm {
    pub product_id: Option<i32>,
    pub variant_id: Option<i32>,
}

#[post("/products/import")]
pub async fn import_products(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<ImportUploadForm>,
) -> impl Responder {
    let bytes = match std::fs::read(form.csv.file.path()) {
        Ok(bytes) => bytes,
        Err(err) => {
            log::error!("Failed to read uploaded feed: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let upload = UploadFeedForm::new(form.csv.file_name.clone(), bytes);
    match import::import_feed(repo.get_ref(), &user, upload) {
        Ok(summary) => HttpResponse::Ok().json(summary),
        Err(err) => error_response(err),
    }
}

#[post("/imports/{import_id}/undo")]
pub async fn undo_import(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    path: web::Path<String>,
    form: Option<web::Json<UndoForm>>,
) -> impl Responder {
    let import_id = path.into_inner();
    let form = form.map(web::Json::into_inner).unwrap_or_default();

    let target = match (form.product_id, form.variant_id) {
        (Some(_), Some(_)) => {
            return HttpResponse::BadRequest()
                .json(json!({ "error": "specify either product_id or variant_id, not both" }));
        }
        (Some(product_id), None) => UndoTarget::Product(product_id),
        (None, Some(variant_id)) => UndoTarget::Variant(variant_id),
        (None, None) => UndoTarget::All,
    };

    match undo::undo_import(repo.get_ref(), &user, &import_id, target) {
        Ok(()) => HttpResponse::Ok().finish(),
        Err(err) => error_response(err),
    }
}

#[get("/imports")]
pub async fn list_imports(
    params: web::Query<HistoryQuery>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match history::list_import_history(repo.get_ref(), &user, params.into_inner()) {
        Ok(data) => HttpResponse::Ok().json(data),
        Err(err) => error_response(err),
    }
}
