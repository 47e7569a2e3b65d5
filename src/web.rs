use actix_multipart::Multipart;
use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{get, middleware, post, web, App, HttpResponse, HttpServer, ResponseError};
use futures_util::TryStreamExt;

use crate::config::Config;
use crate::data::filter::apply_investing_criteria;
use crate::data::loader::parse_csv;
use crate::data::render::to_html;
use crate::error::ScreenError;

const UPLOAD_FORM: &str = include_str!("../templates/index.html");

/// Name of the multipart field carrying the CSV.
pub const FILE_FIELD: &str = "file";

/// Read-only per-app settings shared with the handlers.
#[derive(Debug, Clone)]
pub struct ScreenerState {
    pub max_upload_bytes: usize,
}

impl From<&Config> for ScreenerState {
    fn from(cfg: &Config) -> Self {
        Self {
            max_upload_bytes: cfg.max_upload_bytes,
        }
    }
}

impl ResponseError for ScreenError {
    fn status_code(&self) -> StatusCode {
        if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ScreenError::Upload(msg) => msg.clone(),
            ScreenError::Parse(msg) => format!("Error reading CSV file: {msg}"),
            other => format!("Internal Server Error: {other}"),
        };
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(body)
    }
}

/// An uploaded file: its client-side name and full contents.
struct Upload {
    filename: String,
    bytes: Vec<u8>,
}

/// Pull the `file` part out of the form, draining every other part.
async fn read_upload(mut payload: Multipart, limit: usize) -> Result<Option<Upload>, ScreenError> {
    let mut upload = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| ScreenError::Upload(format!("No file part ({e})")))?
    {
        let (name, filename) = match field.content_disposition() {
            Some(cd) => (
                cd.get_name().map(str::to_string),
                cd.get_filename().map(str::to_string),
            ),
            None => (None, None),
        };

        // Only parts sent as files count; a plain `file` text field does not.
        let wanted = upload.is_none() && name.as_deref() == Some(FILE_FIELD) && filename.is_some();
        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| ScreenError::Upload(format!("Upload interrupted: {e}")))?
        {
            if !wanted {
                continue;
            }
            if bytes.len() + chunk.len() > limit {
                return Err(ScreenError::Upload(format!(
                    "Uploaded file exceeds the {limit} byte limit"
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if wanted {
            upload = Some(Upload {
                filename: filename.unwrap_or_default(),
                bytes,
            });
        }
    }

    Ok(upload)
}

#[get("/")]
async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(UPLOAD_FORM)
}

#[post("/")]
async fn screen(
    state: web::Data<ScreenerState>,
    payload: Multipart,
) -> Result<HttpResponse, ScreenError> {
    let result = screen_upload(payload, state.max_upload_bytes).await;
    if let Err(e) = &result {
        log::error!("upload rejected: {e}");
    }
    result
}

async fn screen_upload(payload: Multipart, limit: usize) -> Result<HttpResponse, ScreenError> {
    let upload = read_upload(payload, limit)
        .await?
        .ok_or_else(|| ScreenError::Upload("No file part".to_string()))?;

    if upload.filename.is_empty() {
        return Err(ScreenError::Upload("No selected file".to_string()));
    }

    log::info!("screening '{}' ({} bytes)", upload.filename, upload.bytes.len());

    let table = parse_csv(&upload.bytes)?;
    let filtered = apply_investing_criteria(table)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(to_html(&filtered)))
}

/// Register the screener routes on an app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(screen);
}

/// Bind to the configured address and serve until shutdown.
pub async fn run(config: Config) -> std::io::Result<()> {
    let state = web::Data::new(ScreenerState::from(&config));

    log::info!("listening on http://{}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
