mod delete_job;
mod download;
mod health;
mod job_status;
mod process_upload;
mod process_url;

pub use delete_job::delete_job_handler;
pub use download::download_handler;
pub use health::health_handler;
pub use job_status::{JobStatusResponse, job_status_handler};
pub use process_upload::process_upload_handler;
pub use process_url::{CreatedResponse, ErrorResponse, process_url_handler};
