use crate::app_lib::{AppError, post_json};
use crate::features::contact::types::ContactMessage;

/// `POST /api/contact`
pub async fn send_message(message: &ContactMessage) -> Result<(), AppError> {
    post_json("/api/contact", message, &[]).await
}
