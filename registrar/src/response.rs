//! Output envelope for everything the registrar prints.
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Transcript generated.",
//!   "data": { ... }
//! }
//! ```

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Response<T: Serialize> {
    success: bool,
    message: String,
    data: T,
}

impl<T: Serialize> Response<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
