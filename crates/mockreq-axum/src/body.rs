//! Registration body buffering.

use crate::error::MockError;
use axum::body::Body;
use bytes::Bytes;
use http_body_util::{BodyExt, LengthLimitError, Limited};

/// Buffer `body` until its end-of-stream, refusing more than `limit` bytes.
pub(crate) async fn read_body(body: Body, limit: usize) -> Result<Bytes, MockError> {
    match Limited::new(body, limit).collect().await {
        Ok(collected) => Ok(collected.to_bytes()),
        Err(err) if err.downcast_ref::<LengthLimitError>().is_some() => {
            Err(MockError::BodyTooLarge { limit })
        }
        Err(err) => Err(MockError::BodyRead(err.to_string())),
    }
}
