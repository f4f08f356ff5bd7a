//! Lambda entry point for events that carry `bucketName` and `key` in
//! `detail.requestParameters`.

use transcribe_event_consumer::{lambda, RequestParametersEvent};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    lambda::serve::<RequestParametersEvent>().await
}
