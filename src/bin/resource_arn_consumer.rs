//! Lambda entry point for events that identify the uploaded object by its ARN in
//! `detail.resources`.

use transcribe_event_consumer::{lambda, ResourcesEvent};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    lambda::serve::<ResourcesEvent>().await
}
