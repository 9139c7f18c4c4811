use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

/// Returned in the body of every response next to the echoed payload.
pub const SUCCESS_MESSAGE: &str = "Lambda function executed successfully!";

/// Every invocation that produces a response is a success.
pub const SUCCESS_STATUS_CODE: u16 = 200;

/// An HTTP-style response in the shape API Gateway expects from a lambda.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// JSON-encoded message + input
    pub body: String,
}

/// The body before it is encoded into `Response::body`.
/// The field order defines the order of keys in the output.
#[derive(Serialize)]
struct ResponseBody<'a, T: Serialize> {
    message: &'static str,
    input: &'a T,
}

/// Wraps the input into a success response.
/// Fails only if the input cannot be encoded as JSON, e.g. a map with non-string keys.
pub fn build_response<T: Serialize>(input: &T) -> Result<Response, serde_json::Error> {
    let body = serde_json::to_string(&ResponseBody {
        message: SUCCESS_MESSAGE,
        input,
    })?;

    Ok(Response {
        status_code: SUCCESS_STATUS_CODE,
        body,
    })
}

/// The lambda entry point. Echoes the payload back as-is.
pub async fn handler(event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (event, ctx) = event.into_parts();

    info!("Invocation {}", ctx.request_id);
    debug!("Event: {:?}", event);

    match build_response(&event) {
        Ok(v) => Ok(v),
        Err(e) => {
            // there is no meaningful response without the body, so the whole invocation fails
            error!("Failed to serialize the response body: {:?}", e);
            Err(Error::from(e))
        }
    }
}
