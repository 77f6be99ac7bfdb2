use tonic::{Request, Status};

/// Metadata key carrying the per-call correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client interceptor that stamps outgoing calls with an `x-request-id`.
///
/// An id already present on the request (for example one copied from an inbound
/// HTTP request) is kept; otherwise a fresh UUID v4 is generated.
///
/// # Example
/// ```ignore
/// use grpc_helpers::TracingInterceptor;
/// use rpc::user::user_service_client::UserServiceClient;
///
/// let client = UserServiceClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor;

impl TracingInterceptor {
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        if request.metadata().contains_key(REQUEST_ID_HEADER) {
            return Ok(request);
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        request.metadata_mut().insert(
            REQUEST_ID_HEADER,
            request_id
                .parse()
                .map_err(|_| Status::internal("Failed to create request ID"))?,
        );

        tracing::debug!(
            target: "grpc_helpers",
            request_id = %request_id,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_generates_request_id() {
        let mut interceptor = TracingInterceptor::new();
        let req = interceptor.call(Request::new(())).unwrap();

        let id = req.metadata().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok());
    }

    #[test]
    fn test_keeps_existing_request_id() {
        let mut interceptor = TracingInterceptor::new();
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "abc-123".parse().unwrap());

        let req = interceptor.call(request).unwrap();
        assert_eq!(req.metadata().get(REQUEST_ID_HEADER).unwrap(), "abc-123");
    }
}
