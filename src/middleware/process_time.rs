//! Request timing middleware.

use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header::{HeaderName, HeaderValue},
    Error,
};
use futures::future::{ok, LocalBoxFuture, Ready};
use std::rc::Rc;
use std::time::Instant;

/// Header carrying the wall-clock handling time in seconds.
pub const PROCESS_TIME_HEADER: &str = "x-process-time";

/// Adds `X-Process-Time` to every response, including error responses
/// rendered by handlers.
pub struct ProcessTime;

impl<S, B> Transform<S, ServiceRequest> for ProcessTime
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = ProcessTimeService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(ProcessTimeService {
            service: Rc::new(service),
        })
    }
}

pub struct ProcessTimeService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for ProcessTimeService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let started = Instant::now();
            let mut res = service.call(req).await?;

            let elapsed = format!("{:.6}", started.elapsed().as_secs_f64());
            if let Ok(value) = HeaderValue::from_str(&elapsed) {
                res.headers_mut()
                    .insert(HeaderName::from_static(PROCESS_TIME_HEADER), value);
            }

            Ok(res)
        })
    }
}
