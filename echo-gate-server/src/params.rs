use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{Form, FromRequest, Query, Request},
    http::Method,
};
use echo_gate_core::RequestSource;

/// Request parameters in lookup order: query string first, then an
/// urlencoded form body. Unparseable input yields no parameters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParameters(pub Vec<(String, String)>);

#[async_trait]
impl<S> FromRequest<S> for RequestParameters
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut pairs = Query::<Vec<(String, String)>>::try_from_uri(req.uri())
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();

        // GET and HEAD carry parameters in the query only
        if *req.method() != Method::GET && *req.method() != Method::HEAD {
            if let Ok(Form(body)) = Form::<Vec<(String, String)>>::from_request(req, state).await {
                pairs.extend(body);
            }
        }

        Ok(Self(pairs))
    }
}

impl RequestSource for RequestParameters {
    fn parameter(&self, name: &str) -> Option<String> {
        self.0.parameter(name)
    }
}
