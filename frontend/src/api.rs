use std::cell::RefCell;
use std::rc::Rc;
use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use uuid::Uuid;
use crate::browser;
use shared::{
    Category, Competitor, CompetitorRepository, CreateCompetitorRequest, Error, ErrorResponse,
    Result, SessionGrant, COMPETITORS_COLLECTION,
};

const UNAUTHORIZED: u16 = 401;

/// Client for the competitor API. Clones share the session token.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Rc<RefCell<Option<String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Rc::new(RefCell::new(None)),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn competitor_url(&self, suffix: &str) -> String {
        self.url(&format!("/{}{}", COMPETITORS_COLLECTION, suffix))
    }

    fn authorized(&self, request: Request) -> Request {
        match self.token.borrow().as_deref() {
            Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
            None => request,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.borrow().is_some()
    }

    pub async fn sign_in_anonymously(&self) -> Result<()> {
        let response = Request::get(&self.url("/session"))
            .send()
            .await
            .map_err(|e| Error::remote("Anonymous sign-in failed", e.to_string()))?;

        let grant: SessionGrant = decode(response, "Anonymous sign-in failed").await?;
        *self.token.borrow_mut() = Some(grant.token);
        Ok(())
    }

    async fn send_once<B>(&self, context: &str, build: &B) -> Result<Response>
    where
        B: Fn() -> std::result::Result<Request, gloo_net::Error>,
    {
        let request = build().map_err(|e| Error::remote(context, e.to_string()))?;
        self.authorized(request)
            .send()
            .await
            .map_err(|e| Error::remote(context, e.to_string()))
    }

    /// Sends with the current session; on 401 signs in again and retries once.
    async fn send<B>(&self, context: &str, build: B) -> Result<Response>
    where
        B: Fn() -> std::result::Result<Request, gloo_net::Error>,
    {
        let response = self.send_once(context, &build).await?;
        if response.status() != UNAUTHORIZED {
            return Ok(response);
        }

        browser::log("Session expired, signing in again");
        self.sign_in_anonymously().await?;
        self.send_once(context, &build).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response, context: &str) -> Result<T> {
    let status = response.status();
    if !response.ok() {
        let detail = response.json::<ErrorResponse>().await
            .map(|err| err.error)
            .unwrap_or_else(|_| format!("HTTP {}", status));
        return Err(Error::remote(context, detail));
    }

    response.json::<T>().await
        .map_err(|e| Error::remote(context, e.to_string()))
}

#[async_trait(?Send)]
impl CompetitorRepository for ApiClient {
    async fn list(&self) -> Result<Vec<Competitor>> {
        const CONTEXT: &str = "Error fetching competitors";
        let url = self.competitor_url("");
        let response = self.send(CONTEXT, || Ok(Request::get(&url))).await?;
        decode(response, CONTEXT).await
    }

    async fn create(&self, request: &CreateCompetitorRequest) -> Result<Competitor> {
        const CONTEXT: &str = "Error adding competitor";
        let url = self.competitor_url("");
        let response = self.send(CONTEXT, || Request::post(&url).json(request)).await?;
        decode(response, CONTEXT).await
    }

    async fn increment_vote(&self, id: Uuid, category: Category) -> Result<Competitor> {
        const CONTEXT: &str = "Error voting";
        let url = self.competitor_url(&format!("/{}/votes/{}", id, category));
        let response = self.send(CONTEXT, || Ok(Request::post(&url))).await?;
        decode(response, CONTEXT).await
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        const CONTEXT: &str = "Error deleting competitor";
        let url = self.competitor_url(&format!("/{}", id));
        let response = self.send(CONTEXT, || Ok(Request::delete(&url))).await?;

        match response.status() {
            200..=299 | 404 => Ok(()),
            status => Err(Error::remote(CONTEXT, format!("HTTP {}", status))),
        }
    }
}
