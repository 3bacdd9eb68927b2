use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Result, XReportError};
use crate::model::{XReport, XReportsPage};

pub const API_URL: &str = "https://api.camptocamp.org";

/// The two read endpoints the export needs.
pub trait XReportsApi: Sync {
    /// One page of report summaries starting at `offset`.
    fn page(&self, offset: u64) -> Result<XReportsPage>;

    /// The full detail of one report.
    fn report(&self, document_id: u64) -> Result<XReport>;
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    discourse: bool,
    remember_me: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    token: String,
}

/// An authenticated camptocamp.org API client.
pub struct CampToCampClient {
    client: reqwest::blocking::Client,
    api_url: String,
    authorization: String,
}

impl CampToCampClient {
    /// Authenticate and keep the session token for every later request.
    pub fn login(api_url: &str, username: &str, password: &str) -> Result<Self> {
        Self::login_with(reqwest::blocking::Client::new(), api_url, username, password)
    }

    /// Same as [`login`](Self::login) over a caller-built HTTP client.
    pub fn login_with(
        client: reqwest::blocking::Client,
        api_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self> {
        let api_url = api_url.trim_end_matches('/').to_string();

        info!(user = %username, api = %api_url, "Authenticating");

        let resp = client
            .post(format!("{api_url}/users/login"))
            .json(&LoginRequest {
                username,
                password,
                discourse: false,
                remember_me: true,
            })
            .send()?;

        if !resp.status().is_success() {
            debug!(status = resp.status().as_u16(), "Login rejected");
            return Err(XReportError::Authentication);
        }

        let body: LoginResponse = resp.json().map_err(|_| XReportError::Authentication)?;

        Ok(Self {
            client,
            api_url,
            authorization: format!("JWT token=\"{}\"", body.token),
        })
    }

    fn get<T: serde::de::DeserializeOwned>(&self, path: &str, query: &[(&str, u64)]) -> Result<T> {
        let url = format!("{}{path}", self.api_url);
        debug!(url = %url, "GET");

        let resp = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.authorization)
            .query(query)
            .send()?;

        match resp.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(XReportError::Authentication),
            status if !status.is_success() => Err(XReportError::api(status.as_u16(), url)),
            _ => Ok(resp.json()?),
        }
    }
}

impl XReportsApi for CampToCampClient {
    fn page(&self, offset: u64) -> Result<XReportsPage> {
        self.get("/xreports", &[("offset", offset)])
    }

    fn report(&self, document_id: u64) -> Result<XReport> {
        self.get(&format!("/xreports/{document_id}"), &[])
    }
}
