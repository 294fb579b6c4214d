use std::{fs, io, path::Path};

use json::JsonValue;
use reqwest::{
    blocking::Client,
    header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue},
    StatusCode,
};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::{config::Config, model::ids::Region};

const RIOT_TOKEN_HEADER: &str = "x-riot-token";

pub struct LeagueClient {
    client: Client,
    config: Config,
}

impl LeagueClient {
    pub fn new(config: &Config) -> Result<Self, ClientInitError> {
        let mut headers = HeaderMap::new();
        let mut token = HeaderValue::from_str(config.api_key.trim())?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(RIOT_TOKEN_HEADER), token);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    pub fn league_url(&self, region: &Region) -> String {
        format!(
            "{}/lol/league/v4/challengerleagues/by-queue/{}",
            self.config.host_for(region),
            self.config.queue_type
        )
    }

    /// Fetches the Challenger league of the configured queue. Failures are logged here,
    /// the caller only has to decide what to do without data.
    pub fn fetch_challenger_league(&self, region: &Region) -> Result<JsonValue, FetchError> {
        let result = match &self.config.local_file {
            Some(path) => read_local(path),
            None => self.request(region),
        };

        if let Err(err) = &result {
            error!("{}", err);
            if let Some(hint) = err.hint() {
                warn!("{}", hint);
            }
        }
        result
    }

    fn request(&self, region: &Region) -> Result<JsonValue, FetchError> {
        let url = self.league_url(region);
        debug!(%url, "requesting challenger league");

        let response = self.client.get(&url).send()?;
        check_status(response.status())?;

        let text = response.text()?;
        let json = json::parse(text.as_str())?;
        info!(%region, "challenger league received");
        Ok(json)
    }
}

fn read_local(path: &Path) -> Result<JsonValue, FetchError> {
    info!(path = %path.display(), "loading challenger league from local file");
    let text = fs::read_to_string(path)?;
    Ok(json::parse(text.as_str())?)
}

/// Any 2xx passes; a body-less success such as 204 then fails JSON parsing as `InvalidBody`.
pub fn check_status(status: StatusCode) -> Result<(), FetchError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::FORBIDDEN => Err(FetchError::Auth),
        StatusCode::NOT_FOUND => Err(FetchError::NotFound),
        other => Err(FetchError::OtherHttp(other)),
    }
}

#[derive(Debug, Error)]
pub enum ClientInitError {
    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),
    #[error("Client error: {0}")]
    ClientError(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {}", StatusCode::FORBIDDEN)]
    Auth,
    #[error("HTTP error: {}", StatusCode::NOT_FOUND)]
    NotFound,
    #[error("HTTP error: {0}")]
    OtherHttp(StatusCode),
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Response is not valid JSON: {0}")]
    InvalidBody(#[from] json::Error),
    #[error("Local file error: {0}")]
    LocalFile(#[from] io::Error),
}

impl FetchError {
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            FetchError::Auth => Some("Check your API key, it may be invalid or expired."),
            FetchError::NotFound => Some("Endpoint not found, check the URL or the region."),
            _ => None,
        }
    }
}
