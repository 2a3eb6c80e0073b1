use crossbeam_channel::Sender;
use serde::Deserialize;
use thiserror::Error;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};
use waymark::prelude::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request to routing engine failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Routing engine answered with code {0}")]
    Engine(String),
    #[error("Routing engine returned no routes")]
    NoRoute,
}

#[derive(Deserialize)]
struct OsrmResponse {
    code: String,
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize)]
struct OsrmRoute {
    distance: f64,
    duration: f64,
}

/// Driving routes from an OSRM HTTP server. Each request runs as its own
/// task; failures are logged and never delivered.
pub struct OsrmRouter {
    client: reqwest::Client,
    base_url: String,
    runtime: Handle,
    results: Sender<RouteResult>,
}

impl OsrmRouter {
    /// Must be called from inside a tokio runtime.
    pub fn new(base_url: &str, results: Sender<RouteResult>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.to_string(),
            runtime: Handle::current(),
            results,
        }
    }

    fn spawn_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) -> JoinHandle<()> {
        let client = self.client.clone();
        let url = route_url(&self.base_url, &from, &to);
        let results = self.results.clone();
        self.runtime.spawn(async move {
            debug!(request = %tag, %url, "fetching route");
            match fetch_summary(&client, &url).await {
                Ok(summary) => {
                    if results.send(RouteResult { tag, summary }).is_err() {
                        warn!(request = %tag, "route result receiver dropped");
                    }
                }
                Err(err) => warn!(request = %tag, "Route computation failed: {err}"),
            }
        })
    }
}

impl RoutingService for OsrmRouter {
    fn compute_route(&self, from: Coordinate, to: Coordinate, tag: RequestId) {
        self.spawn_route(from, to, tag);
    }
}

fn route_url(base_url: &str, from: &Coordinate, to: &Coordinate) -> String {
    format!(
        "{}/route/v1/driving/{},{};{},{}?overview=false",
        base_url, from.longitude, from.latitude, to.longitude, to.latitude
    )
}

async fn fetch_summary(client: &reqwest::Client, url: &str) -> Result<RouteSummary, self::Error> {
    let response: OsrmResponse = client.get(url).send().await?.json().await?;
    summary_from(response)
}

fn summary_from(response: OsrmResponse) -> Result<RouteSummary, self::Error> {
    if response.code != "Ok" {
        return Err(self::Error::Engine(response.code));
    }
    let route = response.routes.first().ok_or(self::Error::NoRoute)?;
    Ok(RouteSummary::new(
        Distance::from_meters(route.distance),
        Duration::from_seconds(route.duration),
    ))
}
