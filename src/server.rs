//! The display surface: a single-page form served over local HTTP.
//!
//! Requests are handled one at a time on the calling thread; a search blocks
//! on the registry call. An app whose fatal preconditions failed at startup
//! stays up in a halted state so the user sees why nothing works.

use std::path::Path;

use base64::Engine as _;
use log::{debug, error, info, warn};
use tiny_http::{Header, Method, Request, Response, Server};

use crate::config::AppConfig;
use crate::display::html::{render_page, Page};
use crate::display::present;
use crate::lookup::{new_lookup, VehicleLookup};
use crate::rendering::PlateRenderer;
use crate::{Error, Result};

/// Response produced for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    fn page(page: &Page) -> Self {
        Reply { status: 200, body: render_page(page) }
    }
}

enum AppState {
    Ready {
        renderer: PlateRenderer,
        lookup: Box<dyn VehicleLookup>,
    },
    Halted(String),
}

pub struct App {
    state: AppState,
    banner: Option<String>,
    warnings: Vec<String>,
}

impl App {
    pub fn new(renderer: PlateRenderer, lookup: Box<dyn VehicleLookup>) -> Self {
        let warnings = renderer.font_warning().map(str::to_string).into_iter().collect();
        Self {
            state: AppState::Ready { renderer, lookup },
            banner: None,
            warnings,
        }
    }

    pub fn halted(message: impl Into<String>) -> Self {
        Self {
            state: AppState::Halted(message.into()),
            banner: None,
            warnings: Vec::new(),
        }
    }

    /// Build the app from config, checking the fatal preconditions (access
    /// token, plate template) before any request is served.
    pub fn from_config(config: &AppConfig) -> Self {
        let (banner, banner_warning) = load_banner(&config.assets.banner);
        let mut app = match Self::try_ready(config) {
            Ok(app) => app,
            Err(message) => {
                error!("Startup precondition failed: {}", message);
                Self::halted(message)
            }
        };
        app.banner = banner;
        if let Some(w) = banner_warning {
            app.warnings.insert(0, w);
        }
        app
    }

    fn try_ready(config: &AppConfig) -> std::result::Result<Self, String> {
        let settings = config.lookup.clone()?;
        let renderer = PlateRenderer::from_assets(&config.assets.template, &config.assets.font)
            .map_err(|e| e.to_string())?;
        let lookup = new_lookup(&settings).map_err(|e| e.to_string())?;
        info!("Lookup backend: {}", lookup.mode());
        Ok(Self::new(renderer, lookup))
    }

    pub fn is_halted(&self) -> bool {
        matches!(self.state, AppState::Halted(_))
    }

    fn base_page(&self, plate_query: &str) -> Page {
        Page {
            banner: self.banner.clone(),
            plate_query: plate_query.to_string(),
            warnings: self.warnings.clone(),
            halted: match &self.state {
                AppState::Halted(msg) => Some(msg.clone()),
                AppState::Ready { .. } => None,
            },
            ..Default::default()
        }
    }

    /// Render the plate, then look it up, and lay both out on a page.
    pub fn search(&self, plate: &str) -> Page {
        let mut page = self.base_page(plate);
        let AppState::Ready { renderer, lookup } = &self.state else {
            return page;
        };

        info!("Search for plate {:?}", plate);
        match renderer.render(plate).to_data_uri() {
            Ok(uri) => page.plate_image = Some(uri),
            Err(e) => {
                error!("Plate rendering failed: {}", e);
                page.warnings.push(e.to_string());
            }
        }

        let outcome = lookup.lookup(plate);
        if let Err(e) = &outcome {
            error!("Lookup failed for {:?}: {}", plate, e);
        }
        page.result = Some(present(outcome));
        page
    }

    /// Route a GET request target (path plus optional query).
    pub fn handle_path(&self, target: &str) -> Reply {
        let (path, query) = target.split_once('?').unwrap_or((target, ""));
        debug!("GET {}", path);
        match path {
            "/" => Reply::page(&self.base_page("")),
            "/search" => {
                let plate = url::form_urlencoded::parse(query.as_bytes())
                    .find(|(k, _)| k == "plaque")
                    .map(|(_, v)| v.into_owned())
                    .unwrap_or_default();
                Reply::page(&self.search(&plate))
            }
            _ => Reply { status: 404, body: "Not Found".into() },
        }
    }

    pub fn handle(&self, request: Request) {
        let reply = if *request.method() == Method::Get {
            self.handle_path(request.url())
        } else {
            Reply { status: 405, body: "Method Not Allowed".into() }
        };
        let mut response = Response::from_string(reply.body).with_status_code(reply.status);
        if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..]) {
            response = response.with_header(h);
        }
        if let Err(e) = request.respond(response) {
            warn!("Failed to send response: {}", e);
        }
    }

    /// Serve requests until the server shuts down.
    pub fn serve(&self, server: &Server) {
        for request in server.incoming_requests() {
            self.handle(request);
        }
    }
}

/// Read the header banner as a data URI. A missing banner is only a warning.
fn load_banner(path: &Path) -> (Option<String>, Option<String>) {
    match std::fs::read(path) {
        Ok(bytes) => (
            Some(format!(
                "data:image/png;base64,{}",
                base64::engine::general_purpose::STANDARD.encode(bytes)
            )),
            None,
        ),
        Err(e) => {
            warn!("Banner image unavailable at {}: {}", path.display(), e);
            (None, Some(format!("Image introuvable : {}", path.display())))
        }
    }
}

/// Bind the configured address and serve the app.
pub fn run(config: &AppConfig) -> Result<()> {
    let app = App::from_config(config);
    let server = Server::http(config.bind.as_str())
        .map_err(|e| Error::ServerError(format!("cannot bind {}: {}", config.bind, e)))?;
    info!("Serving on http://{}", config.bind);
    app.serve(&server);
    Ok(())
}
