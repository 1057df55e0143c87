//! Mock Auto-Ways registry shared by the integration tests

use std::sync::Once;
use tiny_http::{Response, Server};

pub const TOKEN: &str = "test-token";

static INIT: Once = Once::new();

const FULL: &str = r#"{"data": {
    "AWN_marque": "RENAULT",
    "AWN_label": "CLIO IV 1.5 DCI",
    "AWN_date_mise_en_circulation": "2016-03-14",
    "AWN_energie": "DIESEL",
    "AWN_cylindree_liters": 1.5,
    "AWN_puissance_chevaux": 90,
    "AWN_max_speed": 178,
    "AWN_couleur": "ROUGE",
    "AWN_style_carrosserie": "BERLINE",
    "AWN_nbr_places": 5,
    "AWN_marque_image": "https://img.example/renault.png",
    "AWN_model_image": "https://img.example/clio.png",
    "AWN_version": "BUSINESS"
}}"#;

const NO_COLOR: &str = r#"{"data": {
    "AWN_marque": "PEUGEOT",
    "AWN_label": "208",
    "AWN_energie": "ESSENCE",
    "AWN_puissance_chevaux": 82,
    "AWN_marque_image": null
}}"#;

fn json(body: &str) -> Response<std::io::Cursor<Vec<u8>>> {
    Response::from_string(body).with_header(
        "Content-Type: application/json"
            .parse::<tiny_http::Header>()
            .unwrap(),
    )
}

/// Start the mock registry once and return its base URL.
///
/// The response depends on the `plaque` parameter; an unexpected token
/// gets a 401.
pub fn start_registry() -> String {
    INIT.call_once(|| {
        std::thread::spawn(|| {
            let server = Server::http("127.0.0.1:18090").unwrap();
            for request in server.incoming_requests() {
                let url = request.url().to_string();
                let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
                let params: Vec<(String, String)> = url::form_urlencoded::parse(query.as_bytes())
                    .into_owned()
                    .collect();
                let get = |k: &str| {
                    params
                        .iter()
                        .find(|(name, _)| name == k)
                        .map(|(_, v)| v.clone())
                        .unwrap_or_default()
                };

                let response = if path != "/api" {
                    Response::from_string("Not Found").with_status_code(404)
                } else if get("token") != TOKEN {
                    Response::from_string("unauthorized").with_status_code(401)
                } else {
                    match get("plaque").as_str() {
                        "FULL" => json(FULL),
                        "NOCOLOR" => json(NO_COLOR),
                        "EMPTY" => json(r#"{"data": {}}"#),
                        "NODATA" => json(r#"{"status": "ok"}"#),
                        "GARBAGE" => json("<html>oops</html>"),
                        "BOOM" => Response::from_string("error").with_status_code(500),
                        echo if echo.starts_with("ECHO") => {
                            json(&serde_json::json!({ "data": { "AWN_label": echo } }).to_string())
                        }
                        _ => Response::from_string("{}").with_status_code(404),
                    }
                };
                let _ = request.respond(response);
            }
        });
        // Give the server time to start
        std::thread::sleep(std::time::Duration::from_millis(100));
    });

    "http://127.0.0.1:18090/api".to_string()
}
