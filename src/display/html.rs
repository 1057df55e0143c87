//! HTML page for the search form and its results.

use std::fmt::Write as _;

use super::{ResultView, NO_DATA_MESSAGE};

pub const PAGE_TITLE: &str = "SIV Checker";
pub const HEADING: &str = "Retrouvez quelle voiture c'était !";
pub const SUBTITLE: &str = "Entrez une plaque d'immatriculation pour afficher les détails du véhicule";
pub const MISSING_LOGO: &str = "Logo de la marque non disponible";

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 760px; margin: 0 auto; padding: 16px; }
.header-box {
    background: #eef0f4;
    background-image: repeating-linear-gradient(45deg,
        rgba(255,255,255,0.6) 0, rgba(255,255,255,0.6) 2px,
        rgba(230,230,230,0.6) 3px, rgba(230,230,230,0.6) 5px);
    border: 1px solid #c4c4c4;
    padding: 26px 24px;
    border-radius: 14px;
    margin: 10px 0 26px 0;
    box-shadow: 0 5px 12px rgba(0,0,0,0.1);
    text-align: center;
}
.header-box img { width: 360px; margin-bottom: 12px; border-radius: 4px; }
.header-box h1 { font-weight: 900; font-size: 2.3rem; margin-bottom: 5px; }
.header-box p { color: #555; font-size: 1.08rem; margin-top: -5px; }
.warning { background: #fff8e1; border-left: 4px solid #f0b400; padding: 8px 12px; margin: 8px 0; }
.error { background: #fdecea; border-left: 4px solid #d93025; padding: 8px 12px; margin: 8px 0; }
.result { display: flex; gap: 16px; }
.result .logo { flex: 1; }
.result .info { flex: 3; }
"#;

/// Everything one page shows. Fields left empty are not rendered.
#[derive(Debug, Default, Clone)]
pub struct Page {
    /// Banner image for the header box, as a `data:` URI
    pub banner: Option<String>,
    pub plate_query: String,
    pub warnings: Vec<String>,
    /// Fatal error; when set, nothing but the header and this message is shown
    pub halted: Option<String>,
    pub plate_image: Option<String>,
    pub result: Option<ResultView>,
}

/// Escape text for HTML element content and quoted attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_page(page: &Page) -> String {
    let mut body = String::new();

    body.push_str("<div class=\"header-box\">\n");
    if let Some(src) = &page.banner {
        let _ = writeln!(body, "<img src=\"{}\" alt=\"Plaque\"/>", escape(src));
    }
    let _ = writeln!(body, "<h1>{}</h1>\n<p>{}</p>\n</div>", escape(HEADING), escape(SUBTITLE));

    for w in &page.warnings {
        let _ = writeln!(body, "<div class=\"warning\">{}</div>", escape(w));
    }

    if let Some(msg) = &page.halted {
        let _ = writeln!(body, "<div class=\"error\">{}</div>", escape(msg));
        return wrap(&body);
    }

    let _ = writeln!(
        body,
        "<form method=\"get\" action=\"/search\">\n\
         <input type=\"text\" name=\"plaque\" value=\"{}\" placeholder=\"Exemple : AB123CD\" autofocus/>\n\
         <button type=\"submit\">Rechercher</button>\n</form>",
        escape(&page.plate_query)
    );

    if let Some(src) = &page.plate_image {
        let _ = writeln!(body, "<img class=\"plate\" src=\"{}\" alt=\"{}\"/>", escape(src), escape(&page.plate_query));
    }

    if let Some(result) = &page.result {
        render_result(&mut body, result);
    }

    wrap(&body)
}

fn render_result(body: &mut String, result: &ResultView) {
    match result {
        ResultView::Found { lines, make_logo, model_image } => {
            body.push_str("<h2>Informations du véhicule</h2>\n<div class=\"result\">\n<div class=\"logo\">");
            match make_logo {
                Some(src) => {
                    let _ = write!(body, "<img src=\"{}\" width=\"100\" alt=\"logo\"/>", escape(src));
                }
                None => body.push_str(MISSING_LOGO),
            }
            body.push_str("</div>\n<div class=\"info\">\n");
            for line in lines {
                let _ = writeln!(
                    body,
                    "<p data-key=\"{}\"><strong>{} :</strong> {}</p>",
                    line.key,
                    escape(line.label),
                    escape(&line.value)
                );
            }
            body.push_str("</div>\n</div>\n<hr/>\n");
            if let Some(src) = model_image {
                let _ = writeln!(body, "<img src=\"{}\" width=\"200\" alt=\"modèle\"/>", escape(src));
            }
        }
        ResultView::NoData => {
            let _ = writeln!(body, "<p class=\"no-data\">{}</p>", NO_DATA_MESSAGE);
        }
        ResultView::Failed(msg) => {
            let _ = writeln!(body, "<div class=\"error\">{}</div>", escape(msg));
        }
    }
}

fn wrap(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"fr\">\n<head>\n<meta charset=\"utf-8\"/>\n<title>🚗 {}</title>\n<style>{}</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        PAGE_TITLE, STYLE, body
    )
}
