//! Turning lookup outcomes into displayable lines.
//!
//! Which vehicle attributes are shown, in what order and under which label
//! is a static table ([`FIELDS`]); the view model is built by walking it and
//! keeping only the fields the record actually carries.

pub mod html;

use crate::record::{Scalar, VehicleRecord};
use crate::Result;

/// One displayable vehicle attribute.
pub struct FieldSpec {
    /// Registry key, as sent in the `data` object
    pub key: &'static str,
    pub label: &'static str,
    pub get: fn(&VehicleRecord) -> Option<&Scalar>,
    pub format: fn(&Scalar) -> String,
}

fn plain(v: &Scalar) -> String {
    v.to_string()
}

fn tagged(v: &Scalar) -> String {
    format!("🏷️ {}", v)
}

pub static FIELDS: &[FieldSpec] = &[
    FieldSpec { key: "AWN_marque", label: "Marque", get: |r| r.make.as_ref(), format: tagged },
    FieldSpec { key: "AWN_label", label: "Modèle", get: |r| r.model.as_ref(), format: plain },
    FieldSpec {
        key: "AWN_date_mise_en_circulation",
        label: "Date de mise en circulation",
        get: |r| r.registration_date.as_ref(),
        format: plain,
    },
    FieldSpec { key: "AWN_energie", label: "Type de carburant", get: |r| r.fuel.as_ref(), format: plain },
    FieldSpec {
        key: "AWN_cylindree_liters",
        label: "Volume du moteur (en litres)",
        get: |r| r.engine_liters.as_ref(),
        format: plain,
    },
    FieldSpec {
        key: "AWN_puissance_chevaux",
        label: "Puissance réelle (en chevaux)",
        get: |r| r.horsepower.as_ref(),
        format: plain,
    },
    FieldSpec {
        key: "AWN_max_speed",
        label: "Vitesse maximale (en km/h)",
        get: |r| r.top_speed.as_ref(),
        format: plain,
    },
    FieldSpec { key: "AWN_couleur", label: "Couleur", get: |r| r.color.as_ref(), format: plain },
    FieldSpec {
        key: "AWN_style_carrosserie",
        label: "Type de véhicule",
        get: |r| r.body_style.as_ref(),
        format: plain,
    },
    FieldSpec { key: "AWN_nbr_places", label: "Nombre de places", get: |r| r.seats.as_ref(), format: plain },
];

/// A labeled value ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// What the result section of the page shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultView {
    Found {
        lines: Vec<DisplayLine>,
        make_logo: Option<String>,
        model_image: Option<String>,
    },
    /// Non-200 answer or a record with nothing in it
    NoData,
    /// Lookup could not complete; carries the user-facing message
    Failed(String),
}

pub const NO_DATA_MESSAGE: &str = "Aucune donnée trouvée pour cette plaque.";

/// Present fields of `record`, in table order.
pub fn lines(record: &VehicleRecord) -> Vec<DisplayLine> {
    FIELDS
        .iter()
        .filter_map(|f| {
            (f.get)(record).filter(|v| v.is_present()).map(|v| DisplayLine {
                key: f.key,
                label: f.label,
                value: (f.format)(v),
            })
        })
        .collect()
}

pub fn present(outcome: Result<Option<VehicleRecord>>) -> ResultView {
    match outcome {
        Err(e) => ResultView::Failed(e.to_string()),
        Ok(None) => ResultView::NoData,
        Ok(Some(record)) if record.is_empty() => ResultView::NoData,
        Ok(Some(record)) => ResultView::Found {
            lines: lines(&record),
            make_logo: record.make_logo_url().map(str::to_string),
            model_image: record.model_image_url().map(str::to_string),
        },
    }
}
