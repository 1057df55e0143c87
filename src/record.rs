//! Vehicle record returned by the registry

use serde::Deserialize;
use std::fmt;

/// A scalar value as the registry sends it. Numbers sometimes arrive as
/// strings, so every field accepts any JSON scalar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Blank strings, zero and `false` count as absent.
    pub fn is_present(&self) -> bool {
        match self {
            Scalar::Bool(b) => *b,
            Scalar::Integer(i) => *i != 0,
            Scalar::Float(f) => *f != 0.0,
            Scalar::Text(s) => !s.trim().is_empty(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Scalar::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Integer(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

/// Vehicle attributes for one plate. Every field is independently optional;
/// keys the registry sends that are not listed here are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "AWN_marque", default)]
    pub make: Option<Scalar>,
    #[serde(rename = "AWN_label", default)]
    pub model: Option<Scalar>,
    #[serde(rename = "AWN_date_mise_en_circulation", default)]
    pub registration_date: Option<Scalar>,
    #[serde(rename = "AWN_energie", default)]
    pub fuel: Option<Scalar>,
    #[serde(rename = "AWN_cylindree_liters", default)]
    pub engine_liters: Option<Scalar>,
    #[serde(rename = "AWN_puissance_chevaux", default)]
    pub horsepower: Option<Scalar>,
    #[serde(rename = "AWN_max_speed", default)]
    pub top_speed: Option<Scalar>,
    #[serde(rename = "AWN_couleur", default)]
    pub color: Option<Scalar>,
    #[serde(rename = "AWN_style_carrosserie", default)]
    pub body_style: Option<Scalar>,
    #[serde(rename = "AWN_nbr_places", default)]
    pub seats: Option<Scalar>,
    #[serde(rename = "AWN_marque_image", default)]
    pub make_logo: Option<Scalar>,
    #[serde(rename = "AWN_model_image", default)]
    pub model_image: Option<Scalar>,
}

fn present(v: &Option<Scalar>) -> Option<&Scalar> {
    v.as_ref().filter(|s| s.is_present())
}

impl VehicleRecord {
    /// True when no field carries a present value.
    pub fn is_empty(&self) -> bool {
        [
            &self.make,
            &self.model,
            &self.registration_date,
            &self.fuel,
            &self.engine_liters,
            &self.horsepower,
            &self.top_speed,
            &self.color,
            &self.body_style,
            &self.seats,
            &self.make_logo,
            &self.model_image,
        ]
        .iter()
        .all(|v| present(v).is_none())
    }

    /// Make logo URL, if the registry provided a usable one.
    pub fn make_logo_url(&self) -> Option<&str> {
        present(&self.make_logo).and_then(Scalar::as_text)
    }

    /// Secondary vehicle picture URL.
    pub fn model_image_url(&self) -> Option<&str> {
        present(&self.model_image).and_then(Scalar::as_text)
    }
}

/// Body of a registry response. `data` may be absent or `null`.
#[cfg_attr(not(feature = "live"), allow(dead_code))]
#[derive(Debug, Deserialize)]
pub(crate) struct RegistryResponse {
    #[serde(default)]
    pub data: Option<VehicleRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_scalars_and_ignores_unknown_keys() {
        let json = r#"{
            "AWN_marque": "RENAULT",
            "AWN_puissance_chevaux": 90,
            "AWN_cylindree_liters": 1.5,
            "AWN_nbr_places": "5",
            "AWN_marque_image": null,
            "AWN_version": "dCi"
        }"#;
        let r: VehicleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.make, Some(Scalar::from("RENAULT")));
        assert_eq!(r.horsepower, Some(Scalar::Integer(90)));
        assert_eq!(r.engine_liters, Some(Scalar::Float(1.5)));
        assert_eq!(r.seats, Some(Scalar::from("5")));
        assert_eq!(r.make_logo, None);
        assert!(r.color.is_none());
    }

    #[test]
    fn empty_object_is_empty_record() {
        let r: VehicleRecord = serde_json::from_str("{}").unwrap();
        assert!(r.is_empty());
        assert_eq!(r, VehicleRecord::default());
    }

    #[test]
    fn blank_and_zero_values_do_not_count() {
        let r = VehicleRecord {
            make: Some(Scalar::from("  ")),
            horsepower: Some(Scalar::Integer(0)),
            ..Default::default()
        };
        assert!(r.is_empty());
    }

    #[test]
    fn response_data_can_be_missing_or_null() {
        let a: RegistryResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(a.data.is_none());
        let b: RegistryResponse = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(b.data.is_none());
    }

    #[test]
    fn image_urls_must_be_text() {
        let r = VehicleRecord {
            make_logo: Some(Scalar::from("https://img.example/logo.png")),
            model_image: Some(Scalar::Integer(3)),
            ..Default::default()
        };
        assert_eq!(r.make_logo_url(), Some("https://img.example/logo.png"));
        assert_eq!(r.model_image_url(), None);
    }

    #[test]
    fn scalar_display() {
        assert_eq!(Scalar::Integer(245).to_string(), "245");
        assert_eq!(Scalar::Float(2.7).to_string(), "2.7");
        assert_eq!(Scalar::from("BLEU").to_string(), "BLEU");
    }
}
