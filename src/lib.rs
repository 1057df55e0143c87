//! SIV Checker
//!
//! Type a French registration plate, get a lettered plate image and the
//! vehicle's details from the Auto-Ways registry.
//!
//! # Components
//!
//! - **Plate rendering** ([`rendering`]): letters the normalized plate onto
//!   a blank template, centered and in faux bold
//! - **Vehicle lookup** ([`lookup`]): one blocking registry call per plate,
//!   or a canned fixture record for demos
//! - **Display** ([`display`], [`server`]): a single HTML page served
//!   locally, listing only the attributes the registry returned
//!
//! # Example
//!
//! ```no_run
//! use siv_checker::lookup::{new_lookup, LookupSettings, VehicleLookup};
//! use siv_checker::rendering::PlateRenderer;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = PlateRenderer::from_assets(
//!     Path::new("Data/images/plaque_vierge.png"),
//!     Path::new("Data/fonts/dejavu-sans-bold.ttf"),
//! )?;
//! let png = renderer.render("ab-123 cd").to_png()?;
//! println!("{} bytes of plate", png.len());
//!
//! let lookup = new_lookup(&LookupSettings::fixture())?;
//! if let Some(record) = lookup.lookup("AB-123-CD")? {
//!     for line in siv_checker::display::lines(&record) {
//!         println!("{} : {}", line.label, line.value);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub mod display;
pub mod lookup;
pub mod plate;
pub mod record;
pub mod rendering;
pub mod server;

pub use config::AppConfig;
pub use lookup::{new_lookup, LookupMode, LookupSettings, VehicleLookup};
pub use record::{Scalar, VehicleRecord};
pub use rendering::{PlateRenderer, RenderedPlate};
