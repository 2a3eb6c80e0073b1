use serde::{Deserialize, Serialize};

use crate::shared::geo::Coordinate;

/// How the route line is drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStyle {
    pub color: String,
    pub weight: u8,
}

impl Default for RouteStyle {
    fn default() -> Self {
        Self {
            color: "#6FA1EC".into(),
            weight: 4,
        }
    }
}

/// Initial map view and tile source handed to the front end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    pub route_style: RouteStyle,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Coordinate {
                latitude: 51.505,
                longitude: -0.09,
            },
            zoom: 13,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".into(),
            attribution:
                "© <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                    .into(),
            route_style: Default::default(),
        }
    }
}
