use serde::{Deserialize, Serialize};
use crate::models::location::LatLng;

pub const LABEL_COLOR: &str = "#000000";
pub const LABEL_FONT_SIZE: &str = "14px";
pub const LABEL_FONT_WEIGHT: &str = "bold";

/// Etiqueta visible de un marcador
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLabel {
    pub text: String,
    pub color: String,
    pub font_size: String,
    pub font_weight: String,
}

impl MarkerLabel {
    pub fn numbered(number: usize) -> Self {
        Self {
            text: number.to_string(),
            color: LABEL_COLOR.to_string(),
            font_size: LABEL_FONT_SIZE.to_string(),
            font_weight: LABEL_FONT_WEIGHT.to_string(),
        }
    }
}

/// Marcador en memoria, derivado de un PointMarker + su posición en la lista.
/// La etiqueta siempre es `index + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayMarker {
    pub position: LatLng,
    pub label: MarkerLabel,
    pub index: usize,
    /// Creado por un click y aún no confirmado por un fetch
    pub provisional: bool,
}

impl DisplayMarker {
    pub fn new(position: LatLng, index: usize) -> Self {
        Self {
            position,
            label: MarkerLabel::numbered(index + 1),
            index,
            provisional: false,
        }
    }

    pub fn provisional(position: LatLng, index: usize) -> Self {
        Self {
            provisional: true,
            ..Self::new(position, index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_one_based() {
        let marker = DisplayMarker::new(LatLng::new(10.0, 20.0), 0);
        assert_eq!(marker.label.text, "1");
        assert_eq!(marker.label.color, "#000000");
        assert!(!marker.provisional);

        let marker = DisplayMarker::provisional(LatLng::new(10.0, 20.0), 4);
        assert_eq!(marker.label.text, "5");
        assert!(marker.provisional);
    }

    #[test]
    fn label_serializes_in_widget_format() {
        let json = serde_json::to_value(MarkerLabel::numbered(3)).unwrap();
        assert_eq!(json["text"], "3");
        assert_eq!(json["fontSize"], "14px");
        assert_eq!(json["fontWeight"], "bold");
    }
}
