// ============================================================================
// CONFIG - Configuración cargada en tiempo de compilación (build.rs + .env)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_COLLECTION: &str = "numberedQuestMarkers";
pub const DEFAULT_CENTER_LAT: f64 = 28.70406;
pub const DEFAULT_CENTER_LNG: f64 = 77.102493;
pub const DEFAULT_ZOOM: f64 = 10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub enable_logging: bool,
    pub map_api_key: String,
    pub map_config: MapConfig,
    pub store_config: StoreConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_logging: true,
            map_api_key: String::new(),
            map_config: MapConfig::default(),
            store_config: StoreConfig::default(),
        }
    }
}

/// Configuración del widget de mapa (centro, zoom y tamaño del contenedor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub width: String,
    pub height: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center_lat: DEFAULT_CENTER_LAT,
            center_lng: DEFAULT_CENTER_LNG,
            zoom: DEFAULT_ZOOM,
            width: "100vw".to_string(),
            height: "100vh".to_string(),
        }
    }
}

/// Conexión al almacén de documentos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: None,
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn is_configured(&self) -> bool {
        !self.project_id.is_empty() && !self.collection.is_empty()
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ENABLE_LOGGING"),
            option_env!("MAP_API_KEY"),
            option_env!("FIRESTORE_PROJECT_ID"),
            option_env!("FIRESTORE_API_KEY"),
            option_env!("MARKERS_COLLECTION"),
            option_env!("MAP_CENTER_LAT"),
            option_env!("MAP_CENTER_LNG"),
            option_env!("MAP_ZOOM"),
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn from_values(
        enable_logging: Option<&str>,
        map_api_key: Option<&str>,
        project_id: Option<&str>,
        store_api_key: Option<&str>,
        collection: Option<&str>,
        center_lat: Option<&str>,
        center_lng: Option<&str>,
        zoom: Option<&str>,
    ) -> Self {
        Self {
            enable_logging: enable_logging
                .unwrap_or("true").parse().unwrap_or(true),
            map_api_key: map_api_key.unwrap_or("").to_string(),
            map_config: MapConfig {
                center_lat: center_lat
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_CENTER_LAT),
                center_lng: center_lng
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_CENTER_LNG),
                zoom: zoom
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_ZOOM),
                ..MapConfig::default()
            },
            store_config: StoreConfig {
                project_id: project_id.unwrap_or("").to_string(),
                api_key: store_api_key
                    .filter(|k| !k.is_empty())
                    .map(|k| k.to_string()),
                collection: collection
                    .filter(|c| !c.is_empty())
                    .unwrap_or(DEFAULT_COLLECTION)
                    .to_string(),
            },
        }
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Error
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
