// ============================================================================
// MARKER STORE - Contrato con el almacén de documentos remoto
// ============================================================================
// Solo dos operaciones: leer toda la colección y añadir un documento.
// ============================================================================

use crate::models::{NewPointMarker, PointMarker};

/// Error del almacén
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    NotConfigured,
    Network(String),
    Http { status: u16, message: String },
    Parse(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotConfigured => write!(f, "Store is not configured"),
            StoreError::Network(msg) => write!(f, "Network error: {}", msg),
            StoreError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            StoreError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Colección de PointMarkers. Todo corre en el hilo de UI, por eso los
/// futures no necesitan ser `Send`.
#[allow(async_fn_in_trait)]
pub trait MarkerStore {
    /// Todos los documentos, en el orden que devuelva el almacén
    async fn fetch_all(&self) -> Result<Vec<PointMarker>, StoreError>;

    /// Crear un documento; devuelve el id asignado por el almacén
    async fn append(&self, marker: NewPointMarker) -> Result<String, StoreError>;
}
