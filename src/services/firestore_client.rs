// ============================================================================
// FIRESTORE CLIENT - SOLO COMUNICACIÓN HTTP (REST v1, stateless)
// ============================================================================
// NO tiene lógica de negocio: lista y crea documentos de una colección
// ============================================================================

use std::collections::HashMap;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use crate::config::StoreConfig;
use crate::models::{NewPointMarker, PointMarker};
use super::marker_store::{MarkerStore, StoreError};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const PAGE_SIZE: &str = "300";

/// Valor tipado de Firestore. Solo nos interesan string / integer / double;
/// el resto de tipos se ignora al deserializar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirestoreValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    /// Firestore envía los int64 como string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub integer_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_value: Option<f64>,
}

impl FirestoreValue {
    fn string(value: &str) -> Self {
        Self {
            string_value: Some(value.to_string()),
            ..Self::default()
        }
    }

    fn integer(value: i64) -> Self {
        Self {
            integer_value: Some(value.to_string()),
            ..Self::default()
        }
    }

    fn as_i64(&self) -> Option<i64> {
        if let Some(raw) = &self.integer_value {
            return raw.parse().ok();
        }
        self.double_value
            .filter(|v| v.is_finite())
            .map(|v| v as i64)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FirestoreDocument {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub fields: HashMap<String, FirestoreValue>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<FirestoreDocument>,
    #[serde(default)]
    next_page_token: Option<String>,
}

impl FirestoreDocument {
    pub fn from_new_marker(marker: &NewPointMarker) -> Self {
        let mut fields = HashMap::new();
        fields.insert("location".to_string(), FirestoreValue::string(&marker.location));
        fields.insert("timeStamp".to_string(), FirestoreValue::integer(marker.time_stamp));
        Self {
            name: String::new(),
            fields,
        }
    }

    /// Id = último segmento de `projects/../documents/<colección>/<id>`
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or_default()
    }

    /// Documento -> PointMarker. Campos ausentes quedan vacíos; la validación
    /// de `location` se hace al construir los marcadores.
    pub fn into_point_marker(self) -> PointMarker {
        let location = self.fields
            .get("location")
            .and_then(|v| v.string_value.clone())
            .unwrap_or_default();
        let time_stamp = self.fields
            .get("timeStamp")
            .and_then(FirestoreValue::as_i64)
            .unwrap_or_else(|| {
                log::warn!("⚠️ Documento {} sin timeStamp válido", self.name);
                0
            });

        PointMarker {
            id: self.id().to_string(),
            location,
            time_stamp,
        }
    }
}

/// Cliente Firestore - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct FirestoreClient {
    config: StoreConfig,
}

impl FirestoreClient {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// URL de la colección configurada
    pub fn collection_url(&self) -> Result<String, StoreError> {
        if !self.config.is_configured() {
            return Err(StoreError::NotConfigured);
        }
        Ok(format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            FIRESTORE_BASE_URL, self.config.project_id, self.config.collection
        ))
    }

    fn auth_params(&self) -> Vec<(&'static str, String)> {
        self.config.api_key
            .as_ref()
            .map(|key| vec![("key", key.clone())])
            .unwrap_or_default()
    }

    async fn fetch_page(&self, url: &str, page_token: Option<&str>) -> Result<ListDocumentsResponse, StoreError> {
        let mut params = self.auth_params();
        params.push(("pageSize", PAGE_SIZE.to_string()));
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let response = Request::get(url)
            .query(params.iter().map(|(k, v)| (*k, v.as_str())))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await
                .unwrap_or_else(|_| response.status_text());
            return Err(StoreError::Http { status, message });
        }

        response.json::<ListDocumentsResponse>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))
    }
}

impl MarkerStore for FirestoreClient {
    async fn fetch_all(&self) -> Result<Vec<PointMarker>, StoreError> {
        let url = self.collection_url()?;
        let mut markers = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.fetch_page(&url, page_token.as_deref()).await?;
            markers.extend(page.documents.into_iter().map(FirestoreDocument::into_point_marker));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        log::info!("📥 Firestore: {} documentos en {}", markers.len(), self.config.collection);
        Ok(markers)
    }

    async fn append(&self, marker: NewPointMarker) -> Result<String, StoreError> {
        let url = self.collection_url()?;
        let body = FirestoreDocument::from_new_marker(&marker);

        log::info!("📤 Firestore: creando documento en {} ({})", self.config.collection, marker.location);

        let response = Request::post(&url)
            .query(self.auth_params().iter().map(|(k, v)| (*k, v.as_str())))
            .json(&body)
            .map_err(|e| StoreError::Parse(e.to_string()))?
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let message = response.text().await
                .unwrap_or_else(|_| response.status_text());
            return Err(StoreError::Http { status, message });
        }

        let created = response.json::<FirestoreDocument>()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;

        Ok(created.id().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LatLng;

    fn config(project: &str) -> StoreConfig {
        StoreConfig {
            project_id: project.to_string(),
            api_key: Some("k".to_string()),
            collection: "numberedQuestMarkers".to_string(),
        }
    }

    #[test]
    fn collection_url_requires_a_project() {
        let client = FirestoreClient::new(config(""));
        assert_eq!(client.collection_url(), Err(StoreError::NotConfigured));

        let client = FirestoreClient::new(config("quest"));
        assert_eq!(
            client.collection_url().unwrap(),
            "https://firestore.googleapis.com/v1/projects/quest/databases/(default)/documents/numberedQuestMarkers"
        );
    }

    #[test]
    fn new_marker_is_encoded_as_typed_fields() {
        let marker = NewPointMarker::at(LatLng::new(28.7, 77.1), 1_700_000_000_123);
        let json = serde_json::to_value(FirestoreDocument::from_new_marker(&marker)).unwrap();

        assert_eq!(json["fields"]["location"]["stringValue"], "28.7,77.1");
        assert_eq!(json["fields"]["timeStamp"]["integerValue"], "1700000000123");
        assert!(json.get("name").is_none());
    }

    #[test]
    fn list_response_decodes_documents_and_ids() {
        let raw = r#"{
            "documents": [
                {
                    "name": "projects/quest/databases/(default)/documents/numberedQuestMarkers/abc123",
                    "fields": {
                        "location": { "stringValue": "10,20" },
                        "timeStamp": { "integerValue": "42" }
                    },
                    "createTime": "2024-01-01T00:00:00Z"
                },
                {
                    "name": "projects/quest/databases/(default)/documents/numberedQuestMarkers/def456",
                    "fields": {
                        "location": { "stringValue": "30,40" },
                        "timeStamp": { "doubleValue": 43.0 },
                        "note": { "booleanValue": true }
                    }
                }
            ],
            "nextPageToken": "next"
        }"#;

        let page: ListDocumentsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("next"));

        let markers: Vec<PointMarker> = page.documents
            .into_iter()
            .map(FirestoreDocument::into_point_marker)
            .collect();
        assert_eq!(markers[0], PointMarker { id: "abc123".into(), location: "10,20".into(), time_stamp: 42 });
        assert_eq!(markers[1], PointMarker { id: "def456".into(), location: "30,40".into(), time_stamp: 43 });
    }

    #[test]
    fn empty_collection_decodes_to_no_documents() {
        let page: ListDocumentsResponse = serde_json::from_str("{}").unwrap();
        assert!(page.documents.is_empty());
        assert!(page.next_page_token.is_none());
    }

    #[test]
    fn document_without_fields_keeps_an_empty_location() {
        let doc = FirestoreDocument {
            name: "projects/p/databases/(default)/documents/c/x".to_string(),
            fields: HashMap::new(),
        };
        let marker = doc.into_point_marker();
        assert_eq!(marker.id, "x");
        assert_eq!(marker.location, "");
        assert_eq!(marker.time_stamp, 0);
    }
}
