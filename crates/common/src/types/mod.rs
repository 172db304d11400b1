use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Index of the public book endpoints, served at `/`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Endpoints {
    pub get_all: &'static str,
    pub get_by_id: &'static str,
    pub create: &'static str,
    pub delete: &'static str,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            message: "Bienvenido a la API de Biblioteca Aurora",
            endpoints: Endpoints {
                get_all: "GET /api/libros",
                get_by_id: "GET /api/libros/:id",
                create: "POST /api/libros",
                delete: "DELETE /api/libros/:id",
            },
        }
    }
}

/// JSON error envelope: `{"error": ..., "message": ...}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into(), message: None }
    }

    pub fn with_message(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self { error: error.into(), message: Some(message.into()) }
    }
}
