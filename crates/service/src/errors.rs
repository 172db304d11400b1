use thiserror::Error;

/// Failures of the book operations. `Display` is the human-readable message
/// returned to clients; storage variants keep the underlying detail for logs.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Error al leer los datos de libros")]
    StorageRead { detail: String },
    #[error("Error al guardar los datos de libros")]
    StorageWrite { detail: String },
    #[error("ID inválido")]
    InvalidId,
    #[error("Libro no encontrado")]
    NotFound,
    #[error("Los campos titulo y autor son obligatorios")]
    MissingField,
    #[error("Titulo y autor no validos")]
    InvalidType,
    #[error("El año debe ser un número válido")]
    InvalidYear,
    #[error("Ya existe un libro con el mismo título y año")]
    Duplicate,
}

impl ServiceError {
    pub fn read(detail: impl ToString) -> Self { Self::StorageRead { detail: detail.to_string() } }

    pub fn write(detail: impl ToString) -> Self { Self::StorageWrite { detail: detail.to_string() } }

    /// HTTP status code this failure maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::StorageRead { .. } | Self::StorageWrite { .. } => 500,
            Self::InvalidId | Self::MissingField | Self::InvalidType | Self::InvalidYear => 400,
            Self::NotFound => 404,
            Self::Duplicate => 409,
        }
    }

    /// Underlying cause for storage failures, `None` for request errors.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::StorageRead { detail } | Self::StorageWrite { detail } => Some(detail),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_per_variant() {
        assert_eq!(ServiceError::read("x").status_code(), 500);
        assert_eq!(ServiceError::write("x").status_code(), 500);
        assert_eq!(ServiceError::InvalidId.status_code(), 400);
        assert_eq!(ServiceError::NotFound.status_code(), 404);
        assert_eq!(ServiceError::MissingField.status_code(), 400);
        assert_eq!(ServiceError::InvalidType.status_code(), 400);
        assert_eq!(ServiceError::InvalidYear.status_code(), 400);
        assert_eq!(ServiceError::Duplicate.status_code(), 409);
    }

    #[test]
    fn storage_detail_stays_out_of_message() {
        let e = ServiceError::read("No such file or directory (os error 2)");
        assert_eq!(e.to_string(), "Error al leer los datos de libros");
        assert_eq!(e.detail(), Some("No such file or directory (os error 2)"));
        assert_eq!(ServiceError::NotFound.detail(), None);
    }
}
