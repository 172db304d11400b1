use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct BookDoc {
    /// UUID v4, assigned by the server
    pub id: String,
    pub title: String,
    pub author: String,
    /// `null` when unknown
    pub year: Option<i32>,
}

#[derive(ToSchema)]
pub struct CreateBookRequestDoc {
    pub title: String,
    pub author: String,
    /// 0 up to the current year
    pub year: Option<i32>,
}

#[derive(ToSchema)]
pub struct DeletedBookDoc {
    pub message: String,
    pub book: BookDoc,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    pub message: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::welcome,
        crate::routes::health,
        crate::routes::books::list_books,
        crate::routes::books::get_book,
        crate::routes::books::create_book,
        crate::routes::books::delete_book,
    ),
    components(
        schemas(
            HealthResponse,
            BookDoc,
            CreateBookRequestDoc,
            DeletedBookDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "libros")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_book_route() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/libros"));
        assert!(paths.contains_key("/api/libros/{id}"));
        assert!(paths["/api/libros"].get("post").is_some());
        assert!(paths["/api/libros/{id}"].get("delete").is_some());
    }
}
