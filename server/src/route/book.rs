use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookTransformer, CreateBookRequest, GetBookRequest};
use crate::response::BookPresenter;
use application::service::BooksUseCase;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use kernel::interface::port::BookPort;

pub trait BookRouter {
    fn route_book(self) -> Self;
}

impl<P: BookPort> BookRouter for Router<AppModule<P>> {
    fn route_book(self) -> Self {
        self.route(
            "/api/v1/book",
            post(
                |State(module): State<AppModule<P>>,
                 req: Result<Json<CreateBookRequest>, JsonRejection>| async move {
                    // Unreadable bodies count as missing fields.
                    let req = req.map(|Json(req)| req).unwrap_or_default();
                    match Controller::new(BookTransformer, BookPresenter).try_intake(req) {
                        Ok(transformed) => transformed
                            .handle(|dto| async move { module.save(dto).await })
                            .await
                            .map_err(ErrorStatus::from),
                        Err(e) => Err(ErrorStatus::from(e)),
                    }
                },
            ),
        )
        .route(
            "/api/v1/book/:id",
            get(
                |State(module): State<AppModule<P>>, Path(id): Path<String>| async move {
                    Controller::new(BookTransformer, BookPresenter)
                        .intake(GetBookRequest::new(id))
                        .handle(|dto| async move { module.get(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                        .and_then(|res| res.ok_or(ErrorStatus::NotFound))
                },
            ),
        )
    }
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::Router;
    use driver::database::EchoBookRepository;
    use error_stack::Report;
    use http_body_util::BodyExt;
    use kernel::interface::port::BookPort;
    use kernel::prelude::entity::{Book, BookId};
    use kernel::KernelError;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::handler::AppModule;
    use crate::route::BookRouter;

    #[derive(Default, Clone)]
    struct InMemoryBookRepository {
        books: Arc<Mutex<HashMap<BookId, Book>>>,
    }

    #[async_trait::async_trait]
    impl BookPort for InMemoryBookRepository {
        async fn save(&self, book: Book) -> error_stack::Result<Book, KernelError> {
            self.books
                .lock()
                .unwrap()
                .insert(book.id().clone(), book.clone());
            Ok(book)
        }

        async fn find(&self, id: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
            Ok(self.books.lock().unwrap().get(id).cloned())
        }
    }

    struct BrokenBookRepository;

    #[async_trait::async_trait]
    impl BookPort for BrokenBookRepository {
        async fn save(&self, _: Book) -> error_stack::Result<Book, KernelError> {
            Err(Report::new(KernelError::Internal).attach_printable("store unreachable"))
        }

        async fn find(&self, _: &BookId) -> error_stack::Result<Option<Book>, KernelError> {
            Err(Report::new(KernelError::Timeout))
        }
    }

    fn app<P: BookPort>(port: P) -> Router {
        Router::new()
            .route_book()
            .with_state(AppModule::new(port))
    }

    fn post(body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/api/v1/book")
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .unwrap()
    }

    fn get(id: &str) -> Request<Body> {
        Request::builder()
            .method(Method::GET)
            .uri(format!("/api/v1/book/{id}"))
            .body(Body::empty())
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_echoes_submitted_book() {
        let body = json!({ "bookId": "b1", "title": "Dune" }).to_string();
        let (status, json) = send(app(EchoBookRepository), post(body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "bookId": "b1", "title": "Dune" }));
    }

    #[tokio::test]
    async fn create_without_title_is_bad_request() {
        let body = json!({ "bookId": "b2" }).to_string();
        let (status, json) = send(app(EchoBookRepository), post(body)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json, json!({ "error": "Please provide bookId and title" }));
    }

    #[tokio::test]
    async fn rejected_create_does_not_touch_store() {
        let repository = InMemoryBookRepository::default();
        for body in [
            json!({ "title": "Dune" }).to_string(),
            json!({}).to_string(),
            json!({ "bookId": "", "title": "Dune" }).to_string(),
            json!({ "bookId": 5, "title": "Dune" }).to_string(),
            "not json".to_string(),
        ] {
            let (status, json) = send(app(repository.clone()), post(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json["error"], "Please provide bookId and title");
        }
        assert!(repository.books.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_returns_stored_book() {
        let repository = InMemoryBookRepository::default();
        let body = json!({ "bookId": "b1", "title": "Dune" }).to_string();
        let (status, _) = send(app(repository.clone()), post(body)).await;
        assert_eq!(status, StatusCode::OK);

        let (status, json) = send(app(repository), get("b1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "bookId": "b1", "title": "Dune" }));
    }

    #[tokio::test]
    async fn get_unknown_book_is_not_found() {
        let (status, json) = send(app(InMemoryBookRepository::default()), get("nope")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json, json!({ "error": "Book does not exist" }));
    }

    #[tokio::test]
    async fn echo_store_always_returns_sentinel() {
        let body = json!({ "bookId": "b1", "title": "Dune" }).to_string();
        send(app(EchoBookRepository), post(body)).await;

        let (status, json) = send(app(EchoBookRepository), get("b1")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, json!({ "bookId": "test", "title": "test" }));
    }

    #[tokio::test]
    async fn store_failures_are_server_errors() {
        let body = json!({ "bookId": "b1", "title": "Dune" }).to_string();
        let (status, json) = send(app(BrokenBookRepository), post(body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({ "error": "Internal server error" }));

        let (status, _) = send(app(BrokenBookRepository), get("b1")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
