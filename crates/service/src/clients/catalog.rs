use async_trait::async_trait;
use common::observability::UPSTREAM_ERRORS_TOTAL;
use common::{ErrorCode, ServiceCallResult, ServiceError};
use models::{BookRecord, NewBook};
use tonic::transport::{Channel, Endpoint};
use tonic::{Code, Status};

use super::proto::book as pb;
use super::proto::book::book_service_client::BookServiceClient;
use super::retry::{retry_with_policy, RetryPolicy};
use super::HealthProbe;

/// Adapter over the catalog service's gRPC contract. Retries transient
/// transport statuses under the configured policy and normalizes everything
/// else into [`ServiceError`].
#[derive(Clone)]
pub struct CatalogClient {
    inner: BookServiceClient<Channel>,
    retry: RetryPolicy,
}

impl CatalogClient {
    /// The channel connects lazily on first use, so construction at startup
    /// cannot fail on an unreachable backend.
    pub fn new(addr: String, retry: RetryPolicy) -> Result<Self, tonic::transport::Error> {
        let channel = Endpoint::from_shared(addr)?.connect_lazy();
        Ok(Self { inner: BookServiceClient::new(channel), retry })
    }

    pub async fn get_all_books(&self) -> ServiceCallResult<Vec<BookRecord>> {
        let list = self
            .call(|mut c| async move { c.get_all_books(pb::Empty {}).await })
            .await?;
        Ok(list.books.into_iter().map(book_record_from_wire).collect())
    }

    pub async fn get_book(&self, id: i64) -> ServiceCallResult<BookRecord> {
        let book = self
            .call(move |mut c| async move { c.get_book(pb::BookIdRequest { id }).await })
            .await?;
        Ok(book_record_from_wire(book))
    }

    pub async fn get_books_by_user(&self, user_id: i64) -> ServiceCallResult<Vec<BookRecord>> {
        let list = self
            .call(move |mut c| async move {
                c.get_books_by_user(pb::UserBooksRequest { user_id }).await
            })
            .await?;
        Ok(list.books.into_iter().map(book_record_from_wire).collect())
    }

    pub async fn create_book(&self, input: &NewBook) -> ServiceCallResult<BookRecord> {
        let request = create_request_from_input(input);
        let book = self
            .call(move |mut c| {
                let request = request.clone();
                async move { c.create_book(request).await }
            })
            .await?;
        Ok(book_record_from_wire(book))
    }

    pub async fn update_book(&self, id: i64, input: &NewBook) -> ServiceCallResult<String> {
        let request = update_request_from_input(id, input);
        let reply = self
            .call(move |mut c| {
                let request = request.clone();
                async move { c.update_book(request).await }
            })
            .await?;
        Ok(reply.message)
    }

    pub async fn delete_book(&self, id: i64) -> ServiceCallResult<String> {
        let reply = self
            .call(move |mut c| async move { c.delete_book(pb::BookIdRequest { id }).await })
            .await?;
        Ok(reply.message)
    }

    async fn call<T, F, Fut>(&self, mut op: F) -> ServiceCallResult<T>
    where
        F: FnMut(BookServiceClient<Channel>) -> Fut,
        Fut: std::future::Future<Output = Result<tonic::Response<T>, Status>>,
    {
        retry_with_policy(&self.retry, || op(self.inner.clone()), is_transient_status)
            .await
            .map(|resp| resp.into_inner())
            .map_err(|status| {
                UPSTREAM_ERRORS_TOTAL.inc();
                normalize_status(status)
            })
    }
}

#[async_trait]
impl HealthProbe for CatalogClient {
    fn name(&self) -> &'static str {
        "book-service"
    }

    async fn probe(&self) -> ServiceCallResult<()> {
        let mut client = self.inner.clone();
        client
            .get_all_books(pb::Empty {})
            .await
            .map_err(normalize_status)?;
        Ok(())
    }
}

fn is_transient_status(status: &Status) -> bool {
    matches!(status.code(), Code::Unavailable | Code::DeadlineExceeded)
}

fn normalize_status(status: Status) -> ServiceError {
    let code = match status.code() {
        Code::NotFound => ErrorCode::NotFound,
        Code::InvalidArgument => ErrorCode::InvalidArgument,
        Code::Unavailable => ErrorCode::Unavailable,
        Code::DeadlineExceeded => ErrorCode::Timeout,
        _ => ErrorCode::Internal,
    };
    ServiceError::new(code, status.message().to_string())
}

fn book_record_from_wire(book: pb::Book) -> BookRecord {
    BookRecord {
        id: book.id,
        title: book.title,
        author: book.author,
        isbn: if book.isbn.is_empty() { None } else { Some(book.isbn) },
        user_id: book.user_id,
    }
}

fn create_request_from_input(input: &NewBook) -> pb::CreateBookRequest {
    pb::CreateBookRequest {
        title: input.title.clone(),
        author: input.author.clone(),
        isbn: input.isbn.clone().unwrap_or_default(),
        user_id: input.user_id.unwrap_or_default(),
    }
}

fn update_request_from_input(id: i64, input: &NewBook) -> pb::UpdateBookRequest {
    pb::UpdateBookRequest {
        id,
        title: input.title.clone(),
        author: input.author.clone(),
        isbn: input.isbn.clone().unwrap_or_default(),
        user_id: input.user_id.unwrap_or_default(),
    }
}
