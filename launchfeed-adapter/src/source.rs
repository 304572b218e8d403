use alloc::vec::Vec;
use core::future::Future;

use launchfeed::{Item, PageRequest, TransportError};

/// The remote, read-only collection endpoint.
///
/// Implementations return one ordered page (possibly empty) or a transport failure. They
/// must not retry or paginate on their own; the controller decides what to ask for.
///
/// Any `Fn(u64, usize) -> impl Future<Output = Result<Vec<Item>, TransportError>>` is a
/// source, which keeps tests and small adapters closure-based.
pub trait PageSource {
    fn fetch_page(
        &self,
        offset: u64,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Item>, TransportError>>;
}

impl<F, Fut> PageSource for F
where
    F: Fn(u64, usize) -> Fut,
    Fut: Future<Output = Result<Vec<Item>, TransportError>>,
{
    fn fetch_page(
        &self,
        offset: u64,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<Item>, TransportError>> {
        self(offset, limit)
    }
}

/// A resolved fetch, ready to hand back to the controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fetched {
    pub request: PageRequest,
    pub result: Result<Vec<Item>, TransportError>,
}

/// Performs `request` against `source`.
///
/// This does not borrow the controller, so a UI can keep accepting triggers (including a
/// superseding `reset`) while the fetch is outstanding.
pub async fn fetch<S: PageSource + ?Sized>(source: &S, request: PageRequest) -> Fetched {
    let result = source.fetch_page(request.offset(), request.limit()).await;
    Fetched { request, result }
}
