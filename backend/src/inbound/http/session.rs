//! Session helpers to keep HTTP handlers free of framework-specific logic.
//!
//! Wraps the Actix session so handlers only read and write the visitor's
//! [`BookmarkSet`].

use actix_session::Session;
use actix_web::{FromRequest, HttpRequest, dev::Payload};
use futures_util::future::LocalBoxFuture;
use tracing::warn;

use crate::domain::{BookmarkSet, Error};

/// Session key holding the read-later identifiers as a JSON integer array.
pub(crate) const STORED_POSTS_KEY: &str = "stored_posts";

/// Newtype wrapper exposing bookmark operations on the session.
#[derive(Clone)]
pub struct SessionContext(Session);

impl SessionContext {
    pub fn new(session: Session) -> Self {
        Self(session)
    }

    /// Bookmarks stored in the session; empty when absent or unreadable.
    pub fn bookmarks(&self) -> BookmarkSet {
        match self.0.get::<BookmarkSet>(STORED_POSTS_KEY) {
            Ok(stored) => stored.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable read-later session value");
                BookmarkSet::default()
            }
        }
    }

    /// Replace the stored bookmarks.
    pub fn persist_bookmarks(&self, bookmarks: &BookmarkSet) -> Result<(), Error> {
        self.0
            .insert(STORED_POSTS_KEY, bookmarks)
            .map_err(|error| Error::internal(format!("failed to persist session: {error}")))
    }
}

impl FromRequest for SessionContext {
    type Error = actix_web::Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let fut = Session::from_request(req, payload);
        Box::pin(async move { fut.await.map(SessionContext::new) })
    }
}
