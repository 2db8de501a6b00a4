//! ProyectaLia Hub client core.
//!
//! Everything here is DOM-free: the typed API client, the session store,
//! the route guard and the fetch/eligibility state the Leptos frontend
//! drives. The browser-specific adapters (fetch, local storage) live in the
//! `proyectalia-frontend` crate and plug in through [`request::HttpClient`]
//! and [`session::KeyValueStore`].

pub mod access;
pub mod api;
pub mod config;
pub mod error;
pub mod fetch;
pub mod guard;
pub mod request;
pub mod session;

pub use proyectalia_shared as shared;

pub use access::{ApplicationGate, ApplyDecision, can_edit};
pub use api::ApiClient;
pub use config::{ClientConfig, StorageKeys};
pub use error::{ApiError, ApiResult};
pub use fetch::{ErrorText, FetchState, Ticket};
pub use guard::{Access, AuthStatus, GuardDecision, RedirectTarget, RouteGuard};
pub use request::{HttpClient, HttpRequest, HttpResponse};
pub use session::{KeyValueStore, MemoryStore, Session, SessionStore};

#[cfg(not(target_arch = "wasm32"))]
pub use request::ReqwestHttpClient;
