pub mod mc;
pub mod ping;
pub mod user;

use crate::database::catalog::CatalogStore;
use crate::database::users::UserStore;

/// Shared handler state: the two stores, constructed once at startup and
/// injected read-only into every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogStore,
    pub users: UserStore,
}
