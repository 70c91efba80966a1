//! Admin pages.
//!
//! The admin UI proper is rendered elsewhere; these handlers only anchor the
//! guarded routes so the session guard has something to protect.

use salvo::prelude::*;

/// Admin dashboard placeholder, reachable only with a session cookie.
#[salvo::handler]
pub(crate) async fn dashboard(res: &mut Response) {
    res.render("BengolSale admin");
}

/// Login page anchor, exempt from the session guard.
#[salvo::handler]
pub(crate) async fn login(res: &mut Response) {
    res.render("BengolSale admin login");
}
