//! Routing table mapping paths and methods to handlers.

use actix_web::web;

use super::health::{live, ready};
use super::posts::{all_posts, post_detail, starting_page, submit_comment};
use super::read_later::{read_later, toggle_read_later};

/// Register the blog views and health probes.
///
/// Session middleware must wrap the app: the detail, comment and read-later
/// handlers extract [`super::session::SessionContext`].
///
/// # Examples
/// ```
/// use actix_web::App;
/// use blog::inbound::http::routes::configure;
///
/// let _app = App::new().configure(configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(starting_page))
        .route("/posts", web::get().to(all_posts))
        .service(
            web::resource("/posts/{slug}")
                .route(web::get().to(post_detail))
                .route(web::post().to(submit_comment)),
        )
        .service(
            web::resource("/read-later")
                .route(web::get().to(read_later))
                .route(web::post().to(toggle_read_later)),
        )
        .service(ready)
        .service(live);
}
