//! End-to-end HTTP flows over the in-process store.
//!
//! Posts are seeded through `PublishingService`, then driven through the real
//! routing table, session middleware and trace middleware.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::{Cookie, Key};
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

use blog::Trace;
use blog::domain::{
    AuthorId, Error, ErrorCode, Post, PostDraft, PublishingService, TRACE_ID_HEADER,
};
use blog::inbound::http::dto::{PostDetailResponse, PostListResponse, ReadLaterResponse};
use blog::inbound::http::routes::configure;
use blog::inbound::http::state::HttpState;
use blog::outbound::memory::InMemoryBlogStore;

type Publishing = PublishingService<InMemoryBlogStore, InMemoryBlogStore, InMemoryBlogStore>;

struct Site {
    store: Arc<InMemoryBlogStore>,
    publishing: Publishing,
    key: Key,
}

#[fixture]
fn site() -> Site {
    let store = Arc::new(InMemoryBlogStore::new());
    let publishing = PublishingService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        Arc::new(DefaultClock),
    );
    Site {
        store,
        publishing,
        key: Key::generate(),
    }
}

impl Site {
    async fn author(&self) -> AuthorId {
        self.publishing
            .register_author("John", "Doe", "john@example.com")
            .await
            .expect("author registered")
            .id
    }

    async fn publish(&self, author_id: AuthorId, slug: &str, day: u32) -> Post {
        let date = Utc
            .with_ymd_and_hms(2025, 3, day, 12, 0, 0)
            .single()
            .expect("valid date");
        self.publishing
            .publish_post(PostDraft {
                title: format!("Post {slug}"),
                excerpt: format!("About {slug}"),
                image_name: Some(format!("{slug}.png")),
                date: Some(date),
                slug: slug.to_owned(),
                content: "Content that is comfortably long enough".to_owned(),
                author_id,
            })
            .await
            .expect("post published")
    }

    fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        let state = HttpState::with_repositories(
            self.store.clone(),
            self.store.clone(),
            self.store.clone(),
        );
        let session = SessionMiddleware::builder(CookieSessionStore::default(), self.key.clone())
            .cookie_name("session".to_owned())
            .cookie_secure(false)
            .build();
        App::new()
            .app_data(web::Data::new(state))
            .wrap(session)
            .wrap(Trace)
            .configure(configure)
    }
}

fn session_cookie<B>(res: &ServiceResponse<B>) -> Option<Cookie<'static>> {
    res.response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .map(Cookie::into_owned)
}

fn location<B>(res: &ServiceResponse<B>) -> Option<String> {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

fn slugs(posts: &[blog::inbound::http::dto::PostDto]) -> Vec<&str> {
    posts.iter().map(|post| post.slug.as_str()).collect()
}

#[rstest]
#[actix_web::test]
async fn listings_are_newest_first_and_the_start_page_keeps_three(site: Site) {
    let author = site.author().await;
    for (slug, day) in [("one", 1), ("four", 4), ("two", 2), ("five", 5), ("three", 3)] {
        site.publish(author, slug, day).await;
    }
    let app = test::init_service(site.app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let latest: PostListResponse = test::read_body_json(res).await;
    assert_eq!(slugs(&latest.posts), vec!["five", "four", "three"]);

    let res = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
    let all: PostListResponse = test::read_body_json(res).await;
    assert_eq!(slugs(&all.posts), vec!["five", "four", "three", "two", "one"]);
    let first = all.posts.first().expect("at least one post");
    assert_eq!(first.author.full_name, "John Doe");
}

#[rstest]
#[actix_web::test]
async fn unknown_slugs_are_404_with_a_trace_id(site: Site) {
    let app = test::init_service(site.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/posts/no-such-post").to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let header_trace = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace header");
    let body: Error = test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::NotFound);
    assert_eq!(body.trace_id(), Some(header_trace.as_str()));
}

#[rstest]
#[actix_web::test]
async fn detail_shows_a_blank_form_and_tags_by_caption(site: Site) {
    let author = site.author().await;
    let post = site.publish(author, "tagged", 1).await;
    let rust = site.publishing.create_tag("Rust").await.expect("tag");
    let actix = site.publishing.create_tag("Actix").await.expect("tag");
    site.publishing
        .tag_post(post.id, &[rust.id, actix.id])
        .await
        .expect("tagged");
    let app = test::init_service(site.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/posts/tagged").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let detail: PostDetailResponse = test::read_body_json(res).await;

    let captions: Vec<_> = detail.post_tags.iter().map(|tag| tag.caption.as_str()).collect();
    assert_eq!(captions, vec!["Actix", "Rust"]);
    assert!(detail.comments.is_empty());
    assert!(!detail.is_saved);
    assert!(!detail.comment_form.has_errors);
    let labels: Vec<_> = detail
        .comment_form
        .fields
        .iter()
        .map(|field| (field.name.as_str(), field.label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("user_name", "Your Name"),
            ("user_mail", "Your Email"),
            ("text", "Your Comment"),
        ]
    );
}

#[rstest]
#[actix_web::test]
async fn valid_comments_redirect_and_appear_newest_first(site: Site) {
    let author = site.author().await;
    site.publish(author, "chatty", 1).await;
    let app = test::init_service(site.app()).await;

    for text in ["First!", "Second thoughts"] {
        let res = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/posts/chatty")
                .set_form([
                    ("user_name", "Reader"),
                    ("user_mail", "reader@example.com"),
                    ("text", text),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res).as_deref(), Some("/posts/chatty"));
    }

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/posts/chatty").to_request(),
    )
    .await;
    let detail: PostDetailResponse = test::read_body_json(res).await;
    let texts: Vec<_> = detail.comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["Second thoughts", "First!"]);
}

#[rstest]
#[actix_web::test]
async fn invalid_comments_re_render_with_field_errors(site: Site) {
    let author = site.author().await;
    site.publish(author, "strict", 1).await;
    let app = test::init_service(site.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/posts/strict")
            .set_form([("user_name", "Reader"), ("user_mail", "invalid-email")])
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::OK);
    let detail: PostDetailResponse = test::read_body_json(res).await;
    assert!(detail.comment_form.has_errors);
    assert!(detail.comments.is_empty());
    let field = |name: &str| {
        detail
            .comment_form
            .fields
            .iter()
            .find(|field| field.name == name)
            .expect("form field")
    };
    assert!(field("user_name").errors.is_empty());
    assert_eq!(field("user_name").value, "Reader");
    assert!(!field("user_mail").errors.is_empty());
    assert_eq!(field("user_mail").value, "invalid-email");
    assert!(!field("text").errors.is_empty());
}

#[rstest]
#[actix_web::test]
async fn read_later_toggles_through_the_session_cookie(site: Site) {
    let author = site.author().await;
    let first = site.publish(author, "first", 1).await;
    let second = site.publish(author, "second", 2).await;
    let app = test::init_service(site.app()).await;

    let res = test::call_service(&app, test::TestRequest::get().uri("/read-later").to_request())
        .await;
    let empty: ReadLaterResponse = test::read_body_json(res).await;
    assert!(empty.posts.is_empty());
    assert!(!empty.has_posts);

    let mut cookie: Option<Cookie<'static>> = None;
    for post_id in [second.id, first.id] {
        let mut req = test::TestRequest::post()
            .uri("/read-later")
            .set_form([("post_id", post_id.to_string())]);
        if let Some(cookie) = cookie.clone() {
            req = req.cookie(cookie);
        }
        let res = test::call_service(&app, req.to_request()).await;
        assert_eq!(res.status(), StatusCode::FOUND);
        assert_eq!(location(&res).as_deref(), Some("/"));
        cookie = session_cookie(&res).or(cookie);
    }
    let cookie = cookie.expect("session cookie");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/read-later")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let saved: ReadLaterResponse = test::read_body_json(res).await;
    assert!(saved.has_posts);
    assert_eq!(slugs(&saved.posts), vec!["first", "second"]);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/posts/first")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let detail: PostDetailResponse = test::read_body_json(res).await;
    assert!(detail.is_saved);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/read-later")
            .cookie(cookie)
            .set_form([("post_id", first.id.to_string())])
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&res).expect("updated session cookie");
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/read-later")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let remaining: ReadLaterResponse = test::read_body_json(res).await;
    assert_eq!(slugs(&remaining.posts), vec!["second"]);
}

#[rstest]
#[actix_web::test]
async fn deleted_posts_drop_out_of_the_list_but_keep_has_posts(site: Site) {
    let author = site.author().await;
    let doomed = site.publish(author, "doomed", 1).await;
    let app = test::init_service(site.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/read-later")
            .set_form([("post_id", doomed.id.to_string())])
            .to_request(),
    )
    .await;
    let cookie = session_cookie(&res).expect("session cookie");
    site.publishing
        .delete_post(doomed.id)
        .await
        .expect("deleted");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/read-later")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let stored: ReadLaterResponse = test::read_body_json(res).await;
    assert!(stored.posts.is_empty());
    assert!(stored.has_posts);
}

#[rstest]
#[case(&[])]
#[case(&[("post_id", "abc")])]
#[actix_web::test]
async fn malformed_toggles_are_rejected(site: Site, #[case] form: &[(&str, &str)]) {
    let app = test::init_service(site.app()).await;

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/read-later")
            .set_form(form.to_vec())
            .to_request(),
    )
    .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Error = test::read_body_json(res).await;
    assert_eq!(body.code(), ErrorCode::InvalidRequest);
}
