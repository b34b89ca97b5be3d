//! Sample posts for a server running without a database.
//!
//! The in-process store starts empty on every boot. When
//! `BLOG_SEED_SAMPLE_CONTENT` is enabled, startup publishes this content
//! through [`PublishingService`] so the listing and detail pages have
//! something to show.

use tracing::info;

use crate::domain::ports::{AuthorRepository, PostRepository, TagRepository};
use crate::domain::{Error, PostDraft, PublishingService};

const TAG_CAPTIONS: [&str; 3] = ["Rust", "Web", "Notes"];

struct SamplePost {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    content: &'static str,
    tags: &'static [usize],
}

const SAMPLE_POSTS: [SamplePost; 4] = [
    SamplePost {
        slug: "hello-world",
        title: "Hello, world",
        excerpt: "A first post to show the blog is running.",
        content: "This post was published at startup so the listing is not empty.",
        tags: &[2],
    },
    SamplePost {
        slug: "ownership-in-practice",
        title: "Ownership in practice",
        excerpt: "Borrowing rules, seen from a request handler.",
        content: "Handlers borrow shared state and hand owned values to services.",
        tags: &[0],
    },
    SamplePost {
        slug: "cookie-sessions",
        title: "Cookie sessions",
        excerpt: "Keeping a read-later list without a session store.",
        content: "The bookmark list lives in a private cookie that only the server can read.",
        tags: &[0, 1],
    },
    SamplePost {
        slug: "comments-welcome",
        title: "Comments welcome",
        excerpt: "Leave a note under any post.",
        content: "Comments need a name, a valid email address and some text.",
        tags: &[1, 2],
    },
];

/// Counts of what [`seed_sample_content`] published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleContentOutcome {
    pub tags: usize,
    pub posts: usize,
}

/// Publish one author, a few tags and tagged posts.
///
/// Posts are stamped by the service clock in list order, so the last entry
/// is the newest.
///
/// # Errors
/// Returns the publishing error unchanged, e.g. `conflict` when a sample
/// slug is already taken.
pub async fn seed_sample_content<A, T, P>(
    publishing: &PublishingService<A, T, P>,
) -> Result<SampleContentOutcome, Error>
where
    A: AuthorRepository,
    T: TagRepository,
    P: PostRepository,
{
    let author = publishing
        .register_author("Sample", "Author", "author@example.com")
        .await?;

    let mut tags = Vec::with_capacity(TAG_CAPTIONS.len());
    for caption in TAG_CAPTIONS {
        tags.push(publishing.create_tag(caption).await?);
    }

    for sample in &SAMPLE_POSTS {
        let post = publishing
            .publish_post(PostDraft {
                title: sample.title.to_owned(),
                excerpt: sample.excerpt.to_owned(),
                image_name: None,
                date: None,
                slug: sample.slug.to_owned(),
                content: sample.content.to_owned(),
                author_id: author.id,
            })
            .await?;
        let tag_ids: Vec<_> = sample
            .tags
            .iter()
            .filter_map(|index| tags.get(*index).map(|tag| tag.id))
            .collect();
        publishing.tag_post(post.id, &tag_ids).await?;
    }

    let outcome = SampleContentOutcome {
        tags: tags.len(),
        posts: SAMPLE_POSTS.len(),
    };
    info!(
        tags = outcome.tags,
        posts = outcome.posts,
        "sample content published"
    );
    Ok(outcome)
}
