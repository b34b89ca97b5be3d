//! In-process implementation of every blog repository port.
//!
//! Used when no database URL is configured and by HTTP tests. Orderings,
//! uniqueness of slugs, reference checks and cascading deletes mirror the
//! PostgreSQL adapters so services behave the same against either store.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    AuthorRepository, BlogPersistenceError, CommentRepository, PostRepository, TagRepository,
};
use crate::domain::{
    Author, AuthorId, Comment, CommentId, NewAuthor, NewComment, NewPost, NewTag, Post, PostId,
    Slug, Tag, TagId,
};

#[derive(Debug, Default)]
struct StoreState {
    last_id: i64,
    authors: BTreeMap<i64, Author>,
    tags: BTreeMap<i64, Tag>,
    posts: BTreeMap<i64, Post>,
    /// (post id, tag id)
    post_tags: BTreeSet<(i64, i64)>,
    comments: BTreeMap<i64, Comment>,
}

impl StoreState {
    /// Identifiers are shared across tables; only uniqueness and ascending
    /// order per table matter.
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn require_post(&self, post_id: PostId) -> Result<(), BlogPersistenceError> {
        if self.posts.contains_key(&post_id.get()) {
            Ok(())
        } else {
            Err(BlogPersistenceError::missing_reference(format!(
                "post {post_id} does not exist"
            )))
        }
    }
}

/// Mutex-guarded store shared by all repository ports.
#[derive(Debug, Default)]
pub struct InMemoryBlogStore {
    state: Mutex<StoreState>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryBlogStore {
    async fn create(&self, author: &NewAuthor) -> Result<Author, BlogPersistenceError> {
        let mut state = self.state();
        let id = state.next_id();
        let stored = Author {
            id: AuthorId::new(id),
            first_name: author.first_name.clone(),
            last_name: author.last_name.clone(),
            email_address: author.email_address.clone(),
        };
        state.authors.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, BlogPersistenceError> {
        Ok(self.state().authors.get(&id.get()).cloned())
    }
}

#[async_trait]
impl TagRepository for InMemoryBlogStore {
    async fn create(&self, tag: &NewTag) -> Result<Tag, BlogPersistenceError> {
        let mut state = self.state();
        let id = state.next_id();
        let stored = Tag {
            id: TagId::new(id),
            caption: tag.caption.clone(),
        };
        state.tags.insert(id, stored.clone());
        Ok(stored)
    }

    async fn tags_for_post(&self, post_id: PostId) -> Result<Vec<Tag>, BlogPersistenceError> {
        let state = self.state();
        let mut tags: Vec<Tag> = state
            .post_tags
            .iter()
            .filter(|(linked_post, _)| *linked_post == post_id.get())
            .filter_map(|(_, tag_id)| state.tags.get(tag_id).cloned())
            .collect();
        tags.sort_by(|a, b| a.caption.cmp(&b.caption).then(a.id.get().cmp(&b.id.get())));
        Ok(tags)
    }

    async fn attach(&self, post_id: PostId, tag_ids: &[TagId]) -> Result<(), BlogPersistenceError> {
        let mut state = self.state();
        state.require_post(post_id)?;
        if let Some(missing) = tag_ids.iter().find(|id| !state.tags.contains_key(&id.get())) {
            return Err(BlogPersistenceError::missing_reference(format!(
                "tag {} does not exist",
                missing.get()
            )));
        }
        for tag_id in tag_ids {
            state.post_tags.insert((post_id.get(), tag_id.get()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn insert(&self, post: &NewPost) -> Result<Post, BlogPersistenceError> {
        let mut state = self.state();
        let author = state
            .authors
            .get(&post.author_id.get())
            .cloned()
            .ok_or_else(|| {
                BlogPersistenceError::missing_reference(format!(
                    "author {} does not exist",
                    post.author_id
                ))
            })?;
        if state.posts.values().any(|existing| existing.slug == post.slug) {
            return Err(BlogPersistenceError::duplicate_slug(post.slug.as_str()));
        }

        let id = state.next_id();
        let stored = Post {
            id: PostId::new(id),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            image_name: post.image_name.clone(),
            date: post.date,
            slug: post.slug.clone(),
            content: post.content.clone(),
            author,
        };
        state.posts.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_slug(&self, slug: &Slug) -> Result<Option<Post>, BlogPersistenceError> {
        Ok(self
            .state()
            .posts
            .values()
            .find(|post| &post.slug == slug)
            .cloned())
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, BlogPersistenceError> {
        Ok(self.state().posts.get(&id.get()).cloned())
    }

    async fn list_recent(&self, limit: Option<usize>) -> Result<Vec<Post>, BlogPersistenceError> {
        let mut posts: Vec<Post> = self.state().posts.values().cloned().collect();
        posts.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.get().cmp(&a.id.get())));
        if let Some(limit) = limit {
            posts.truncate(limit);
        }
        Ok(posts)
    }

    async fn find_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, BlogPersistenceError> {
        let state = self.state();
        let wanted: BTreeSet<i64> = ids.iter().map(|id| id.get()).collect();
        Ok(wanted
            .iter()
            .filter_map(|id| state.posts.get(id).cloned())
            .collect())
    }

    async fn delete(&self, id: PostId) -> Result<bool, BlogPersistenceError> {
        let mut state = self.state();
        if state.posts.remove(&id.get()).is_none() {
            return Ok(false);
        }
        state.comments.retain(|_, comment| comment.post_id != id);
        state.post_tags.retain(|(post_id, _)| *post_id != id.get());
        Ok(true)
    }
}

#[async_trait]
impl CommentRepository for InMemoryBlogStore {
    async fn insert(&self, comment: &NewComment) -> Result<Comment, BlogPersistenceError> {
        let mut state = self.state();
        state.require_post(comment.post_id)?;
        let id = state.next_id();
        let stored = Comment {
            id: CommentId::new(id),
            user_name: comment.user_name.clone(),
            user_mail: comment.user_mail.clone(),
            text: comment.text.clone(),
            post_id: comment.post_id,
        };
        state.comments.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_for_post(&self, post_id: PostId) -> Result<Vec<Comment>, BlogPersistenceError> {
        Ok(self
            .state()
            .comments
            .values()
            .rev()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }
}
