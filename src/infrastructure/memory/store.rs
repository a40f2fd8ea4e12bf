//! In-Memory Store Implementation
//!
//! 同一个实例同时实现 UserRepositoryPort 和 PostRepositoryPort，
//! 这样删除用户时可以一并删除其帖子

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use crate::application::ports::{
    NewPost, NewUser, PostChanges, PostRepositoryPort, RepositoryError, UserChanges,
    UserRepositoryPort,
};
use crate::domain::{Post, PostId, User, UserId};

/// 内存存储
pub struct InMemoryStore {
    users: DashMap<UserId, User>,
    posts: DashMap<PostId, Post>,
    next_user_id: AtomicI64,
    next_post_id: AtomicI64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            posts: DashMap::new(),
            next_user_id: AtomicI64::new(1),
            next_post_id: AtomicI64::new(1),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sorted_by_id<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by_key(|item| key(item));
    items
}

#[async_trait]
impl UserRepositoryPort for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = self.users.iter().map(|u| u.value().clone()).collect();
        Ok(sorted_by_id(users, |u: &User| u.id))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.get(&id).map(|u| u.value().clone()))
    }

    async fn insert(&self, user: &NewUser) -> Result<User, RepositoryError> {
        let id = self.next_user_id.fetch_add(1, Ordering::SeqCst);
        let user = User::new(id, user.name.as_str());
        self.users.insert(id, user.clone());
        tracing::debug!(user_id = id, "User stored in memory");
        Ok(user)
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, RepositoryError> {
        match self.users.get_mut(&id) {
            Some(mut user) => {
                user.name = changes.name.as_str().to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: UserId) -> Result<u64, RepositoryError> {
        if self.users.remove(&id).is_none() {
            return Ok(0);
        }
        self.posts.retain(|_, post| post.user_id != id);
        Ok(1)
    }

    async fn find_posts(&self, id: UserId) -> Result<Vec<Post>, RepositoryError> {
        let posts = self
            .posts
            .iter()
            .filter(|p| p.user_id == id)
            .map(|p| p.value().clone())
            .collect();
        Ok(sorted_by_id(posts, |p: &Post| p.id))
    }
}

#[async_trait]
impl PostRepositoryPort for InMemoryStore {
    async fn find_all(&self) -> Result<Vec<Post>, RepositoryError> {
        let posts = self.posts.iter().map(|p| p.value().clone()).collect();
        Ok(sorted_by_id(posts, |p: &Post| p.id))
    }

    async fn find_by_id(&self, id: PostId) -> Result<Option<Post>, RepositoryError> {
        Ok(self.posts.get(&id).map(|p| p.value().clone()))
    }

    async fn insert(&self, post: &NewPost) -> Result<Post, RepositoryError> {
        // 用户读锁持有到帖子写入之后
        let Some(_owner) = self.users.get(&post.user_id) else {
            return Err(RepositoryError::NotFound(format!("user {}", post.user_id)));
        };
        let id = self.next_post_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            user_id: post.user_id,
            text: post.text.as_str().to_string(),
        };
        self.posts.insert(id, post.clone());
        tracing::debug!(post_id = id, user_id = post.user_id, "Post stored in memory");
        Ok(post)
    }

    async fn update(&self, id: PostId, changes: &PostChanges) -> Result<u64, RepositoryError> {
        match self.posts.get_mut(&id) {
            Some(mut post) => {
                post.text = changes.text.as_str().to_string();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn remove(&self, id: PostId) -> Result<u64, RepositoryError> {
        Ok(self.posts.remove(&id).map_or(0, |_| 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PostText, UserName};

    fn new_user(name: &str) -> NewUser {
        NewUser {
            name: UserName::parse(name).unwrap(),
        }
    }

    fn new_post(user_id: UserId, text: &str) -> NewPost {
        NewPost {
            user_id,
            text: PostText::parse(text).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_ids_are_generated_in_order() {
        let store = InMemoryStore::new();
        let a = UserRepositoryPort::insert(&store, &new_user("Merry")).await.unwrap();
        let b = UserRepositoryPort::insert(&store, &new_user("Pippin")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));

        let all = UserRepositoryPort::find_all(&store).await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_update_missing_user_affects_nothing() {
        let store = InMemoryStore::new();
        let changes = UserChanges {
            name: UserName::parse("Nobody").unwrap(),
        };
        assert_eq!(UserRepositoryPort::update(&store, 5, &changes).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_remove_user_drops_posts() {
        let store = InMemoryStore::new();
        let user = UserRepositoryPort::insert(&store, &new_user("Sam")).await.unwrap();
        let other = UserRepositoryPort::insert(&store, &new_user("Rosie")).await.unwrap();
        PostRepositoryPort::insert(&store, &new_post(user.id, "po-tay-toes"))
            .await
            .unwrap();
        PostRepositoryPort::insert(&store, &new_post(other.id, "hello"))
            .await
            .unwrap();

        assert_eq!(UserRepositoryPort::remove(&store, user.id).await.unwrap(), 1);
        assert!(store.find_posts(user.id).await.unwrap().is_empty());
        assert_eq!(PostRepositoryPort::find_all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_post_requires_existing_user() {
        let store = InMemoryStore::new();
        let result = PostRepositoryPort::insert(&store, &new_post(1, "lost")).await;
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_remove_leaves_no_orphan_posts() {
        for _ in 0..20 {
            let store = InMemoryStore::new().arc();
            let user_id = UserRepositoryPort::insert(&*store, &new_user("Gollum"))
                .await
                .unwrap()
                .id;

            let writers: Vec<_> = (0..8)
                .map(|i| {
                    let store = store.clone();
                    tokio::spawn(async move {
                        let _ = PostRepositoryPort::insert(
                            &*store,
                            &new_post(user_id, &format!("precious {}", i)),
                        )
                        .await;
                    })
                })
                .collect();
            let remover = {
                let store = store.clone();
                tokio::spawn(async move { UserRepositoryPort::remove(&*store, user_id).await })
            };

            for writer in writers {
                writer.await.unwrap();
            }
            assert_eq!(remover.await.unwrap().unwrap(), 1);
            assert!(PostRepositoryPort::find_all(&*store).await.unwrap().is_empty());
        }
    }
}
