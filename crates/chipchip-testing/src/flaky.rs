//! Failure injection.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use chipchip_client::{ChirpApi, Error, Result};
use chipchip_types::{CurrentUser, ListParams, Post, PostPage};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CurrentUser,
    ListPosts,
    ListMyPosts,
    GetPost,
    CreatePost,
    UpdatePost,
    DeletePost,
}

/// Scripted failure. Kept separate from `Error` because that type is not `Clone`.
#[derive(Debug, Clone)]
enum Fault {
    Server { status: u16, message: String },
    Unauthorized(String),
}

impl Fault {
    fn into_error(self) -> Error {
        match self {
            Fault::Server { status, message } => Error::Server { status, message },
            Fault::Unauthorized(message) => Error::Unauthorized(message),
        }
    }
}

#[derive(Default)]
struct Script {
    faults: HashMap<Operation, VecDeque<Fault>>,
    calls: HashMap<Operation, usize>,
}

/// Wraps another backend, failing queued calls and counting every call.
pub struct FlakyApi<A> {
    inner: A,
    script: Mutex<Script>,
}

impl<A: ChirpApi> FlakyApi<A> {
    pub fn new(inner: A) -> Self {
        Self {
            inner,
            script: Mutex::new(Script::default()),
        }
    }

    /// Make the next call to `op` fail with a server error.
    pub fn fail_next(&self, op: Operation, status: u16, message: &str) -> &Self {
        self.push(
            op,
            Fault::Server {
                status,
                message: message.to_string(),
            },
        );
        self
    }

    /// Make the next call to `op` fail as the API does for someone else's chirp.
    pub fn reject_next(&self, op: Operation, message: &str) -> &Self {
        self.push(op, Fault::Unauthorized(message.to_string()));
        self
    }

    pub fn calls(&self, op: Operation) -> usize {
        self.lock().calls.get(&op).copied().unwrap_or(0)
    }

    pub fn inner(&self) -> &A {
        &self.inner
    }

    fn push(&self, op: Operation, fault: Fault) {
        self.lock().faults.entry(op).or_default().push_back(fault);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Script> {
        self.script.lock().unwrap_or_else(|p| p.into_inner())
    }

    fn enter(&self, op: Operation) -> Result<()> {
        let mut script = self.lock();
        *script.calls.entry(op).or_default() += 1;
        match script.faults.get_mut(&op).and_then(VecDeque::pop_front) {
            Some(fault) => Err(fault.into_error()),
            None => Ok(()),
        }
    }
}

impl<A: ChirpApi> ChirpApi for FlakyApi<A> {
    fn id(&self) -> &'static str {
        "flaky"
    }

    fn current_user(&self) -> Result<Option<CurrentUser>> {
        self.enter(Operation::CurrentUser)?;
        self.inner.current_user()
    }

    fn list_posts(&self, params: ListParams) -> Result<PostPage> {
        self.enter(Operation::ListPosts)?;
        self.inner.list_posts(params)
    }

    fn list_my_posts(&self, params: ListParams) -> Result<PostPage> {
        self.enter(Operation::ListMyPosts)?;
        self.inner.list_my_posts(params)
    }

    fn get_post(&self, id: Uuid) -> Result<Post> {
        self.enter(Operation::GetPost)?;
        self.inner.get_post(id)
    }

    fn create_post(&self, content: &str) -> Result<Post> {
        self.enter(Operation::CreatePost)?;
        self.inner.create_post(content)
    }

    fn update_post(&self, id: Uuid, content: &str) -> Result<Post> {
        self.enter(Operation::UpdatePost)?;
        self.inner.update_post(id, content)
    }

    fn delete_post(&self, id: Uuid) -> Result<()> {
        self.enter(Operation::DeletePost)?;
        self.inner.delete_post(id)
    }
}
