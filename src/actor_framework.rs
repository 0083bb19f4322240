use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, Filters, and Actions)
// =============================================================================

/// Trait that any stored record must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;
    type Filter: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Name used in logs and error messages
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Construct the full record from the generated ID and creation params
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Equality predicate backing `find_one` / `find_all`
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Soft-deleted records are only visible through `Scope::WithDeleted`
    fn is_deleted(&self) -> bool { false }

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
    fn on_delete(&mut self) -> Result<Removal, String> { Ok(Removal::Purge) }

    // --- Action Handler ---

    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// What the actor does with a record after `on_delete` succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// Drop the record from the store.
    Purge,
    /// Keep it; the hook marked it deleted.
    Retain,
}

/// Visibility of soft-deleted records in queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Active,
    WithDeleted,
}

impl Scope {
    fn admits<T: Entity>(self, item: &T) -> bool {
        match self {
            Scope::Active => !item.is_deleted(),
            Scope::WithDeleted => true,
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the request")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    FindOne {
        filter: T::Filter,
        scope: Scope,
        respond_to: Response<Option<T>>,
    },
    FindAll {
        filter: T::Filter,
        scope: Scope,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // insertion order, so queries answer in the order records were stored
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    pub async fn run(mut self) {
        info!(entity = T::KIND, "Resource actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).filter(|item| !item.is_deleted()).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindOne { filter, scope, respond_to } => {
                    let item = self.matching(&filter, scope).next().cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::FindAll { filter, scope, respond_to } => {
                    let items: Vec<T> = self.matching(&filter, scope).cloned().collect();
                    debug!(entity = T::KIND, count = items.len(), "Query answered");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let _ = respond_to.send(self.handle_delete(id));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.active_mut(&id) {
                        Some(item) => item.handle_action(action).map_err(FrameworkError::Rejected),
                        None => Err(FrameworkError::NotFound(id.to_string())),
                    };
                    let _ = respond_to.send(result);
                }
            }
        }
        info!(entity = T::KIND, "Resource actor stopped");
    }

    fn matching<'a>(&'a self, filter: &'a T::Filter, scope: Scope) -> impl Iterator<Item = &'a T> + 'a {
        self.order
            .iter()
            .filter_map(move |id| self.store.get(id))
            .filter(move |item| scope.admits(*item) && item.matches(filter))
    }

    fn active_mut(&mut self, id: &T::Id) -> Option<&mut T> {
        self.store.get_mut(id).filter(|item| !item.is_deleted())
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params((self.next_id_fn)(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        let id = item.id().clone();
        self.store.insert(id.clone(), item);
        self.order.push(id.clone());
        debug!(entity = T::KIND, id = %id, "Record created");
        Ok(id)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self
            .active_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        Ok(item.clone())
    }

    fn handle_delete(&mut self, id: T::Id) -> Result<(), FrameworkError> {
        let item = self
            .active_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        match item.on_delete().map_err(FrameworkError::Rejected)? {
            Removal::Retain => debug!(entity = T::KIND, id = %id, "Record soft-deleted"),
            Removal::Purge => {
                self.store.remove(&id);
                self.order.retain(|stored| stored != &id);
                debug!(entity = T::KIND, id = %id, "Record removed");
            }
        }
        Ok(())
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn find_one(&self, filter: T::Filter, scope: Scope) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindOne { filter, scope, respond_to }).await
    }

    pub async fn find_all(&self, filter: T::Filter, scope: Scope) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::FindAll { filter, scope, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to }).await
    }

    pub async fn perform_action(&self, id: T::Id, action: T::Action) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
