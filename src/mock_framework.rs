//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_find_one`] or [`expect_action`] to assert
//! what the client asked for and to answer it.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest, Scope};
use tokio::sync::{mpsc, oneshot};

pub type Reply<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Creates a client whose requests land on a receiver owned by the test.
///
/// Nothing answers unless the test does, so each interaction can be
/// checked and answered (success, absence, failure) deterministically.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Reply<T::Id>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindOne request
pub async fn expect_find_one<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Scope, Reply<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindOne { filter, scope, respond_to }) => Some((filter, scope, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a FindAll request
pub async fn expect_find_all<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Filter, Scope, Reply<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::FindAll { filter, scope, respond_to }) => Some((filter, scope, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Action, Reply<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{User, UserCreate, UserFilter};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<User>(10);

        let lookup = client.clone();
        let create_task = tokio::spawn(async move {
            client.create(UserCreate::new("Test", "test@example.com")).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        responder.send(Ok("user_1".to_string())).unwrap();
        assert_eq!(create_task.await.unwrap(), Ok("user_1".to_string()));

        let find_task = tokio::spawn(async move {
            lookup.find_one(UserFilter::by_id("user_1"), Scope::Active).await
        });
        let (filter, scope, responder) = expect_find_one(&mut receiver).await.expect("Expected FindOne request");
        assert_eq!(filter, UserFilter::by_id("user_1"));
        assert_eq!(scope, Scope::Active);
        responder.send(Ok(None)).unwrap();
        assert_eq!(find_task.await.unwrap(), Ok(None));
    }
}
