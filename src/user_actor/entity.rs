use crate::actor_framework::Entity;
use crate::domain::{User, UserCreate, UserFilter, UserPatch};

impl Entity for User {
    type Id = String;
    type CreateParams = UserCreate;
    type Patch = UserPatch;
    type Filter = UserFilter;
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "user";

    fn id(&self) -> &String { &self.id }

    /// Creates a new User from creation parameters.
    ///
    /// # Errors
    /// Rejects an email without an `@`.
    fn from_create_params(id: String, params: UserCreate) -> Result<Self, String> {
        if !params.email.contains('@') {
            return Err(format!("invalid email: {}", params.email));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
        })
    }

    fn matches(&self, filter: &UserFilter) -> bool {
        filter.id.as_ref().map_or(true, |id| &self.id == id)
            && filter.email.as_ref().map_or(true, |email| &self.email == email)
    }

    /// Updates the user's profile information.
    ///
    /// # Fields Updated
    /// - `name`: User's display name
    /// - `email`: User's email address
    fn on_update(&mut self, patch: UserPatch) -> Result<(), String> {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            if !email.contains('@') {
                return Err(format!("invalid email: {email}"));
            }
            self.email = email;
        }
        Ok(())
    }

    /// Users have no custom actions.
    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
