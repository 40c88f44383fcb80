use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    Envelope, ListRolesResponse, ListUsersResponse, NewUserRequest, NewUserResponse,
    UpdateUserRequest, UpdateUserRolesRequest, UserDetails, UsernameAvailability,
};

impl<T: Transport> CertCentralClient<T> {
    /// Whether `username` is free to register.
    pub fn check_username(&self, username: &str) -> Result<bool, ApiError> {
        let availability: UsernameAvailability =
            self.fetch(Call::get(format!("user/availability/{username}")))?;
        Ok(availability.into_checked()?.available)
    }

    /// Roles that can be assigned within a container.
    pub fn list_roles(&self, container_id: u64) -> Result<ListRolesResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/role")))
    }

    pub fn new_user(&self, request: &NewUserRequest) -> Result<NewUserResponse, ApiError> {
        self.fetch(Call::post("user").json(request)?)
    }

    /// The service takes this as a GET even though it sends mail.
    pub fn resend_create_user_email(&self, user_id: u64) -> Result<(), ApiError> {
        self.perform(Call::get(format!("user/{user_id}/resend-create-email")), 204)
    }

    pub fn view_user(&self, user_id: u64) -> Result<UserDetails, ApiError> {
        self.fetch(Call::get(format!("user/{user_id}")))
    }

    pub fn update_user(&self, user_id: u64, request: &UpdateUserRequest) -> Result<(), ApiError> {
        self.perform(Call::put(format!("user/{user_id}")).json(request)?, 204)
    }

    pub fn update_user_roles(
        &self,
        user_id: u64,
        request: &UpdateUserRolesRequest,
    ) -> Result<(), ApiError> {
        self.perform(Call::put(format!("user/{user_id}/role")).json(request)?, 204)
    }

    pub fn delete_user(&self, user_id: u64) -> Result<(), ApiError> {
        self.perform(Call::delete(format!("user/{user_id}")), 204)
    }

    pub fn list_users(&self, container_id: u64) -> Result<ListUsersResponse, ApiError> {
        self.fetch(Call::get(format!("user?container_id={container_id}")))
    }
}
