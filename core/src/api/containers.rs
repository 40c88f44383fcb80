use crate::client::{Call, CertCentralClient};
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ContainerDetails, ListChildContainersResponse, ListContainerTemplatesResponse,
    NewContainerRequest, NewContainerResponse, UpdateContainerRequest, ViewContainerResponse,
    ViewContainerTemplateResponse,
};

impl<T: Transport> CertCentralClient<T> {
    /// Create a child of `parent_id`.
    pub fn new_container(
        &self,
        parent_id: u64,
        request: &NewContainerRequest,
    ) -> Result<NewContainerResponse, ApiError> {
        self.fetch(Call::post(format!("container/{parent_id}/children")).json(request)?)
    }

    pub fn update_container(
        &self,
        container_id: u64,
        request: &UpdateContainerRequest,
    ) -> Result<(), ApiError> {
        self.perform(Call::put(format!("container/{container_id}")).json(request)?, 204)
    }

    pub fn deactivate_container(&self, container_id: u64) -> Result<(), ApiError> {
        self.perform(Call::put(format!("container/{container_id}/deactivate")), 204)
    }

    /// Reactivation lives at `/active`, not `/activate`.
    pub fn activate_container(&self, container_id: u64) -> Result<(), ApiError> {
        self.perform(Call::put(format!("container/{container_id}/active")), 204)
    }

    pub fn view_container(&self, container_id: u64) -> Result<ViewContainerResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}")))
    }

    pub fn list_container_templates(
        &self,
        container_id: u64,
    ) -> Result<ListContainerTemplatesResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/template")))
    }

    pub fn view_container_template(
        &self,
        container_id: u64,
        template_id: u64,
    ) -> Result<ViewContainerTemplateResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/template/{template_id}")))
    }

    pub fn list_child_containers(
        &self,
        container_id: u64,
    ) -> Result<ListChildContainersResponse, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/children")))
    }

    pub fn view_parent_container(&self, container_id: u64) -> Result<ContainerDetails, ApiError> {
        self.fetch(Call::get(format!("container/{container_id}/parent")))
    }
}
