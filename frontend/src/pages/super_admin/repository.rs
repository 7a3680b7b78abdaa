use crate::api::{
    ApiClient, ApiError, CreateNews, CreateStudent, MutationResponse, ParentOption,
    QuoteResponse, StudentResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct SuperAdminRepository {
    client: Rc<ApiClient>,
}

impl Default for SuperAdminRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SuperAdminRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_parents(&self) -> Result<Vec<ParentOption>, ApiError> {
        self.client.list_parents().await
    }

    pub async fn create_students(
        &self,
        batch: Vec<CreateStudent>,
    ) -> Result<MutationResponse, ApiError> {
        self.client.create_students(batch).await
    }

    pub async fn fetch_students(&self) -> Result<Vec<StudentResponse>, ApiError> {
        self.client.list_students().await
    }

    pub async fn create_news(&self, payload: CreateNews) -> Result<MutationResponse, ApiError> {
        self.client.create_news(payload).await
    }

    pub async fn fetch_quotes(&self) -> Result<Vec<QuoteResponse>, ApiError> {
        self.client.list_quotes().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::pages::super_admin::utils::{StudentField, StudentFormState};
    use serde_json::json;

    fn repository(server: &MockServer) -> SuperAdminRepository {
        SuperAdminRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )))
    }

    #[tokio::test]
    async fn submitted_draft_reaches_the_endpoint_as_single_record() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/students");
            then.status(200).json_body(json!({ "status": true }));
        });
        let repo = repository(&server);

        let mut form = StudentFormState::new(true);
        form.update_field(StudentField::Name, " Rina ".into());
        form.update_field(StudentField::ClassName, "VIII B ".into());
        let (ticket, batch) = form.begin_submit().unwrap();
        let outcome = repo.create_students(batch).await;
        let resolution = form.complete(ticket, outcome).unwrap();

        assert!(resolution.close_and_refetch);
        assert_eq!(server.hits(&POST, "/api/students"), 1);
        assert_eq!(
            server.received()[0].body,
            Some(json!([{ "name": "Rina", "className": "VIII B", "parentId": null }]))
        );
    }

    #[tokio::test]
    async fn fetch_parents_returns_options() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/parents");
            then.status(200)
                .json_body(json!({ "data": [{ "id": 4, "name": "Bu Ani" }] }));
        });

        let parents = repository(&server).fetch_parents().await.unwrap();

        assert_eq!(
            parents,
            vec![ParentOption {
                id: 4,
                name: "Bu Ani".into()
            }]
        );
    }

    #[tokio::test]
    async fn rejected_request_surfaces_server_message() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/students");
            then.status(400)
                .json_body(json!({ "message": "Orang tua tidak ditemukan" }));
        });
        let repo = repository(&server);

        let mut form = StudentFormState::new(true);
        form.update_field(StudentField::Name, "Rina".into());
        form.update_field(StudentField::ClassName, "VIII B".into());
        form.update_field(StudentField::ParentId, "99".into());
        let before = form.draft.clone();
        let (ticket, batch) = form.begin_submit().unwrap();
        let resolution = form
            .complete(ticket, repo.create_students(batch).await)
            .unwrap();

        assert!(!resolution.close_and_refetch);
        assert_eq!(resolution.notification.text, "Orang tua tidak ditemukan");
        assert_eq!(form.draft, before);
    }
}
