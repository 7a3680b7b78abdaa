use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, CreateStudent, DataEnvelope, MutationResponse, StudentResponse},
};

impl ApiClient {
    /// Posts a batch of students. A 2xx answer is returned as-is even when
    /// it reports `status: false`.
    pub async fn create_students(
        &self,
        payload: Vec<CreateStudent>,
    ) -> Result<MutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/students", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_students(&self) -> Result<Vec<StudentResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/students", base_url)))
            .await?;
        map_typed_response::<DataEnvelope<StudentResponse>>(response)
            .await
            .map(|envelope| envelope.data)
    }
}
