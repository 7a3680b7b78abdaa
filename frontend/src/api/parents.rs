use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, DataEnvelope, ParentOption},
};

impl ApiClient {
    pub async fn list_parents(&self) -> Result<Vec<ParentOption>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/parents", base_url)))
            .await?;
        map_typed_response::<DataEnvelope<ParentOption>>(response)
            .await
            .map(|envelope| envelope.data)
    }
}
