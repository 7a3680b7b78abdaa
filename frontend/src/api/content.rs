use super::{
    client::{map_typed_response, ApiClient},
    types::{ApiError, CreateNews, DataEnvelope, MutationResponse, QuoteResponse},
};

impl ApiClient {
    pub async fn create_news(&self, payload: CreateNews) -> Result<MutationResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/news", base_url))
                    .json(&payload),
            )
            .await?;
        map_typed_response(response).await
    }

    pub async fn list_quotes(&self) -> Result<Vec<QuoteResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/quotes", base_url)))
            .await?;
        map_typed_response::<DataEnvelope<QuoteResponse>>(response)
            .await
            .map(|envelope| envelope.data)
    }
}
