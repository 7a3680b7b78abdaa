#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ParentOption, QuoteResponse, StudentResponse};

    pub fn parent(id: i64, name: &str) -> ParentOption {
        ParentOption {
            id,
            name: name.into(),
        }
    }

    pub fn student(
        id: i64,
        name: &str,
        class_name: &str,
        parent: Option<ParentOption>,
    ) -> StudentResponse {
        StudentResponse {
            id,
            name: name.into(),
            class_name: class_name.into(),
            parent,
        }
    }

    pub fn quote(id: i64, content: &str, author: Option<&str>) -> QuoteResponse {
        QuoteResponse {
            id,
            content: content.into(),
            author: author.map(str::to_string),
            created_at: None,
        }
    }
}
