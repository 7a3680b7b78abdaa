use web_sys::Storage;

/// localStorage key holding the bearer token of the signed-in admin.
pub const TOKEN_KEY: &str = "token";

pub fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored session token; blank values count as absent.
pub fn session_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .and_then(|token| non_blank(&token))
}

pub(crate) fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
