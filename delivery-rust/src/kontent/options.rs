pub const DEFAULT_DELIVERY_URL: &str = "https://deliver.kontent.ai";
pub const DEFAULT_PREVIEW_URL: &str = "https://preview-deliver.kontent.ai";

#[derive(Debug, Clone, Default)]
pub struct KontentDeliveryOptions {
    pub project_id: String,
    /// Overrides the host for both published and preview content.
    pub base_url: Option<String>,
    /// When set, unpublished content is served from the preview host.
    pub preview_api_key: Option<String>,
    /// Bearer key for projects with secured delivery. Ignored when a preview
    /// key is configured.
    pub secure_api_key: Option<String>,
    /// Bypass the CDN cache right after publishing.
    pub wait_for_loading_new_content: bool,
}
