use crate::LocaleCode;
use content_delivery::{
    Asset, ContentItem, ContentItemSystem, DeliveryResult, Element, MultipleChoiceOption,
};

/// SEO and social sharing elements. Kept as the API returned them; the host
/// application owns turning them into tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleMetadata {
    pub meta_title: Option<Element>,
    pub meta_description: Option<Element>,
    pub og_title: Option<Element>,
    pub og_description: Option<Element>,
    pub og_image: Option<Element>,
    pub twitter_title: Option<Element>,
    pub twitter_site: Option<Element>,
    pub twitter_creator: Option<Element>,
    pub twitter_description: Option<Element>,
    pub twitter_image: Option<Element>,
}

impl ArticleMetadata {
    fn from_item(item: &ContentItem) -> Self {
        let element = |codename: &str| item.element(codename).cloned();
        Self {
            meta_title: element("metadata__meta_title"),
            meta_description: element("metadata__meta_description"),
            og_title: element("metadata__og_title"),
            og_description: element("metadata__og_description"),
            og_image: element("metadata__og_image"),
            twitter_title: element("metadata__twitter_title"),
            twitter_site: element("metadata__twitter_site"),
            twitter_creator: element("metadata__twitter_creator"),
            twitter_description: element("metadata__twitter_description"),
            twitter_image: element("metadata__twitter_image"),
        }
    }
}

/// One language variant of an article as delivered by the API, before any
/// fallback rules are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawArticle {
    pub system: ContentItemSystem,
    pub title: Option<String>,
    pub teaser_image: Vec<Asset>,
    /// JSON-encoded list of Cloudinary image descriptors.
    pub cloudinary_image: Option<String>,
    pub post_date: Option<String>,
    pub body_copy: Option<String>,
    pub video_host: Vec<MultipleChoiceOption>,
    pub video_id: Option<String>,
    pub tweet_link: Option<String>,
    pub theme: Vec<MultipleChoiceOption>,
    pub display_options: Vec<MultipleChoiceOption>,
    pub metadata: ArticleMetadata,
}

impl RawArticle {
    pub fn from_item(item: ContentItem) -> DeliveryResult<Self> {
        let text = |codename: &str| {
            item.element(codename)
                .and_then(Element::as_text)
                .map(ToString::to_string)
        };
        let options = |codename: &str| {
            item.element(codename)
                .map_or(Ok(vec![]), Element::as_options)
        };

        Ok(Self {
            title: text("title"),
            teaser_image: item
                .element("teaser_image")
                .map_or(Ok(vec![]), Element::as_assets)?,
            cloudinary_image: item
                .element("cloudinary_image")
                .and_then(Element::as_custom)
                .map(ToString::to_string),
            post_date: item
                .element("post_date")
                .and_then(Element::as_date_time)
                .map(ToString::to_string),
            body_copy: item
                .element("body_copy")
                .and_then(Element::as_rich_text)
                .map(ToString::to_string),
            video_host: options("video_host")?,
            video_id: text("video_id"),
            tweet_link: text("tweet_link"),
            theme: options("theme")?,
            display_options: options("display_options")?,
            metadata: ArticleMetadata::from_item(&item),
            system: item.system,
        })
    }

    /// The locale the API actually returned this variant in.
    pub fn language(&self) -> LocaleCode {
        LocaleCode::from(self.system.language.as_str())
    }
}
